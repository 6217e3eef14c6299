//! Gendeps - Makefile-fragment dependency generator
//!
//! Gendeps walks a project's source directory and invokes a C-family
//! compiler once per file in preprocessor dependency mode, writing one
//! `.d` Makefile fragment per source file into a pre-existing
//! dependency directory.

pub mod config;
pub mod depgen;
pub mod doctor;
pub mod error;
pub mod layout;
pub mod scanner;
pub mod toolchain;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, LayoutConfig, ToolConfig};
pub use depgen::{generate, generate_with_callback, GenEvent, GenOptions, GenReport};
pub use doctor::{run_doctor, CheckStatus, DoctorCheck, DoctorReport};
pub use error::{GendepsError, GendepsResult};
pub use layout::ProjectLayout;
pub use scanner::{scan_source_dir, SourceEntry};
pub use toolchain::{detect_default_tool, ToolCommand};
