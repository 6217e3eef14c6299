//! Dependency generation use case
//!
//! Orchestrates one run of the generator:
//! - Validating the project layout up front
//! - Enumerating the source entries
//! - Spawning the scan tool once per entry, strictly in sequence
//! - Collecting per-file outcomes into a report

mod engine;
mod options;
mod result;

pub use engine::{generate, generate_with, generate_with_callback, ProcessRunner, ScanRunner, ScanStatus};
pub use options::GenOptions;
pub use result::{GenEvent, GenReport, ScanFailure};
