//! Error types for gendeps
//!
//! Uses `thiserror` for library errors; the binary converts them to
//! `anyhow` at the CLI edge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gendeps operations
pub type GendepsResult<T> = Result<T, GendepsError>;

/// Main error type for gendeps operations
#[derive(Error, Debug)]
pub enum GendepsError {
    /// Source directory missing or not a directory
    #[error("source directory not found: {path}")]
    SourceDirNotFound { path: PathBuf },

    /// Dependency output directory must exist before a run
    #[error("dependency directory not found: {path} (gendeps does not create it)")]
    DepsDirNotFound { path: PathBuf },

    /// The configured scan tool cannot be spawned
    #[error("dependency tool '{program}' not found on PATH")]
    ToolNotFound { program: String },

    /// Auto-detection ran out of candidate compilers
    #[error("no usable C compiler found (tried {tried})")]
    NoDefaultTool { tried: String },

    /// Configuration file could not be parsed or fails validation
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
