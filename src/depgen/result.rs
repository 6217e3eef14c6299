//! Generation results and progress events

use std::path::PathBuf;

/// A source file whose dependency scan did not produce an output
#[derive(Debug, Clone)]
pub struct ScanFailure {
    /// Path of the scanned source file
    pub input: PathBuf,
    /// Human-readable failure detail (exit status or spawn error)
    pub detail: String,
}

/// Outcome of a dependency-generation run
#[derive(Debug, Default)]
pub struct GenReport {
    /// Dependency files written, in scan order
    pub written: Vec<PathBuf>,
    /// Scans that failed, in scan order
    pub failed: Vec<ScanFailure>,
}

impl GenReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully written dependency file
    pub fn add_written(&mut self, output: PathBuf) {
        self.written.push(output);
    }

    /// Record a failed scan
    pub fn add_failed(&mut self, input: PathBuf, detail: impl Into<String>) {
        self.failed.push(ScanFailure {
            input,
            detail: detail.into(),
        });
    }

    /// Total number of scans attempted
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    /// Whether every attempted scan produced a dependency file
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Progress events emitted during generation
#[derive(Debug, Clone)]
pub enum GenEvent {
    /// A scan is about to start
    ScanStart {
        index: usize,
        total: usize,
        input: String,
    },
    /// A dependency file was written
    DepWritten { index: usize, output: String },
    /// A scan failed; generation continues with the next file
    ScanFailed {
        index: usize,
        input: String,
        detail: String,
    },
}
