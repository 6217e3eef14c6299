//! Sequential dependency-scan engine
//!
//! Runs the dependency tool once per source file, strictly in order,
//! waiting for each invocation to finish before starting the next.
//! A failed scan is recorded and the run continues with the next file.

use std::path::Path;

use crate::error::{GendepsError, GendepsResult};
use crate::layout::ProjectLayout;
use crate::scanner::{retain_c_family, scan_source_dir};
use crate::toolchain::ToolCommand;

use super::options::GenOptions;
use super::result::{GenEvent, GenReport};

/// Outcome of a single scan invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStatus {
    /// The tool exited successfully
    Completed,
    /// The tool exited nonzero, was killed, or could not be spawned
    Failed { detail: String },
}

/// Runs one dependency scan for a single source file
pub trait ScanRunner {
    fn run(&self, tool: &ToolCommand, input: &Path, output: &Path) -> ScanStatus;
}

/// Runner that spawns the real tool process and waits for it
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ScanRunner for ProcessRunner {
    fn run(&self, tool: &ToolCommand, input: &Path, output: &Path) -> ScanStatus {
        match tool.scan_command(input, output).status() {
            Ok(status) if status.success() => ScanStatus::Completed,
            Ok(status) => ScanStatus::Failed {
                detail: match status.code() {
                    Some(code) => format!("exit status {code}"),
                    None => "terminated by signal".to_string(),
                },
            },
            Err(e) => ScanStatus::Failed {
                detail: format!("failed to spawn '{}': {e}", tool.program()),
            },
        }
    }
}

/// Generate dependency files for every file in the layout's source directory
pub fn generate(
    layout: &ProjectLayout,
    tool: &ToolCommand,
    options: &GenOptions,
) -> GendepsResult<GenReport> {
    generate_with_callback(layout, tool, options, |_| {})
}

/// Generate dependency files, emitting progress events as scans run
pub fn generate_with_callback(
    layout: &ProjectLayout,
    tool: &ToolCommand,
    options: &GenOptions,
    callback: impl FnMut(&GenEvent),
) -> GendepsResult<GenReport> {
    generate_with(layout, tool, options, &ProcessRunner, callback)
}

/// Generate dependency files with an injected runner
pub fn generate_with(
    layout: &ProjectLayout,
    tool: &ToolCommand,
    options: &GenOptions,
    runner: &dyn ScanRunner,
    mut callback: impl FnMut(&GenEvent),
) -> GendepsResult<GenReport> {
    let mut entries = scan_source_dir(layout.source_dir())?;
    if options.sources_only {
        entries = retain_c_family(entries);
    }

    // The deps directory is never created implicitly. Refuse before the
    // first invocation so no tool process runs against a missing target.
    let deps_dir = layout.deps_dir();
    if !deps_dir.is_dir() {
        return Err(GendepsError::DepsDirNotFound {
            path: deps_dir.to_path_buf(),
        });
    }

    let total = entries.len();
    let mut report = GenReport::new();

    for (index, entry) in entries.iter().enumerate() {
        let output = layout.dep_file_path(&entry.file_name);

        callback(&GenEvent::ScanStart {
            index,
            total,
            input: entry.display_name(),
        });

        match runner.run(tool, &entry.path, &output) {
            ScanStatus::Completed => {
                callback(&GenEvent::DepWritten {
                    index,
                    output: output.display().to_string(),
                });
                report.add_written(output);
            }
            ScanStatus::Failed { detail } => {
                callback(&GenEvent::ScanFailed {
                    index,
                    input: entry.display_name(),
                    detail: detail.clone(),
                });
                report.add_failed(entry.path.clone(), detail);
            }
        }
    }

    Ok(report)
}
