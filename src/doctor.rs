//! Environment checks for the doctor command

use crate::layout::ProjectLayout;
use crate::scanner::{self, scan_source_dir};
use crate::toolchain::{detect_default_tool, ToolCommand};

/// Status of a single doctor check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "✓"),
            CheckStatus::Warning => write!(f, "⚠"),
            CheckStatus::Error => write!(f, "✗"),
        }
    }
}

/// One doctor check result
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub recommendation: Option<String>,
}

/// Doctor validation results
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    pub checks: Vec<DoctorCheck>,
}

impl DoctorReport {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn passes(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Pass)
            .count()
    }

    pub fn warnings(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Warning)
            .count()
    }

    pub fn errors(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Error)
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    fn add_pass(&mut self, name: &str, message: String) {
        self.checks.push(DoctorCheck {
            name: name.to_string(),
            status: CheckStatus::Pass,
            message,
            recommendation: None,
        });
    }

    fn add_warning(&mut self, name: &str, message: String, recommendation: &str) {
        self.checks.push(DoctorCheck {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message,
            recommendation: Some(recommendation.to_string()),
        });
    }

    fn add_error(&mut self, name: &str, message: String, recommendation: &str) {
        self.checks.push(DoctorCheck {
            name: name.to_string(),
            status: CheckStatus::Error,
            message,
            recommendation: Some(recommendation.to_string()),
        });
    }
}

/// Run all environment checks for a project layout.
///
/// `configured_tool` is the tool name from the flag, environment, or
/// config file; `None` triggers compiler auto-detection.
pub fn run_doctor(layout: &ProjectLayout, configured_tool: Option<&str>) -> DoctorReport {
    let mut report = DoctorReport::new();

    check_source_dir(layout, &mut report);
    check_deps_dir(layout, &mut report);
    check_include_dir(layout, &mut report);
    check_tool(layout, configured_tool, &mut report);

    report
}

fn check_source_dir(layout: &ProjectLayout, report: &mut DoctorReport) {
    match scan_source_dir(layout.source_dir()) {
        Ok(entries) => {
            let c_family = entries
                .iter()
                .filter(|e| {
                    let name = e.display_name();
                    scanner::is_c_source_file(&name)
                        || scanner::is_cpp_source_file(&name)
                        || scanner::is_header_file(&name)
                })
                .count();
            report.add_pass(
                "source directory",
                format!(
                    "{} ({} files, {} C/C++)",
                    layout.source_dir().display(),
                    entries.len(),
                    c_family
                ),
            );
        }
        Err(e) => report.add_error(
            "source directory",
            e.to_string(),
            "check the base directory or the [layout] source setting",
        ),
    }
}

fn check_deps_dir(layout: &ProjectLayout, report: &mut DoctorReport) {
    let deps_dir = layout.deps_dir();
    if deps_dir.is_dir() {
        report.add_pass("dependency directory", deps_dir.display().to_string());
    } else {
        report.add_error(
            "dependency directory",
            format!("not found: {}", deps_dir.display()),
            "create it before running gen; gendeps does not create it",
        );
    }
}

fn check_include_dir(layout: &ProjectLayout, report: &mut DoctorReport) {
    let include_dir = layout.include_dir();
    if include_dir.is_dir() {
        report.add_pass("include directory", include_dir.display().to_string());
    } else {
        report.add_warning(
            "include directory",
            format!("not found: {}", include_dir.display()),
            "scans still run, but the tool may warn about the missing include path",
        );
    }
}

fn check_tool(layout: &ProjectLayout, configured_tool: Option<&str>, report: &mut DoctorReport) {
    match configured_tool {
        Some(program) => {
            let tool = ToolCommand::new(program, layout.include_dir());
            if tool.is_available() {
                report.add_pass("dependency tool", format!("'{program}' is available"));
            } else {
                report.add_error(
                    "dependency tool",
                    format!("'{program}' not found on PATH"),
                    "install it, or point --tool / GENDEPS_TOOL / [tool] command elsewhere",
                );
            }
        }
        None => match detect_default_tool() {
            Ok(program) => {
                report.add_pass("dependency tool", format!("auto-detected '{program}'"));
            }
            Err(e) => report.add_error(
                "dependency tool",
                e.to_string(),
                "install a C compiler, or set --tool / GENDEPS_TOOL / [tool] command",
            ),
        },
    }
}
