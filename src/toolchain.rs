//! External dependency-scan tool
//!
//! Header-dependency information always comes from invoking a C-family
//! compiler in dependency-scan-only mode; gendeps never reimplements
//! include resolution. [`ToolCommand`] is the whole collaborator contract:
//! which program to run and how its argv is laid out for one input file.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{GendepsError, GendepsResult};

/// Flag asking gcc-compatible compilers for user-header dependencies only,
/// with no object file produced.
pub const DEP_SCAN_FLAG: &str = "-MM";

/// Compilers probed, in order, when none is configured.
pub const DEFAULT_TOOL_CANDIDATES: [&str; 4] = ["gcc", "clang", "g++", "clang++"];

/// The external command gendeps shells out to, one invocation per file.
///
/// The argv shape is fixed: `<program> -I<include> [extra...] <input> -MM -o
/// <output>`. The include flag is spelled joined (`-I./include`), matching
/// what gcc and clang accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    include_dir: PathBuf,
    extra_args: Vec<String>,
}

impl ToolCommand {
    /// Describe a tool invocation against one include directory.
    pub fn new(program: impl Into<String>, include_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            include_dir: include_dir.into(),
            extra_args: Vec::new(),
        }
    }

    /// Arguments inserted after the include flag and before the input path
    /// (dialect selection, defines, and the like).
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Program name as configured
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Argv for scanning `input` into `output`, program excluded.
    pub fn scan_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.extra_args.len() + 5);

        let mut include = OsString::from("-I");
        include.push(self.include_dir.as_os_str());
        args.push(include);

        args.extend(self.extra_args.iter().map(OsString::from));
        args.push(input.as_os_str().to_os_string());
        args.push(OsString::from(DEP_SCAN_FLAG));
        args.push(OsString::from("-o"));
        args.push(output.as_os_str().to_os_string());
        args
    }

    /// Ready-to-spawn command for one input file.
    ///
    /// Stdio is inherited, so the tool's diagnostics land on the caller's
    /// stderr exactly as they would in a shell.
    pub fn scan_command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.scan_args(input, output));
        cmd
    }

    /// Shell-style rendering of one invocation for verbose output.
    pub fn render_scan(&self, input: &Path, output: &Path) -> String {
        let mut rendered = self.program.clone();
        for arg in self.scan_args(input, output) {
            rendered.push(' ');
            rendered.push_str(&arg.to_string_lossy());
        }
        rendered
    }

    /// Whether the program can be spawned at all.
    ///
    /// Probes `<program> --version` with silenced stdio. Only a
    /// spawn-time "not found" counts as unavailable; a tool that runs but
    /// dislikes `--version` is still a tool.
    pub fn is_available(&self) -> bool {
        probe(&self.program)
    }
}

/// Pick a default compiler when none is configured.
///
/// Probes [`DEFAULT_TOOL_CANDIDATES`] in order and returns the first one
/// that spawns.
pub fn detect_default_tool() -> GendepsResult<&'static str> {
    for candidate in DEFAULT_TOOL_CANDIDATES {
        if probe(candidate) {
            return Ok(candidate);
        }
    }
    Err(GendepsError::NoDefaultTool {
        tried: DEFAULT_TOOL_CANDIDATES.join(", "),
    })
}

fn probe(program: &str) -> bool {
    match Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(_) => true,
        Err(e) => !matches!(e.kind(), ErrorKind::NotFound),
    }
}
