//! Test environment for gendeps CLI integration tests.
//!
//! Provides `TestProject` - an isolated project tree with the default
//! benchmark layout, helpers to run the gendeps binary, and a fake
//! dependency tool that records every scan invocation.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a gendeps CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project tree with temp directories.
///
/// The binary runs with `root` as its working directory; the default
/// base directory `benchmark/` lives inside it. HOME and XDG_CONFIG_HOME
/// point at a second temp directory so user-level config stays out.
pub struct TestProject {
    /// Working directory for the binary
    pub root: TempDir,
    /// Isolated HOME
    home: TempDir,
}

impl TestProject {
    /// Create a project with the default layout under `benchmark/`
    pub fn new() -> Self {
        let project = Self::bare();
        std::fs::create_dir_all(project.base_path("src")).expect("create src dir");
        std::fs::create_dir_all(project.base_path("include")).expect("create include dir");
        std::fs::create_dir_all(project.base_path("buildinfo/deps")).expect("create deps dir");
        project
    }

    /// Create an empty root with no base directory at all
    pub fn bare() -> Self {
        Self {
            root: TempDir::new().expect("create project temp dir"),
            home: TempDir::new().expect("create home temp dir"),
        }
    }

    /// Path inside the base directory
    pub fn base_path(&self, relative: &str) -> PathBuf {
        self.root.path().join("benchmark").join(relative)
    }

    /// Path of a written dependency file
    pub fn dep_path(&self, name: &str) -> PathBuf {
        self.base_path("buildinfo/deps").join(name)
    }

    /// Write a source file under benchmark/src
    pub fn write_source(&self, name: &str, content: &str) {
        std::fs::write(self.base_path("src").join(name), content).expect("write source file");
    }

    /// Write benchmark/gendeps.toml
    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.base_path("gendeps.toml"), toml).expect("write config file");
    }

    /// Run gendeps in this project
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run gendeps with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_gendeps"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env_remove("GENDEPS_TOOL");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute gendeps");
        output_to_result(output)
    }

    /// Install a fake dependency tool into the project root
    #[cfg(unix)]
    pub fn install_fake_tool(&self) -> FakeTool {
        FakeTool::install(self.root.path())
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Shell-script stand-in for the compiler.
///
/// Answers `--version` with exit 0, appends each scan's argv to a log,
/// writes a deterministic fragment to the `-o` target, and exits 3 for
/// any input whose name contains `bad`.
#[cfg(unix)]
pub struct FakeTool {
    script: PathBuf,
    log: PathBuf,
}

#[cfg(unix)]
impl FakeTool {
    fn install(dir: &std::path::Path) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("fake-cc");
        let log = dir.join("fake-cc.log");

        let body = format!(
            r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "fake-cc 1.0"
    exit 0
fi
printf '%s\n' "$*" >> "{log}"
prev=""
input=""
out=""
want_out=0
for arg in "$@"; do
    if [ "$want_out" = "1" ]; then out="$arg"; want_out=0; fi
    if [ "$arg" = "-o" ]; then want_out=1; fi
    if [ "$arg" = "-MM" ]; then input="$prev"; fi
    prev="$arg"
done
case "$input" in
    *bad*) exit 3 ;;
esac
base=$(basename "$input")
printf '%s.o: %s\n' "${{base%.*}}" "$input" > "$out"
"#,
            log = log.display()
        );

        std::fs::write(&script, body).expect("write fake tool");
        let mut perms = std::fs::metadata(&script)
            .expect("stat fake tool")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).expect("chmod fake tool");

        Self { script, log }
    }

    /// Absolute tool path, as passed to --tool or GENDEPS_TOOL
    pub fn path(&self) -> String {
        self.script.display().to_string()
    }

    /// One line per scan invocation, argv joined by spaces
    pub fn invocations(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}
