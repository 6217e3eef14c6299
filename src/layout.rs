//! Project layout resolution
//!
//! The original dependency-generation workflow ran from inside the project
//! directory and derived every path from the mutated process working
//! directory. `ProjectLayout` replaces that ambient state: callers hand it
//! an explicit base directory once and every source/include/deps path
//! resolves against it.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;

/// Suffix appended to an input file name to form its dependency file name.
///
/// Appended, not substituted: `foo.c` becomes `foo.c.d`.
pub const DEP_FILE_SUFFIX: &str = ".d";

/// Resolved directories for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    base: PathBuf,
    source_dir: PathBuf,
    include_dir: PathBuf,
    deps_dir: PathBuf,
}

impl ProjectLayout {
    /// Resolve a layout from an explicit base directory.
    ///
    /// The configured subpaths are joined onto `base`; nothing is checked
    /// against the filesystem here.
    pub fn new(base: impl Into<PathBuf>, config: &LayoutConfig) -> Self {
        let base = base.into();
        let source_dir = base.join(&config.source);
        let include_dir = base.join(&config.include);
        let deps_dir = base.join(&config.deps);
        Self {
            base,
            source_dir,
            include_dir,
            deps_dir,
        }
    }

    /// The base directory all other paths resolve against
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directory whose entries are scanned
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Include search path handed to the scan tool
    pub fn include_dir(&self) -> &Path {
        &self.include_dir
    }

    /// Directory receiving the generated `.d` files
    pub fn deps_dir(&self) -> &Path {
        &self.deps_dir
    }

    /// Output path for one source entry: `<deps-dir>/<file-name>.d`.
    pub fn dep_file_path(&self, file_name: &OsStr) -> PathBuf {
        self.deps_dir.join(dep_file_name(file_name))
    }
}

/// Derive the dependency file name for a source file name.
///
/// The suffix is appended to the whole name, so the original extension
/// survives: `queue.cpp` maps to `queue.cpp.d`, and extensionless names
/// still gain the suffix (`Makefile` maps to `Makefile.d`).
pub fn dep_file_name(file_name: &OsStr) -> OsString {
    let mut name = file_name.to_os_string();
    name.push(DEP_FILE_SUFFIX);
    name
}
