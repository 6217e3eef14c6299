//! Source directory enumeration
//!
//! One flat listing per run: regular files directly under the source
//! directory, nothing recursive, nothing cached between runs. Every file is
//! an entry by default; callers that only want C/C++ translation units
//! apply [`retain_c_family`].

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GendepsError, GendepsResult};

/// One file discovered in the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Full path, source directory included
    pub path: PathBuf,
    /// Bare file name, used to derive the output name
    pub file_name: OsString,
}

impl SourceEntry {
    /// Lossy display form of the file name for reports
    pub fn display_name(&self) -> String {
        self.file_name.to_string_lossy().into_owned()
    }
}

/// List the files in `dir`, sorted by file name for deterministic output.
///
/// Subdirectories are skipped: an entry is always a regular file. A missing
/// or non-directory `dir` is the one listing failure that aborts a run.
pub fn scan_source_dir(dir: &Path) -> GendepsResult<Vec<SourceEntry>> {
    if !dir.is_dir() {
        return Err(GendepsError::SourceDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        entries.push(SourceEntry {
            file_name: entry.file_name(),
            path,
        });
    }

    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(entries)
}

/// Keep only recognized C/C++ translation units.
pub fn retain_c_family(entries: Vec<SourceEntry>) -> Vec<SourceEntry> {
    entries
        .into_iter()
        .filter(|entry| {
            let name = entry.file_name.to_string_lossy();
            is_c_source_file(&name) || is_cpp_source_file(&name)
        })
        .collect()
}

/// `.c` translation unit
pub fn is_c_source_file(file: &str) -> bool {
    file.ends_with(".c")
}

/// `.cpp`/`.cxx`/`.cc` translation unit
pub fn is_cpp_source_file(file: &str) -> bool {
    file.ends_with(".cpp") || file.ends_with(".cxx") || file.ends_with(".cc")
}

/// C or C++ header
pub fn is_header_file(file: &str) -> bool {
    if file.ends_with(".h") {
        return true;
    }
    file.ends_with(".hpp") || file.ends_with(".hxx") || file.ends_with(".hh")
}
