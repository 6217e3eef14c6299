//! Configuration module for gendeps
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GENDEPS_*)
//! 3. Base-directory config (`<base>/gendeps.toml`)
//! 4. User config (`<config-dir>/gendeps/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! The built-in defaults reproduce the classic fixed layout: sources in
//! `src/`, headers in `include/`, dependency files in `buildinfo/deps/`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GendepsError, GendepsResult};

/// File name looked up inside the base directory
pub const CONFIG_FILE_NAME: &str = "gendeps.toml";

/// Subpath of the user configuration directory holding the fallback config
pub const USER_CONFIG_SUBPATH: &str = "gendeps/config.toml";

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tool: ToolConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Scan tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolConfig {
    /// Compiler command to invoke; unset means auto-detect
    #[serde(default)]
    pub command: Option<String>,

    /// Arguments inserted after the include flag and before the input path
    #[serde(default)]
    pub extra_args: Vec<String>,
}

/// Layout subpaths, joined onto the base directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_source_subdir")]
    pub source: String,

    #[serde(default = "default_include_subdir")]
    pub include: String,

    #[serde(default = "default_deps_subdir")]
    pub deps: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source: default_source_subdir(),
            include: default_include_subdir(),
            deps: default_deps_subdir(),
        }
    }
}

fn default_source_subdir() -> String {
    "src".to_string()
}

fn default_include_subdir() -> String {
    "include".to_string()
}

fn default_deps_subdir() -> String {
    "buildinfo/deps".to_string()
}

/// Non-fatal finding while loading a config file (e.g. unknown key)
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GendepsResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GendepsResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| GendepsError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate(path)?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .last()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Resolve configuration for a base directory.
    ///
    /// Tries `<base>/gendeps.toml`, then the user config, then defaults.
    /// A present-but-invalid file is an error rather than a silent
    /// fallthrough. Callers layer `with_env_overrides` on top.
    pub fn load_or_default(base: &Path) -> GendepsResult<(Self, Vec<ConfigWarning>)> {
        let base_config = base.join(CONFIG_FILE_NAME);
        if base_config.is_file() {
            return Self::load_with_warnings(&base_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_SUBPATH);
            if user_config.is_file() {
                return Self::load_with_warnings(&user_config);
            }
        }

        Ok((Self::default(), Vec::new()))
    }

    /// Apply GENDEPS_* environment overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_env_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_env_overrides_from(mut self, get_env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(tool) = get_env("GENDEPS_TOOL") {
            if !tool.trim().is_empty() {
                self.tool.command = Some(tool);
            }
        }
        self
    }

    /// Layout subpaths must stay inside the base directory.
    fn validate(&self, file: &Path) -> GendepsResult<()> {
        for (key, value) in [
            ("layout.source", &self.layout.source),
            ("layout.include", &self.layout.include),
            ("layout.deps", &self.layout.deps),
        ] {
            if value.is_empty() {
                return Err(GendepsError::InvalidConfig {
                    file: file.to_path_buf(),
                    message: format!("{key} must not be empty"),
                });
            }
            let path = Path::new(value);
            if path.is_absolute() {
                return Err(GendepsError::InvalidConfig {
                    file: file.to_path_buf(),
                    message: format!("{key} must be relative to the base directory, got '{value}'"),
                });
            }
            if path.components().any(|c| matches!(c, std::path::Component::ParentDir)) {
                return Err(GendepsError::InvalidConfig {
                    file: file.to_path_buf(),
                    message: format!("{key} must not contain '..', got '{value}'"),
                });
            }
        }
        Ok(())
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tool",
        "command",
        "extra_args",
        "layout",
        "source",
        "include",
        "deps",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(
                std::cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + cost,
            );
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
