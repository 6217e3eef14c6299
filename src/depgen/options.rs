//! Generation options

/// Options for one dependency-generation run
#[derive(Debug, Clone, Default)]
pub struct GenOptions {
    /// Restrict the run to recognized C/C++ translation units.
    ///
    /// Off by default: every file in the source directory gets a scan,
    /// whatever its extension.
    pub sources_only: bool,
}

impl GenOptions {
    /// Create new generation options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sources-only filter
    pub fn with_sources_only(mut self, sources_only: bool) -> Self {
        self.sources_only = sources_only;
        self
    }
}
