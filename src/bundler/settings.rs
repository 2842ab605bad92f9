//! Bundle request settings.

use std::path::PathBuf;

/// Inputs for one bundling run.
///
/// A request names one or more target archives, the source paths to pack
/// into each of them, and an optional prefix prepended to every entry name.
/// The suffix of each target decides its format; each target is produced
/// independently and sequentially, in the order given, from the same source
/// list.
#[derive(Debug, Clone, Default)]
pub struct BundleRequest {
    targets: Vec<PathBuf>,
    sources: Vec<PathBuf>,
    prefix: String,
}

impl BundleRequest {
    /// Create a request for the given targets and sources, with no prefix.
    pub fn new(
        targets: impl IntoIterator<Item = impl Into<PathBuf>>,
        sources: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> Self {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            sources: sources.into_iter().map(Into::into).collect(),
            prefix: String::new(),
        }
    }

    /// Set the entry-name prefix.
    ///
    /// The prefix is prepended to every source path by plain string
    /// concatenation, so relocating content under a directory inside the
    /// archive requires a trailing separator (e.g. `"lumen-1.2/"`).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Target archive paths, in production order.
    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    /// Source paths, in the order their entries appear in the archives.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Entry-name prefix (empty by default).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
