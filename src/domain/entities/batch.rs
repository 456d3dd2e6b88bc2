//! Classified URL batch.

/// A batch of normalized URLs partitioned into file and path purge targets.
///
/// Built per request by the classifier and discarded after submission. The
/// two partitions are disjoint; relative input order is preserved within
/// each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedBatch {
    files: Vec<String>,
    paths: Vec<String>,
}

impl ClassifiedBatch {
    /// Creates a batch from already-normalized partitions.
    #[must_use]
    pub fn new(files: Vec<String>, paths: Vec<String>) -> Self {
        Self { files, paths }
    }

    /// Normalized file-target URLs.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Normalized path-target URLs, each with a single trailing slash.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Total number of URLs across both partitions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.files.len() + self.paths.len()
    }

    /// Returns true when both partitions are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.paths.is_empty()
    }
}
