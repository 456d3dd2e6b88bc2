//! Purge target classification.

use super::url_normalizer::UrlNormalizer;
use crate::domain::entities::ClassifiedBatch;

/// Partitions a raw URL batch into file and path purge targets.
pub struct RequestClassifier;

impl RequestClassifier {
    /// Classifies each raw URL by trailing-slash convention.
    ///
    /// A raw string ending in `/` is a directory target and keeps one
    /// trailing slash after normalization; everything else is a file
    /// target. Relative input order is preserved within each partition.
    /// An empty input yields an empty batch.
    #[must_use]
    pub fn classify<S: AsRef<str>>(raw_urls: &[S]) -> ClassifiedBatch {
        let mut files = Vec::new();
        let mut paths = Vec::new();

        for raw in raw_urls {
            let raw = raw.as_ref();
            if raw.trim().ends_with('/') {
                paths.push(UrlNormalizer::normalize_path(raw));
            } else {
                files.push(UrlNormalizer::normalize_file(raw));
            }
        }

        ClassifiedBatch::new(files, paths)
    }
}
