//! URL normalization for CDN API submission.

/// Canonicalizes raw URL strings into transport-safe form.
///
/// No host validation is performed; malformed hosts pass through unchanged
/// and correctness stays with the caller.
pub struct UrlNormalizer;

impl UrlNormalizer {
    /// Normalizes a file purge/preheat target.
    ///
    /// Prepends `https://` when no scheme is present, percent-encodes
    /// literal spaces and strips a single trailing slash. Idempotent on
    /// input that is already in normalized file form.
    #[must_use]
    pub fn normalize_file(raw: &str) -> String {
        let mut url = Self::with_scheme(raw);
        if url.ends_with('/') {
            url.pop();
        }
        url
    }

    /// Normalizes a directory/path purge target, preserving exactly one
    /// trailing slash.
    #[must_use]
    pub fn normalize_path(raw: &str) -> String {
        let mut url = Self::with_scheme(raw);
        while url.ends_with('/') {
            url.pop();
        }
        url.push('/');
        url
    }

    fn with_scheme(raw: &str) -> String {
        let trimmed = raw.trim();

        let url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        url.replace(' ', "%20")
    }
}
