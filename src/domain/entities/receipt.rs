//! Vendor call receipt.

/// Result of a purge or preheat submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Number of URLs submitted in the call(s).
    pub count: usize,
    /// Opaque vendor correlation token, for user-facing diagnostics only.
    pub request_id: String,
}

impl Receipt {
    /// Creates a new receipt.
    #[must_use]
    pub fn new(count: usize, request_id: impl Into<String>) -> Self {
        Self {
            count,
            request_id: request_id.into(),
        }
    }
}
