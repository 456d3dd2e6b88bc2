//! CDN operation error types.

use thiserror::Error;

/// CDN operation error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CdnError {
    #[error("invalid request: {reason}")]
    InvalidArgument { reason: String },

    #[error("CDN API error: {message}")]
    Upstream { message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl CdnError {
    /// Creates an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates a vendor-side error.
    #[must_use]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the error came from the vendor call itself.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. } | Self::Network { .. })
    }
}
