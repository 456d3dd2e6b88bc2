//! Plugin configuration error types.

use thiserror::Error;

/// Configuration validation error variants.
///
/// These are recoverable: the plugin stays uninitialized and keeps
/// answering commands with an initialization error until a valid reload.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required keys are missing or empty.
    #[error("missing required config keys: {}", keys.join(", "))]
    MissingKeys {
        /// Names of the missing keys.
        keys: Vec<String>,
    },

    /// The configured zone id does not carry the `zone-` prefix.
    #[error("zone_id must start with 'zone-': {value}")]
    InvalidZoneId {
        /// The rejected value.
        value: String,
    },

    /// The vendor HTTP client could not be constructed.
    #[error("failed to build CDN client: {message}")]
    ClientBuild {
        /// Underlying build error.
        message: String,
    },
}

impl ConfigError {
    /// Creates a missing-keys error.
    #[must_use]
    pub fn missing_keys(keys: Vec<String>) -> Self {
        Self::MissingKeys { keys }
    }

    /// Creates an invalid-zone-id error.
    #[must_use]
    pub fn invalid_zone_id(value: impl Into<String>) -> Self {
        Self::InvalidZoneId {
            value: value.into(),
        }
    }

    /// Creates a client-build error.
    #[must_use]
    pub fn client_build(message: impl Into<String>) -> Self {
        Self::ClientBuild {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_are_named() {
        let error = ConfigError::missing_keys(vec![
            "secret_id".to_string(),
            "secret_key".to_string(),
        ]);

        assert_eq!(
            error.to_string(),
            "missing required config keys: secret_id, secret_key"
        );
    }
}
