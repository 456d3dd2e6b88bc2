//! Tencent Cloud API credential value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Vendor API credential pair with masking and zeroize-on-drop.
///
/// The secret key is wiped from memory when the value is dropped and is
/// never rendered by `Debug` or `Display`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    secret_id: String,
    secret_key: String,
}

impl Credentials {
    /// Creates a new credential pair.
    #[must_use]
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into().trim().to_string(),
            secret_key: secret_key.into().trim().to_string(),
        }
    }

    /// Returns the credential id.
    #[must_use]
    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    /// Returns the credential secret. Callers must not log this value.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Returns the masked credential id for display.
    #[must_use]
    pub fn masked_id(&self) -> String {
        if self.secret_id.len() <= 8 {
            return "*".repeat(self.secret_id.len());
        }

        let visible_prefix = &self.secret_id[..4];
        let visible_suffix = &self.secret_id[self.secret_id.len() - 4..];
        format!("{visible_prefix}...{visible_suffix}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_id", &self.masked_id())
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked_id())
    }
}
