//! CDN zone identifier value object.

use std::fmt;

/// Zone identifier for zone-scoped CDN API variants.
///
/// Tencent Cloud zone ids always carry a `zone-` prefix; anything else is a
/// configuration mistake and is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneId {
    value: String,
}

impl ZoneId {
    const PREFIX: &'static str = "zone-";

    /// Creates a zone id, validating the `zone-` prefix.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if !value.starts_with(Self::PREFIX) || value.len() == Self::PREFIX.len() {
            return None;
        }

        Some(Self { value })
    }

    /// Returns the zone id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
