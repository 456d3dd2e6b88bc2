//! Plugin settings parsed from the host config table.

use toml::Value;

use crate::domain::entities::{Credentials, ZoneId};
use crate::domain::errors::ConfigError;

/// Default vendor API region.
pub const DEFAULT_REGION: &str = "ap-singapore";

const ENV_SECRET_ID: &str = "TENCENTCLOUD_SECRET_ID";
const ENV_SECRET_KEY: &str = "TENCENTCLOUD_SECRET_KEY";

/// Validated plugin settings.
///
/// Built from the host's config table at load or config-update time; a
/// gateway is constructed from one `CdnSettings` value and never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct CdnSettings {
    /// Vendor API credentials.
    pub credentials: Credentials,
    /// Vendor API region.
    pub region: String,
    /// Optional zone id for the zone-scoped API variant.
    pub zone_id: Option<ZoneId>,
}

impl CdnSettings {
    /// Parses and validates settings from a host config table.
    ///
    /// # Errors
    /// Returns `MissingKeys` naming every absent or empty required key, or
    /// `InvalidZoneId` when a configured zone id lacks the `zone-` prefix.
    pub fn from_table(table: &toml::Table) -> Result<Self, ConfigError> {
        let secret_id = str_key(table, "secret_id");
        let secret_key = str_key(table, "secret_key");

        let missing: Vec<String> = [("secret_id", &secret_id), ("secret_key", &secret_key)]
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| (*key).to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::missing_keys(missing));
        }

        let zone_id = match str_key(table, "zone_id") {
            Some(raw) => Some(
                ZoneId::new(raw.as_str())
                    .ok_or_else(|| ConfigError::invalid_zone_id(raw.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            // Presence checked above.
            credentials: Credentials::new(
                secret_id.unwrap_or_default(),
                secret_key.unwrap_or_default(),
            ),
            region: str_key(table, "region").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            zone_id,
        })
    }
}

/// Fills in credentials from the standard vendor environment variables
/// when the table does not already carry them.
pub fn merge_env_overrides(table: &mut toml::Table) {
    for (key, env_name) in [("secret_id", ENV_SECRET_ID), ("secret_key", ENV_SECRET_KEY)] {
        if str_key(table, key).is_none() {
            if let Ok(value) = std::env::var(env_name) {
                table.insert(key.to_string(), Value::String(value));
            }
        }
    }
}

fn str_key(table: &toml::Table, key: &str) -> Option<String> {
    table
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}
