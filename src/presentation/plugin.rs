//! Plugin wiring and host lifecycle implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{error, info};

use crate::application::{BackgroundPreheatQueue, CdnGateway};
use crate::domain::errors::ConfigError;
use crate::domain::ports::{CommandHandler, PluginLifecycle};
use crate::infrastructure::config::CdnSettings;
use crate::infrastructure::tencent::TencentCdnClient;

use super::commands::CommandDispatcher;

/// The `/cdn` plugin.
///
/// Holds the single shared gateway slot. Commands snapshot the current
/// `Arc` under a read lock; configuration reloads replace the whole
/// instance under the write lock, so callers never observe a half-updated
/// gateway.
pub struct CdnPlugin {
    gateway: RwLock<Option<Arc<CdnGateway>>>,
    queue: Arc<BackgroundPreheatQueue>,
}

impl CdnPlugin {
    /// Creates an uninitialized plugin with the default preheat throttle.
    #[must_use]
    pub fn new() -> Self {
        Self::with_preheat_delay(BackgroundPreheatQueue::DEFAULT_DELAY)
    }

    /// Creates an uninitialized plugin with a custom preheat throttle.
    #[must_use]
    pub fn with_preheat_delay(delay: Duration) -> Self {
        Self {
            gateway: RwLock::new(None),
            queue: Arc::new(BackgroundPreheatQueue::new(delay)),
        }
    }

    /// Returns whether a gateway is currently active.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.gateway.read().is_some()
    }

    /// Build-or-fail gateway factory; the result replaces the active
    /// instance wholesale.
    fn build_gateway(config: &toml::Table) -> Result<CdnGateway, ConfigError> {
        let settings = CdnSettings::from_table(config)?;
        let client = TencentCdnClient::new(&settings)?;
        Ok(CdnGateway::new(Arc::new(client)))
    }

    #[cfg(test)]
    fn gateway_snapshot(&self) -> Option<Arc<CdnGateway>> {
        self.gateway.read().clone()
    }
}

impl Default for CdnPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginLifecycle for CdnPlugin {
    async fn on_load(&self, config: &toml::Table) {
        match Self::build_gateway(config) {
            Ok(gateway) => {
                *self.gateway.write() = Some(Arc::new(gateway));
                info!("CDN manager initialized");
            }
            Err(e) => {
                error!(error = %e, "CDN manager initialization failed");
                *self.gateway.write() = None;
            }
        }
    }

    async fn on_config_update(&self, config: &toml::Table) {
        match Self::build_gateway(config) {
            Ok(gateway) => {
                *self.gateway.write() = Some(Arc::new(gateway));
                info!("CDN manager replaced with updated configuration");
            }
            Err(e) => {
                // Keep the previous instance; a bad reload must not take
                // a working plugin down.
                error!(error = %e, "Rejected config update, keeping previous CDN manager");
            }
        }
    }

    async fn on_terminate(&self) {
        info!("Releasing CDN manager resources");
        self.queue.shutdown();
        *self.gateway.write() = None;
    }
}

#[async_trait]
impl CommandHandler for CdnPlugin {
    async fn handle_command(&self, line: &str) -> Vec<String> {
        let gateway = self.gateway.read().clone();
        CommandDispatcher::new(gateway, self.queue.clone())
            .dispatch(line)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_table() -> toml::Table {
        toml::from_str(
            r#"
            secret_id = "AKIDEXAMPLE"
            secret_key = "secret"
            zone_id = "zone-abc"
            "#,
        )
        .unwrap()
    }

    fn invalid_table() -> toml::Table {
        toml::from_str(r#"secret_id = "AKIDEXAMPLE""#).unwrap()
    }

    #[tokio::test]
    async fn test_load_with_valid_config() {
        let plugin = CdnPlugin::new();

        plugin.on_load(&valid_table()).await;

        assert!(plugin.is_initialized());
    }

    #[tokio::test]
    async fn test_load_with_invalid_config_stays_uninitialized() {
        let plugin = CdnPlugin::new();

        plugin.on_load(&invalid_table()).await;

        assert!(!plugin.is_initialized());
        let replies = plugin.handle_command("cdn example.com/a.jpg").await;
        assert!(replies[0].contains("not initialized"));
    }

    #[tokio::test]
    async fn test_invalid_reload_keeps_previous_gateway() {
        let plugin = CdnPlugin::new();
        plugin.on_load(&valid_table()).await;
        let before = plugin.gateway_snapshot().unwrap();

        plugin.on_config_update(&invalid_table()).await;

        let after = plugin.gateway_snapshot().unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[tokio::test]
    async fn test_valid_reload_swaps_gateway() {
        let plugin = CdnPlugin::new();
        plugin.on_load(&valid_table()).await;
        let before = plugin.gateway_snapshot().unwrap();

        plugin.on_config_update(&valid_table()).await;

        let after = plugin.gateway_snapshot().unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[tokio::test]
    async fn test_terminate_drops_gateway() {
        let plugin = CdnPlugin::new();
        plugin.on_load(&valid_table()).await;

        plugin.on_terminate().await;

        assert!(!plugin.is_initialized());
    }
}
