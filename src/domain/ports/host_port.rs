//! Host-facing plugin capability ports.

use async_trait::async_trait;

/// Lifecycle hooks the messaging host drives.
///
/// The host owns scheduling and config persistence; the plugin only reacts.
/// Hooks must never panic into the host.
#[async_trait]
pub trait PluginLifecycle: Send + Sync {
    /// Called once when the host loads the plugin, with its config table.
    async fn on_load(&self, config: &toml::Table);

    /// Called when the host persists a new config table.
    ///
    /// A rejected table leaves the previously active state untouched.
    async fn on_config_update(&self, config: &toml::Table);

    /// Called when the host tears the plugin down. In-flight background
    /// work may be abandoned.
    async fn on_terminate(&self);
}

/// Command entry point the host routes `/cdn` invocations to.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handles one command line ("command name + arguments") and returns
    /// the ordered response messages to render, usually exactly one.
    async fn handle_command(&self, line: &str) -> Vec<String>;
}
