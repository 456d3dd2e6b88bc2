//! Infrastructure layer with external service adapters.

/// Configuration handling.
pub mod config;
/// Tencent Cloud CDN API adapter.
pub mod tencent;

pub use config::{
    CdnSettings, CliArgs, DEFAULT_REGION, LogLevel, StorageError, StorageManager,
    merge_env_overrides,
};
pub use tencent::TencentCdnClient;
