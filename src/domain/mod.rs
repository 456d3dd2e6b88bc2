//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Pure domain services.
pub mod services;

pub use entities::{ClassifiedBatch, Credentials, Receipt, ZoneId};
pub use errors::{CdnError, ConfigError};
pub use ports::{CdnApiPort, CommandHandler, PluginLifecycle};
pub use services::{RequestClassifier, UrlNormalizer};
