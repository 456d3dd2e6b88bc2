//! SimpleCDN - a Tencent Cloud CDN cache management plugin for chat bots.
//!
//! This crate exposes a `/cdn` command that purges or preheats CDN cache
//! entries, wrapped in a host-driven plugin lifecycle with atomic config
//! reload and a throttled background preheat queue.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the gateway facade and background work.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the command surface and plugin wiring.
pub mod presentation;

/// Current version of the plugin.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plugin name.
pub const NAME: &str = "simplecdn";
