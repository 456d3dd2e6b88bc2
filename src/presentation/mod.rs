//! Presentation layer with the command surface and plugin wiring.

/// Command parsing and response rendering.
pub mod commands;
/// Plugin lifecycle wiring.
pub mod plugin;

pub use commands::CommandDispatcher;
pub use plugin::CdnPlugin;
