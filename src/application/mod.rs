//! Application layer with the gateway facade and background work.

/// CDN gateway facade.
pub mod gateway;
/// Background preheat drain.
pub mod preheat_queue;

pub use gateway::CdnGateway;
pub use preheat_queue::BackgroundPreheatQueue;
