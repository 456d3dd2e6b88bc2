mod cdn_api_port;
mod host_port;

pub use cdn_api_port::CdnApiPort;
pub use host_port::{CommandHandler, PluginLifecycle};
