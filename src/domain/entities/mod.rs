//! Domain entity definitions.

mod batch;
mod credentials;
mod receipt;
mod zone;

pub use batch::ClassifiedBatch;
pub use credentials::Credentials;
pub use receipt::Receipt;
pub use zone::ZoneId;
