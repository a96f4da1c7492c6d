pub mod deduplicator;
pub mod error;
pub(crate) mod scalar_key;
pub mod value;

pub use deduplicator::Deduplicator;
pub use error::Error;
pub(crate) use scalar_key::ScalarKey;
pub use value::Value;
