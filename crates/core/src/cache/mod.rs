mod error;
mod keys;
mod policy;
mod serialization;
mod traits;

pub use error::{CacheError, PolicyParseError, Result};
pub use keys::FRUITS_KEY;
pub use policy::{CachePresence, InvalidationPolicy};
pub use serialization::{deserialize_names, serialize_names, SerializationError};
pub use traits::Cache;
