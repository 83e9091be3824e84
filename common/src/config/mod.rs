mod content_provider;
mod error;
mod serializer;
mod store;
mod validate;

pub use content_provider::{ContentProvider, FileContentProvider, MemoryContentProvider};
pub use error::ConfigError;
pub use serializer::{ConfigSerializer, YamlSerializer};
pub use store::YamlStore;
pub use validate::Validate;
