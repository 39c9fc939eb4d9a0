mod backend;
mod error;
mod gateway;
mod locator;
mod metadata;
mod traits;


pub use backend::ObjectStoreBackend;
pub use error::{ConfigError, StorageError};
pub use gateway::MetadataGateway;
pub use locator::StorageLocator;
pub use metadata::{ObjectKey, ObjectMetadata, ResolvedObject};
pub use traits::{ObjectBackend, ObjectStream};
