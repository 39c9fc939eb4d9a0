use std::sync::Arc;
use tracing::{debug, instrument};

use super::error::StorageError;
use super::locator::StorageLocator;
use super::metadata::ResolvedObject;
use super::traits::{ObjectBackend, ObjectStream};

/// Resolves request paths to objects under a fixed locator.
pub struct MetadataGateway {
    locator: StorageLocator,
    backend: Arc<dyn ObjectBackend>,
}

impl MetadataGateway {
    pub fn new(locator: StorageLocator, backend: Arc<dyn ObjectBackend>) -> Self {
        Self { locator, backend }
    }

    pub fn locator(&self) -> &StorageLocator {
        &self.locator
    }

    /// Existence check followed by a metadata fetch, both against the live
    /// backend. A failed existence check is `Unavailable`, never `NotFound`.
    #[instrument(skip(self))]
    pub async fn resolve(&self, request_path: &str) -> Result<ResolvedObject, StorageError> {
        let key = self.locator.object_key(request_path);

        if !self.backend.exists(&key).await? {
            debug!(key = %key, "Object does not exist");
            return Err(StorageError::NotFound(key.to_string()));
        }

        let metadata = self.backend.metadata(&key).await?;
        Ok(ResolvedObject { key, metadata })
    }

    /// Open the stream pinned to the `ETag` the response headers are built
    /// from.
    pub async fn open(&self, object: &ResolvedObject) -> Result<ObjectStream, StorageError> {
        self.backend
            .open_stream(&object.key, object.metadata.etag.as_deref())
            .await
    }
}
