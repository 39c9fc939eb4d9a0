use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use super::error::StorageError;
use super::metadata::{ObjectKey, ObjectMetadata};

/// Stored bytes of a single object, yielded incrementally.
pub type ObjectStream = BoxStream<'static, Result<Bytes, StorageError>>;

/// The three operations the proxy needs from an object store.
#[async_trait]
pub trait ObjectBackend: Send + Sync {
    async fn exists(&self, key: &ObjectKey) -> Result<bool, StorageError>;

    async fn metadata(&self, key: &ObjectKey) -> Result<ObjectMetadata, StorageError>;

    /// Open the object exactly as stored. Implementations must not decode a
    /// `Content-Encoding` on the way through.
    ///
    /// With `expected_etag` set, an object replaced since its metadata was
    /// read fails with [`StorageError::Changed`] instead of being streamed.
    async fn open_stream(
        &self,
        key: &ObjectKey,
        expected_etag: Option<&str>,
    ) -> Result<ObjectStream, StorageError>;
}
