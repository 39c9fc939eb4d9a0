use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderValue, header::ACCEPT_ENCODING};
use futures::{StreamExt, TryStreamExt};
use object_store::aws::AmazonS3Builder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::{Attribute, ClientOptions, GetOptions, ObjectStore};
use std::sync::Arc;
use tracing::debug;

use super::error::{ConfigError, StorageError};
use super::locator::StorageLocator;
use super::metadata::{ObjectKey, ObjectMetadata};
use super::traits::{ObjectBackend, ObjectStream};

/// [`ObjectBackend`] over any `object_store` implementation.
pub struct ObjectStoreBackend {
    store: Arc<dyn ObjectStore>,
}

impl ObjectStoreBackend {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Build the store named by the locator scheme. Credentials and region
    /// are taken from the provider's usual environment variables.
    pub fn from_locator(locator: &StorageLocator) -> Result<Self, ConfigError> {
        let store: Arc<dyn ObjectStore> = match locator.scheme.as_str() {
            "s3" => Arc::new(
                AmazonS3Builder::from_env()
                    .with_bucket_name(&locator.bucket)
                    .with_client_options(raw_client_options())
                    .build()?,
            ),
            "gs" => Arc::new(
                GoogleCloudStorageBuilder::from_env()
                    .with_bucket_name(&locator.bucket)
                    .with_client_options(raw_client_options())
                    .build()?,
            ),
            "memory" => Arc::new(InMemory::new()),
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        };
        Ok(Self { store })
    }

    /// Keys are used as stored, without re-encoding. A key that is not a
    /// valid object path (empty or `..` segments) cannot name an object.
    fn object_path(key: &ObjectKey) -> Result<Path, StorageError> {
        Path::parse(key.as_str()).map_err(|e| {
            debug!(key = %key, error = %e, "Request does not map to a valid object path");
            StorageError::NotFound(key.to_string())
        })
    }
}

/// Advertise gzip so stores that transcode on the fly hand back the stored
/// bytes; the client never decodes response bodies itself.
fn raw_client_options() -> ClientOptions {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
    ClientOptions::new().with_default_headers(headers)
}

#[async_trait]
impl ObjectBackend for ObjectStoreBackend {
    async fn exists(&self, key: &ObjectKey) -> Result<bool, StorageError> {
        match self.store.head(&Self::object_path(key)?).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::Unavailable(e)),
        }
    }

    async fn metadata(&self, key: &ObjectKey) -> Result<ObjectMetadata, StorageError> {
        let options = GetOptions {
            head: true,
            ..GetOptions::default()
        };
        let result = self
            .store
            .get_opts(&Self::object_path(key)?, options)
            .await
            .map_err(|e| StorageError::from_store(key.as_str(), e))?;

        let attributes = &result.attributes;
        let metadata = ObjectMetadata {
            etag: result.meta.e_tag.clone(),
            content_type: attributes
                .get(&Attribute::ContentType)
                .map(|v| v.to_string()),
            content_encoding: attributes
                .get(&Attribute::ContentEncoding)
                .map(|v| v.to_string()),
            size: u64::try_from(result.meta.size).ok(),
        };
        debug!(key = %key, ?metadata, "Fetched object metadata");
        Ok(metadata)
    }

    async fn open_stream(
        &self,
        key: &ObjectKey,
        expected_etag: Option<&str>,
    ) -> Result<ObjectStream, StorageError> {
        let options = GetOptions {
            if_match: expected_etag.map(str::to_string),
            ..GetOptions::default()
        };
        let result = self
            .store
            .get_opts(&Self::object_path(key)?, options)
            .await
            .map_err(|e| StorageError::from_store(key.as_str(), e))?;

        let key = key.to_string();
        Ok(result
            .into_stream()
            .map_err(move |e| StorageError::from_store(&key, e))
            .boxed())
    }
}
