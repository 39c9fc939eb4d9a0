use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Object changed while being read: {0}")]
    Changed(String),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(#[source] object_store::Error),
}

impl StorageError {
    /// Classify an `object_store` failure for `key`.
    ///
    /// Only an explicit not-found is treated as absence; network, auth and
    /// quota failures all surface as `Unavailable`.
    pub fn from_store(key: &str, err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotFound { .. } => Self::NotFound(key.to_string()),
            object_store::Error::Precondition { .. } => Self::Changed(key.to_string()),
            other => Self::Unavailable(other),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid storage locator '{0}': expected <scheme>://<bucket>[/<prefix>]")]
    InvalidLocator(String),

    #[error("Unsupported storage scheme '{0}': must be 's3', 'gs' or 'memory'")]
    UnsupportedScheme(String),

    #[error("Build path {} is not an existing directory", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Failed to initialise storage backend: {0}")]
    Backend(#[from] object_store::Error),
}
