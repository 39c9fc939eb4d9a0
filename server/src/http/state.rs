use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ServeMode;
use crate::storage::{ConfigError, MetadataGateway, ObjectBackend, ObjectStoreBackend};

/// State shared by the remote-mode handlers.
pub struct AppState {
    pub gateway: MetadataGateway,
}

/// The request-serving capability for one server instance.
pub enum Responder {
    Local { root: PathBuf },
    Remote { gateway: MetadataGateway },
}

impl Responder {
    /// Build the responder for a resolved mode, connecting the storage
    /// client for remote locators.
    pub fn from_mode(mode: ServeMode) -> Result<Self, ConfigError> {
        match mode {
            ServeMode::Local { root } => Ok(Self::Local { root }),
            ServeMode::Remote { locator } => {
                let backend: Arc<dyn ObjectBackend> =
                    Arc::new(ObjectStoreBackend::from_locator(&locator)?);
                Ok(Self::Remote {
                    gateway: MetadataGateway::new(locator, backend),
                })
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Local { root } => format!("local directory {}", root.display()),
            Self::Remote { gateway } => format!("object store {}", gateway.locator()),
        }
    }
}
