use std::path::PathBuf;

use crate::storage::{ConfigError, StorageLocator};

/// Startup configuration; immutable once the server is running.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub build_path: String,
}

/// Where assets come from, decided once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServeMode {
    Local { root: PathBuf },
    Remote { locator: StorageLocator },
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Anything containing `://` must be a valid locator; everything else is
    /// a local directory that has to exist.
    pub fn serve_mode(&self) -> Result<ServeMode, ConfigError> {
        if self.build_path.contains("://") {
            let locator = StorageLocator::parse(&self.build_path)
                .ok_or_else(|| ConfigError::InvalidLocator(self.build_path.clone()))?;
            return Ok(ServeMode::Remote { locator });
        }

        let root = PathBuf::from(&self.build_path);
        if !root.is_dir() {
            return Err(ConfigError::MissingDirectory(root));
        }
        Ok(ServeMode::Local { root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(build_path: &str) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            build_path: build_path.to_string(),
        }
    }

    #[test]
    fn test_remote_mode() {
        let mode = config("gs://builds/web").serve_mode().unwrap();
        match mode {
            ServeMode::Remote { locator } => {
                assert_eq!(locator.bucket, "builds");
                assert_eq!(locator.prefix, "web");
            }
            ServeMode::Local { .. } => panic!("Expected remote mode"),
        }
    }

    #[test]
    fn test_malformed_locator_is_fatal() {
        let err = config("gs://").serve_mode().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLocator(_)));
    }

    #[test]
    fn test_local_mode() {
        let dir = TempDir::new().unwrap();
        let mode = config(dir.path().to_str().unwrap()).serve_mode().unwrap();
        assert_eq!(
            mode,
            ServeMode::Local {
                root: dir.path().to_path_buf()
            }
        );
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = config(missing.to_str().unwrap()).serve_mode().unwrap_err();
        assert!(matches!(err, ConfigError::MissingDirectory(p) if p == missing));
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(config("./").bind_address(), "127.0.0.1:8080");
    }
}
