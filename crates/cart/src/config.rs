//! Storage configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `KALSPIRE_DATA_DIR` - Directory for durable-slot files (default: `.kalspire`)

use std::path::PathBuf;

use thiserror::Error;

const DATA_DIR_ENV: &str = "KALSPIRE_DATA_DIR";
const DEFAULT_DATA_DIR: &str = ".kalspire";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Durable-slot storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory the slot files are written to.
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Load the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `KALSPIRE_DATA_DIR` is set but
    /// empty or not valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    DATA_DIR_ENV.to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(std::env::VarError::NotPresent) => PathBuf::from(DEFAULT_DATA_DIR),
            Err(e) => {
                return Err(ConfigError::InvalidEnvVar(
                    DATA_DIR_ENV.to_owned(),
                    e.to_string(),
                ));
            }
        };

        Ok(Self { data_dir })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}
