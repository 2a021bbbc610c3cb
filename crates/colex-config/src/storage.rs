//! Correlation dataset storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default key under which the correlation dataset is persisted.
fn default_correlation_key() -> String {
    String::from("semantic-correlation-data")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding persisted datasets. Empty means `~/.colex/data`.
    #[serde(default)]
    pub data_dir: String,

    /// Key (file stem) of the correlation dataset.
    #[serde(default = "default_correlation_key")]
    pub correlation_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            correlation_key: default_correlation_key(),
        }
    }
}

impl StorageConfig {
    /// Resolve the data directory.
    ///
    /// Returns `data_dir` if set, otherwise `~/.colex/data`, otherwise
    /// `.colex/data` relative to the working directory.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::home_dir().map_or_else(
            || PathBuf::from(".colex").join("data"),
            |h| h.join(".colex").join("data"),
        )
    }

    /// Check that the correlation key is usable as a file stem.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the key is empty or contains
    /// a path separator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = &self.correlation_key;
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(ConfigError::InvalidValue {
                field: "storage.correlation_key".into(),
                reason: format!("'{key}' is not a valid file stem"),
            });
        }
        Ok(())
    }
}
