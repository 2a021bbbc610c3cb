//! Persistence substrate for the correlation dataset.
//!
//! The dataset is a single serialized list of [`StoredComparisonPoint`]s kept
//! under one key. [`JsonFileStore`] keeps it as `{data_dir}/{key}.json` and
//! replaces the file atomically (write to a sibling temp file, then rename).
//! [`MemoryStore`] keeps the serialized document in memory for tests and
//! ephemeral hosts.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use colex_config::StorageConfig;
use colex_core::entities::StoredComparisonPoint;

use crate::error::CorrelationError;

/// Load/save/clear access to the persisted correlation dataset.
///
/// Implementations must not cache: every `load` reflects the latest `save`.
pub trait ComparisonStore {
    /// Read the full dataset. A store that was never written, or was
    /// cleared, yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError`] if the backing data cannot be read or parsed.
    fn load(&self) -> Result<Vec<StoredComparisonPoint>, CorrelationError>;

    /// Replace the full dataset.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError`] if the data cannot be serialized or written.
    fn save(&self, points: &[StoredComparisonPoint]) -> Result<(), CorrelationError>;

    /// Discard the dataset unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError`] if the backing data cannot be removed.
    fn clear(&self) -> Result<(), CorrelationError>;
}

fn decode(raw: &str) -> Result<Vec<StoredComparisonPoint>, CorrelationError> {
    serde_json::from_str(raw).map_err(|err| {
        tracing::warn!(error = %err, "persisted correlation dataset is corrupt");
        CorrelationError::from(err)
    })
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store holding the serialized dataset.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw serialized document, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.document
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ComparisonStore for MemoryStore {
    fn load(&self) -> Result<Vec<StoredComparisonPoint>, CorrelationError> {
        self.raw().map_or_else(|| Ok(Vec::new()), |raw| decode(&raw))
    }

    fn save(&self, points: &[StoredComparisonPoint]) -> Result<(), CorrelationError> {
        let raw = serde_json::to_string(points)?;
        *self.document.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), CorrelationError> {
        *self.document.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// File-backed store: one pretty-printed JSON array per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store for `key` under `data_dir`. The directory is created on first save.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Store described by the storage configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::Config`] if the configured key is invalid.
    pub fn from_config(config: &StorageConfig) -> Result<Self, CorrelationError> {
        config.validate()?;
        Ok(Self::new(
            config.resolved_data_dir(),
            &config.correlation_key,
        ))
    }

    /// Path of the dataset file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ComparisonStore for JsonFileStore {
    fn load(&self) -> Result<Vec<StoredComparisonPoint>, CorrelationError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, points: &[StoredComparisonPoint]) -> Result<(), CorrelationError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(points)?;
        let temp = self.temp_path();
        fs::write(&temp, raw)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), CorrelationError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
