use std::{path::PathBuf, sync::Arc};

use tracing::{debug, info, instrument, warn};

use super::{AppGroupBackend, KeyValueBackend, MemoryBackend, StoreError};
use crate::{
    clock::{ClockConfiguration, CodecError},
    config::{ConfigPaths, StorageConfig},
};

/// Key the clock record is stored under unless configured otherwise.
pub const DEFAULT_KEY: &str = "premiumClockConfig";

/// Reads and writes the [`ClockConfiguration`] in shared storage.
///
/// Handles are cheap to clone. Two handles over the same backend, in the same
/// process or not, see each other's saves.
#[derive(Debug, Clone)]
pub struct ClockConfigStore {
    backend: Arc<dyn KeyValueBackend>,
    key: String,
}

impl ClockConfigStore {
    /// Creates a store over `backend` using [`DEFAULT_KEY`].
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self::with_key(backend, DEFAULT_KEY)
    }

    /// Creates a store over `backend` using a custom key.
    pub fn with_key(backend: Arc<dyn KeyValueBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Creates a store over a fresh in-process namespace.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Opens the app-group container named by the settings.
    ///
    /// # Errors
    /// Returns `StoreError::IoError` if no container root is configured and
    /// the XDG data directory cannot be determined.
    pub fn from_settings(settings: &StorageConfig) -> Result<Self, StoreError> {
        let root = match &settings.root {
            Some(root) => root.clone(),
            None => ConfigPaths::app_group_dir(&settings.app_group).map_err(|e| {
                StoreError::IoError {
                    path: PathBuf::from(&settings.app_group),
                    details: e.to_string(),
                }
            })?,
        };

        debug!(root = %root.display(), key = %settings.config_key, "Opening shared storage");

        Ok(Self::with_key(
            Arc::new(AppGroupBackend::new(root)),
            settings.config_key.clone(),
        ))
    }

    /// Key the record is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Filesystem path of the record, when the backend has one.
    pub fn location(&self) -> Option<PathBuf> {
        self.backend.location(&self.key)
    }

    /// Persists `config`, replacing any previous record.
    ///
    /// The replacement is atomic: a concurrent [`load`](Self::load) returns
    /// the old record or the new one.
    ///
    /// # Errors
    /// Returns `StoreError::SerializationError` if encoding fails, or the
    /// backend's error if the write fails. The stored record is unchanged on
    /// error.
    #[instrument(skip(self, config), fields(key = %self.key))]
    pub fn save(&self, config: &ClockConfiguration) -> Result<(), StoreError> {
        let bytes = config.encode().map_err(serialization_error)?;

        self.backend.write(&self.key, &bytes)?;

        info!("Clock configuration saved");
        Ok(())
    }

    /// Returns the stored record, or the default when nothing usable is stored.
    ///
    /// Never fails: a missing entry, an unreadable entry and an undecodable
    /// entry all yield [`ClockConfiguration::default`].
    pub fn load(&self) -> ClockConfiguration {
        match self.try_load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!(key = %self.key, "No stored clock configuration, using defaults");
                ClockConfiguration::default()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Cannot read clock configuration, using defaults");
                ClockConfiguration::default()
            }
        }
    }

    /// Reads the stored record without falling back.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    /// Returns `StoreError` if the entry cannot be read, or
    /// `StoreError::SerializationError` if it does not decode.
    pub fn try_load(&self) -> Result<Option<ClockConfiguration>, StoreError> {
        let Some(bytes) = self.backend.read(&self.key)? else {
            return Ok(None);
        };

        ClockConfiguration::decode(&bytes)
            .map(Some)
            .map_err(serialization_error)
    }

    /// Removes the stored record so the next load yields the default.
    ///
    /// # Errors
    /// Returns the backend's error if the entry cannot be removed.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn reset(&self) -> Result<(), StoreError> {
        self.backend.remove(&self.key)?;
        info!("Clock configuration reset");
        Ok(())
    }
}

fn serialization_error(error: CodecError) -> StoreError {
    StoreError::SerializationError {
        content_type: "clock configuration".to_string(),
        details: error.to_string(),
    }
}
