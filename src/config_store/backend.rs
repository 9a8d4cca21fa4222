use std::{
    collections::HashMap,
    fmt,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use super::StoreError;

/// A flat key-value namespace shared between processes.
///
/// Implementations must make `write` atomic for readers: a concurrent `read`
/// sees either the previous value or the new one, never a mix.
pub trait KeyValueBackend: Send + Sync + fmt::Debug {
    /// Returns the value stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    /// Returns `StoreError` if the value exists but cannot be read.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    /// Returns `StoreError` if the value cannot be written; the previous
    /// value is left intact.
    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    /// Returns `StoreError` if the entry exists but cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Filesystem path backing `key`, for backends that have one.
    fn location(&self, _key: &str) -> Option<PathBuf> {
        None
    }
}

/// In-process backend. Clones share the same namespace.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<RwLock<HashMap<String, Arc<[u8]>>>>,
}

impl MemoryBackend {
    /// Creates an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.read().map_err(|e| StoreError::LockError {
            lock_type: "read".to_string(),
            details: e.to_string(),
        })?;

        Ok(entries.get(key).map(|value| value.to_vec()))
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|e| StoreError::LockError {
            lock_type: "write".to_string(),
            details: e.to_string(),
        })?;

        entries.insert(key.to_string(), Arc::from(value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|e| StoreError::LockError {
            lock_type: "write".to_string(),
            details: e.to_string(),
        })?;

        entries.remove(key);
        Ok(())
    }
}
