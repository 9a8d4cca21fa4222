use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    process,
    time::{SystemTime, UNIX_EPOCH},
};

use tracing::{debug, warn};

use super::{KeyValueBackend, StoreError};

/// Backend storing each key as one file in an app-group container directory.
///
/// Writes go to a sibling temp file which is flushed and renamed over the
/// entry, so readers in other processes never observe a partial value.
#[derive(Debug, Clone)]
pub struct AppGroupBackend {
    root: PathBuf,
}

impl AppGroupBackend {
    /// Opens the container at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Container directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos())
            .unwrap_or_default();

        self.root
            .join(format!(".{key}.{}.{nanos}.tmp", process::id()))
    }

    fn write_temp(temp_path: &Path, value: &[u8]) -> std::io::Result<()> {
        let mut file = File::create(temp_path)?;
        file.write_all(value)?;
        file.sync_all()
    }
}

fn discard_temp(temp_path: &Path) {
    match fs::remove_file(temp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            warn!(path = %temp_path.display(), error = %e, "Failed to remove temp file");
        }
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let reason = if key.is_empty() {
        "key is empty"
    } else if key.starts_with('.') {
        "key starts with '.'"
    } else if key.contains(['/', '\\', '\0']) {
        "key contains a path separator"
    } else {
        return Ok(());
    };

    Err(StoreError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    })
}

impl KeyValueBackend for AppGroupBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.entry_path(key)?;

        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::IoError {
                path,
                details: e.to_string(),
            }),
        }
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;

        fs::create_dir_all(&self.root).map_err(|e| StoreError::IoError {
            path: self.root.clone(),
            details: e.to_string(),
        })?;

        let temp_path = self.temp_path(key);

        if let Err(e) = Self::write_temp(&temp_path, value) {
            discard_temp(&temp_path);
            return Err(StoreError::PersistenceError {
                key: key.to_string(),
                path: temp_path,
                details: e.to_string(),
            });
        }

        if let Err(e) = fs::rename(&temp_path, &path) {
            discard_temp(&temp_path);
            return Err(StoreError::PersistenceError {
                key: key.to_string(),
                path,
                details: e.to_string(),
            });
        }

        debug!(path = %path.display(), bytes = value.len(), "Wrote shared entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::IoError {
                path,
                details: e.to_string(),
            }),
        }
    }

    fn location(&self, key: &str) -> Option<PathBuf> {
        self.entry_path(key).ok()
    }
}
