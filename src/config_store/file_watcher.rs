use std::{
    fs,
    path::{Path, PathBuf},
};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};
use tokio::sync::mpsc;
use tracing::debug;

use super::{ClockConfigStore, StoreError};

/// A change to the stored clock record made by any process.
#[derive(Debug, Clone)]
pub struct StoreEvent {
    /// Path of the record that changed
    pub path: PathBuf,
    /// The type of change that occurred
    pub kind: StoreEventKind,
}

/// The type of change that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEventKind {
    /// Record was replaced
    Modified,
    /// Record was written for the first time
    Created,
    /// Record was removed
    Removed,
}

/// Watches the shared storage entry of a [`ClockConfigStore`].
///
/// Saves replace the entry by renaming a temp file over it, which removes the
/// watched inode, so the watcher follows the container directory and filters
/// events down to the entry's file name. Events arrive on an unbounded tokio
/// channel; they are infrequent but bursty, and one save may produce several.
pub struct StoreWatcher {
    _watcher: RecommendedWatcher,
    path: PathBuf,
}

impl StoreWatcher {
    /// Starts watching `store`'s entry.
    ///
    /// The container directory is created if it does not exist yet.
    ///
    /// # Errors
    /// Returns `StoreError::NotWatchable` for backends without a filesystem
    /// location, `StoreError::FileWatcherInitError` if the platform watcher
    /// cannot start, and `StoreError::FileWatchError` if the directory cannot
    /// be watched.
    pub fn watch(
        store: &ClockConfigStore,
    ) -> Result<(Self, mpsc::UnboundedReceiver<StoreEvent>), StoreError> {
        let path = store.location().ok_or_else(|| StoreError::NotWatchable {
            key: store.key().to_string(),
        })?;
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| StoreError::FileWatchError {
                path: path.clone(),
                details: "entry has no parent directory".to_string(),
            })?;
        let file_name = path.file_name().map(|name| name.to_os_string()).ok_or_else(|| {
            StoreError::FileWatchError {
                path: path.clone(),
                details: "entry has no file name".to_string(),
            }
        })?;

        fs::create_dir_all(&dir).map_err(|e| StoreError::FileWatchError {
            path: dir.clone(),
            details: e.to_string(),
        })?;

        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut watcher = recommended_watcher(move |res: notify::Result<Event>| {
            let Ok(event) = res else {
                return;
            };

            let kind = match event.kind {
                EventKind::Create(_) => StoreEventKind::Created,
                EventKind::Modify(_) => StoreEventKind::Modified,
                EventKind::Remove(_) => StoreEventKind::Removed,
                _ => return,
            };

            for path in event.paths {
                if path.file_name() != Some(file_name.as_os_str()) {
                    continue;
                }
                let _ = event_tx.send(StoreEvent { path, kind });
            }
        })
        .map_err(|e| StoreError::FileWatcherInitError {
            details: e.to_string(),
        })?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| StoreError::FileWatchError {
                path: dir.clone(),
                details: e.to_string(),
            })?;

        debug!(path = %path.display(), "Watching shared storage");

        Ok((
            Self {
                _watcher: watcher,
                path,
            },
            event_rx,
        ))
    }

    /// Path of the watched entry.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
