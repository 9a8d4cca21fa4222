use std::path::PathBuf;

/// Errors that can occur while reading or writing shared storage.
///
/// Only writers and explicit diagnostics see these; [`ClockConfigStore::load`]
/// absorbs every one of them.
///
/// [`ClockConfigStore::load`]: super::ClockConfigStore::load
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key cannot be used as a storage entry name.
    #[error("invalid storage key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key
        key: String,
        /// Reason why the key is invalid
        reason: String,
    },

    /// Error occurred while persisting a value
    #[error("failed to persist '{key}' to '{path}': {details}")]
    PersistenceError {
        /// Key being written
        key: String,
        /// Path where persistence failed
        path: PathBuf,
        /// Error details from the persistence operation
        details: String,
    },

    /// Error occurred during file I/O operations
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Error occurred while serializing a record
    #[error("failed to serialize {content_type}: {details}")]
    SerializationError {
        /// Type of content being serialized
        content_type: String,
        /// Serialization error details
        details: String,
    },

    /// Error occurred while acquiring locks for thread-safe access
    #[error("failed to acquire {lock_type} lock: {details}")]
    LockError {
        /// Type of lock that failed (read, write)
        lock_type: String,
        /// Lock error details
        details: String,
    },

    /// The backend has no filesystem location to watch
    #[error("storage backend for '{key}' cannot be watched")]
    NotWatchable {
        /// Key that was to be watched
        key: String,
    },

    /// Failed to initialize file watcher
    #[error("failed to initialize file watcher: {details}")]
    FileWatcherInitError {
        /// File watcher initialization error details
        details: String,
    },

    /// Error occurred while watching a specific path
    #[error("file watcher error for '{path}': {details}")]
    FileWatchError {
        /// Path being watched when error occurred
        path: PathBuf,
        /// File watcher error details
        details: String,
    },
}
