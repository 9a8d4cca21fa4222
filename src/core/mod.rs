use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

use crate::config_store::StoreError;

/// Error types for the application layer.
///
/// Covers settings loading and the failures of the collaborators the
/// binary wires together. Rendering never fails and has no variant here.
#[derive(Error, Debug)]
pub enum StandbyError {
    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Shared storage could not be opened
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Logging could not be initialised
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// A specialized `Result` type for application operations.
pub type Result<T> = result::Result<T, StandbyError>;

impl StandbyError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        StandbyError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }
}
