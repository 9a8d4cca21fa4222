use std::{fs, path::Path};

use tracing::{info, instrument};

use super::{AppConfig, ConfigPaths};
use crate::{Result, StandbyError};

impl AppConfig {
    /// Loads settings from the default settings file.
    ///
    /// # Errors
    /// Returns an error if the config directory is unknown or the file is invalid.
    pub fn load_default() -> Result<Self> {
        let path = ConfigPaths::main_config()?;
        Self::load(&path)
    }

    /// Loads settings from `path`.
    ///
    /// A missing file yields the defaults; it is not created.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| StandbyError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::from_toml(&content, Some(path))
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    /// Returns `StandbyError::TomlParseError` if the text is not valid settings.
    pub fn from_toml(content: &str, path: Option<&Path>) -> Result<Self> {
        toml::from_str(content).map_err(|e| StandbyError::toml_parse(e, path))
    }
}
