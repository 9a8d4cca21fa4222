use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

const APP_DIR: &str = "standby-clock";

/// Utility struct for locating configuration, data and log directories.
///
/// Follows the XDG Base Directory specification.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory path for the application
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "standby-clock" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        Self::xdg_dir("XDG_CONFIG_HOME", ".config")
    }

    /// Returns the application data directory path
    ///
    /// Uses `XDG_DATA_HOME`, falling back to `$HOME/.local/share`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_DATA_HOME` nor `HOME` environment variables are set
    pub fn data_dir() -> Result<PathBuf, Error> {
        Self::xdg_dir("XDG_DATA_HOME", ".local/share")
    }

    /// Get the application log directory
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns error if the data directory is unknown or cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = Self::data_dir()?.join("logs");

        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }

    /// Returns the path to the settings file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the container directory of an app group
    ///
    /// Every process that names the same group resolves the same directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be determined
    pub fn app_group_dir(app_group: &str) -> Result<PathBuf, Error> {
        Ok(Self::data_dir()?.join("app-groups").join(app_group))
    }

    fn xdg_dir(xdg_var: &str, home_fallback: &str) -> Result<PathBuf, Error> {
        let base = env::var(xdg_var)
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/{home_fallback}")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    format!("Neither {xdg_var} nor HOME environment variable found"),
                )
            })?;

        Ok(PathBuf::from(base).join(APP_DIR))
    }
}
