//! Application settings.
//!
//! Settings are read from a TOML file in the XDG config directory. They
//! control logging and where the shared clock record lives; the clock
//! configuration itself is stored separately by
//! [`config_store`](crate::config_store).

mod general;
mod loading;
mod paths;
mod storage;
mod widget;


pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use storage::StorageConfig;
pub use widget::WidgetConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete application settings.
///
/// All sections are optional in the file and fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct AppConfig {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Shared storage location.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Widget-rendering process settings.
    #[serde(default)]
    pub widget: WidgetConfig,
}
