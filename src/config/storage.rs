use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Location of the key-value namespace shared by the host app and the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StorageConfig {
    /// App-group identifier naming the shared namespace.
    pub app_group: String,

    /// Key the clock record is stored under.
    pub config_key: String,

    /// Explicit container directory. When unset the container lives under
    /// the XDG data directory, keyed by `app_group`.
    pub root: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            app_group: "group.com.standby.clock".to_string(),
            config_key: "premiumClockConfig".to_string(),
            root: None,
        }
    }
}
