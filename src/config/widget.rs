use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings of the widget-rendering process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WidgetConfig {
    /// Number of entries pre-rendered per timeline batch. Capped at
    /// [`MAX_TIMELINE_ENTRIES`](crate::widget::MAX_TIMELINE_ENTRIES).
    pub timeline_entries: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            timeline_entries: 20,
        }
    }
}
