use std::sync::Arc;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    config_store::ClockConfigStore,
};

/// Removes the stored configuration so every reader falls back to defaults.
pub struct ResetCommand {
    store: Arc<ClockConfigStore>,
}

impl ResetCommand {
    /// Creates a new ResetCommand over `store`.
    pub fn new(store: Arc<ClockConfigStore>) -> Self {
        Self { store }
    }
}

impl Command for ResetCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        self.store.reset()?;
        Ok("Clock configuration reset to defaults".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "reset".to_string(),
            description: "Remove the stored configuration".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["standby-clock config reset".to_string()],
        }
    }
}
