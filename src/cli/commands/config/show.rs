use std::sync::Arc;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config_store::ClockConfigStore,
};

/// Prints the whole stored configuration as JSON.
pub struct ShowCommand {
    store: Arc<ClockConfigStore>,
}

impl ShowCommand {
    /// Creates a new ShowCommand reading from `store`.
    pub fn new(store: Arc<ClockConfigStore>) -> Self {
        Self { store }
    }
}

impl Command for ShowCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let stored = self.store.try_load()?;
        let origin = match (stored.is_some(), self.store.location()) {
            (true, Some(path)) => format!("// {}", path.display()),
            (true, None) => format!("// key {}", self.store.key()),
            (false, _) => "// nothing stored, showing defaults".to_string(),
        };

        let config = stored.unwrap_or_default();
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| CliError::ServiceError(e.to_string()))?;

        Ok(format!("{origin}\n{json}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show the stored clock configuration".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["standby-clock config show".to_string()],
        }
    }
}
