use std::sync::Arc;

use super::{CliError, CommandRegistry};
use crate::{config::AppConfig, config_store::ClockConfigStore};

const HELP: &str = "help";

/// High-level service for managing and executing CLI commands.
///
/// Provides a unified interface for command registration, discovery, and execution.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `store` - Shared clock configuration store
    /// * `settings` - Application settings, for commands that honour them
    pub fn new(store: ClockConfigStore, settings: AppConfig) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(store), Arc::new(settings));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// `help`, `help <category>` and a bare `<category>` print generated
    /// help instead.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Other errors come from the command itself.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        if category == HELP {
            let topic = Some(command_name).filter(|topic| !topic.is_empty());
            return self.registry.help_text(topic);
        }

        if command_name.is_empty() {
            return self.registry.help_text(Some(category));
        }

        self.registry.execute(category, command_name, args)
    }

    /// Dispatches raw command-line arguments (program name excluded).
    ///
    /// # Errors
    /// See [`execute_command`](Self::execute_command).
    pub fn run(&self, args: &[String]) -> Result<String, CliError> {
        let category = args.first().map(String::as_str).unwrap_or(HELP);
        let command = args.get(1).map(String::as_str).unwrap_or("");
        let command_args = args.get(2..).unwrap_or(&[]);

        self.execute_command(category, command, command_args)
    }

    /// Lists all available commands organized by category.
    ///
    /// # Returns
    /// Vector of (category_name, command_names) tuples
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }
}
