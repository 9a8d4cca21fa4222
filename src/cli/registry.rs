use std::{collections::HashMap, sync::Arc};

use super::{
    CliError, Command,
    commands::{clock, config},
    formatting::{
        format_category, format_command, format_description, format_header, format_subheader,
    },
    types::CommandMetadata,
};
use crate::{config::AppConfig, config_store::ClockConfigStore};

/// Registry for CLI commands organized by category.
///
/// Commands are grouped by category (e.g., "config", "clock") so dispatch
/// stays a pair of lookups rather than one large match.
///
/// # Example Structure
///
/// ```text
/// registry
/// ├── config
/// │   ├── get
/// │   ├── set
/// │   ├── show
/// │   └── ...
/// └── clock
///     ├── frame
///     ├── timeline
///     ├── preview
///     └── widget
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    store: Arc<ClockConfigStore>,
    settings: Arc<AppConfig>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// Commands are added with `register_command`, or all at once with
    /// `register_all_commands`.
    pub fn new(store: Arc<ClockConfigStore>, settings: Arc<AppConfig>) -> Self {
        Self {
            categories: HashMap::new(),
            store,
            settings,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is its key within the category. A command
    /// registered under an existing name replaces the old one.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or the command
    /// doesn't exist, and `CliError::InvalidArguments` if the argument count
    /// doesn't match the command's metadata. Other errors come from the
    /// command itself.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!(
                "Failed to find command '{command_name}' in '{category}'"
            ))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Help text generated from the registered commands' metadata.
    ///
    /// With a category, lists that category's commands with their arguments
    /// and examples; without one, gives an overview of every category.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if `category` is not registered.
    pub fn help_text(&self, category: Option<&str>) -> Result<String, CliError> {
        let mut lines = vec![
            format_header("standby-clock"),
            format_description("StandBy clock widget configuration and rendering"),
            String::new(),
        ];

        let Some(category) = category else {
            lines.push(format_subheader("Usage: standby-clock <category> <command> [args]"));
            lines.push(String::new());
            for (category, commands) in self.list_commands() {
                lines.push(format!("  {}", format_category(&category)));
                for name in commands {
                    let description = self
                        .metadata(&category, &name)
                        .map(|metadata| metadata.description)
                        .unwrap_or_default();
                    lines.push(format!(
                        "    {} {}",
                        format_command(&format!("{name:<10}")),
                        format_description(&description)
                    ));
                }
            }
            lines.push(String::new());
            lines.push(format_description(
                "Run 'standby-clock help <category>' for arguments and examples.",
            ));
            return Ok(lines.join("\n"));
        };

        let commands = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let mut metadata: Vec<CommandMetadata> =
            commands.values().map(|command| command.metadata()).collect();
        metadata.sort_by(|a, b| a.name.cmp(&b.name));

        lines.push(format_category(category));
        for command in metadata {
            let usage: Vec<String> = command
                .args
                .iter()
                .map(|arg| {
                    if arg.required {
                        format!("<{}>", arg.name)
                    } else {
                        format!("[{}]", arg.name)
                    }
                })
                .collect();

            lines.push(String::new());
            lines.push(format!(
                "  {} {}",
                format_command(&command.name),
                usage.join(" ")
            ));
            lines.push(format!("    {}", command.description));
            for arg in &command.args {
                lines.push(format!(
                    "    {} ({}): {}",
                    arg.name,
                    arg.value_type.hint(),
                    format_description(&arg.description)
                ));
            }
            for example in &command.examples {
                lines.push(format!("    {}", format_description(example)));
            }
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self, category: &str, name: &str) -> Option<CommandMetadata> {
        self.categories
            .get(category)?
            .get(name)
            .map(|command| command.metadata())
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        let store = Arc::clone(&self.store);
        let settings = Arc::clone(&self.settings);

        config::register_commands(self, &store);
        clock::register_commands(self, &store, &settings);
    }
}
