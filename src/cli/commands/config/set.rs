use std::sync::Arc;

use super::fields::{apply, parse_value, to_object};
use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_json_value,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::ClockConfigStore,
};

/// Command for changing one field and saving the configuration.
pub struct SetCommand {
    store: Arc<ClockConfigStore>,
}

impl SetCommand {
    /// Creates a new SetCommand writing to `store`.
    pub fn new(store: Arc<ClockConfigStore>) -> Self {
        Self { store }
    }
}

impl Command for SetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let field = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <field> argument for 'set' command".to_string())
        })?;
        let raw = args.get(1).ok_or_else(|| {
            CliError::InvalidArguments("Expected <value> argument for 'set' command".to_string())
        })?;

        let current = self.store.load();
        let updated = apply(&current, field, parse_value(field, raw)?)?;
        self.store.save(&updated)?;

        let stored = to_object(&updated)?
            .get(field)
            .map(format_json_value)
            .unwrap_or_default();
        Ok(format!("Set '{field}' to {stored}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Set a clock configuration field and save".to_string(),
            category: "config".to_string(),
            args: vec![
                CommandArg {
                    name: "field".to_string(),
                    description: "Field name".to_string(),
                    required: true,
                    value_type: ArgType::Field,
                },
                CommandArg {
                    name: "value".to_string(),
                    description: "New value; colours accept palette names or hex".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "standby-clock config set use24HourFormat true".to_string(),
                "standby-clock config set layout stacked".to_string(),
                "standby-clock config set accentColor orange".to_string(),
                "standby-clock config set gradientColors '#000000,indigo'".to_string(),
            ],
        }
    }
}
