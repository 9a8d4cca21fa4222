use std::sync::Arc;

use super::fields::{to_object, unknown_field};
use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_json_value,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::ClockConfigStore,
};

/// Command for reading one field of the stored clock configuration.
///
/// # Example Usage
///
/// ```bash
/// standby-clock config get layout
/// standby-clock config get accentColor
/// ```
pub struct GetCommand {
    store: Arc<ClockConfigStore>,
}

impl GetCommand {
    /// Creates a new GetCommand reading from `store`.
    pub fn new(store: Arc<ClockConfigStore>) -> Self {
        Self { store }
    }
}

impl Command for GetCommand {
    /// Loads the configuration and prints `field: value`.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArguments` - If the field argument is missing or unknown
    fn execute(&self, args: &[String]) -> CommandResult {
        let field = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <field> argument for 'get' command".to_string())
        })?;

        let object = to_object(&self.store.load())?;
        let value = object
            .get(field)
            .ok_or_else(|| unknown_field(field, &object))?;

        Ok(format!("{field}: {}", format_json_value(value)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get a clock configuration field".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "field".to_string(),
                description: "Field name (e.g., layout, use24HourFormat)".to_string(),
                required: true,
                value_type: ArgType::Field,
            }],
            examples: vec![
                "standby-clock config get layout".to_string(),
                "standby-clock config get use24HourFormat".to_string(),
            ],
        }
    }
}
