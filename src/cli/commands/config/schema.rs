use schemars::schema_for;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    clock::ClockConfiguration,
};

/// Prints the JSON schema of the stored record.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let schema = schema_for!(ClockConfiguration);
        serde_json::to_string_pretty(&schema).map_err(|e| CliError::ServiceError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON schema of the clock configuration".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["standby-clock config schema > clock.schema.json".to_string()],
        }
    }
}
