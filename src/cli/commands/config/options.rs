use crate::cli::{
    CliError, Command, CommandResult,
    formatting::{format_command, format_description, format_subheader},
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::fields::{OPTION_FIELDS, option_values};

/// Lists the accepted values of option fields.
pub struct OptionsCommand;

impl OptionsCommand {
    fn describe(field: &str) -> Option<String> {
        let values = option_values(field)?;
        let mut lines = vec![format_subheader(field)];
        lines.extend(values.into_iter().map(|(tag, label)| {
            format!(
                "  {} {}",
                format_command(&format!("{tag:<16}")),
                format_description(label)
            )
        }));
        Some(lines.join("\n"))
    }
}

impl Command for OptionsCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        match args.first() {
            Some(field) => Self::describe(field).ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "'{field}' has no fixed values. Option fields: {}",
                    OPTION_FIELDS.join(", ")
                ))
            }),
            None => Ok(OPTION_FIELDS
                .iter()
                .filter_map(|field| Self::describe(field))
                .collect::<Vec<_>>()
                .join("\n\n")),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "options".to_string(),
            description: "List accepted values of option fields".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "field".to_string(),
                description: "Option field to list; all when omitted".to_string(),
                required: false,
                value_type: ArgType::Field,
            }],
            examples: vec![
                "standby-clock config options".to_string(),
                "standby-clock config options dateFormat".to_string(),
            ],
        }
    }
}
