use thiserror::Error;

use crate::config_store::StoreError;

/// Errors that can occur during CLI command execution.
///
/// Each variant carries enough context for the message printed to the user
/// to stand on its own.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when argument validation fails, such as missing or extra
    /// arguments, an unknown field name, or a value the field cannot hold.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Reading or writing the shared clock configuration failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// A general service error occurred.
    ///
    /// Used for failures that don't fit other categories, such as the async
    /// runtime failing to start.
    #[error("Service error: {0}")]
    ServiceError(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either the text to print
/// or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
///
/// Drives help generation and the registry's argument count validation.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "field", "value", "seconds").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A non-negative whole number.
    Number,

    /// A clock configuration field name, in its stored camelCase form.
    Field,
}

impl ArgType {
    /// Short hint shown next to the argument name in help text.
    pub fn hint(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Field => "field",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// The single source of truth for a command's identity, arguments, usage
/// examples and category.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "get", "set", "frame").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "config", "clock").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata; the command validates the values.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failure, including invalid
    /// argument values, storage failures and I/O failures.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
