//! Command-line interface.
//!
//! Commands are grouped by category, `config` for the stored record and
//! `clock` for rendering it, and help text is generated from each command's
//! metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use commands::{clock, config};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
