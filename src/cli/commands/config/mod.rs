//! Commands that read and edit the stored clock configuration.
mod fields;
mod get;
mod options;
mod palette;
mod reset;
mod schema;
mod set;
mod show;

use std::sync::Arc;

pub use get::GetCommand;
pub use options::OptionsCommand;
pub use palette::PaletteCommand;
pub use reset::ResetCommand;
pub use schema::SchemaCommand;
pub use set::SetCommand;
pub use show::ShowCommand;

use crate::{cli::CommandRegistry, config_store::ClockConfigStore};

/// Registers all configuration-related commands under "config".
pub fn register_commands(registry: &mut CommandRegistry, store: &Arc<ClockConfigStore>) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(Arc::clone(store))));
    registry.register_command(CATEGORY_NAME, Box::new(SetCommand::new(Arc::clone(store))));
    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(Arc::clone(store))));
    registry.register_command(CATEGORY_NAME, Box::new(ResetCommand::new(Arc::clone(store))));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
    registry.register_command(CATEGORY_NAME, Box::new(PaletteCommand));
    registry.register_command(CATEGORY_NAME, Box::new(OptionsCommand));
}
