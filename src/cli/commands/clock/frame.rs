use std::sync::Arc;

use super::{BAR_WIDTH, local_instant};
use crate::{
    cli::{
        Command, CommandResult,
        formatting::render_frame,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::ClockConfigStore,
    render::{RenderContext, RenderFrame},
};

/// Renders a single widget frame for the stored configuration.
pub struct FrameCommand {
    store: Arc<ClockConfigStore>,
}

impl FrameCommand {
    /// Creates a new FrameCommand reading from `store`.
    pub fn new(store: Arc<ClockConfigStore>) -> Self {
        Self { store }
    }
}

impl Command for FrameCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let instant = local_instant(args.first())?;
        let frame = RenderFrame::render(&self.store.load(), &instant, RenderContext::Widget);

        Ok(render_frame(&frame, BAR_WIDTH))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "frame".to_string(),
            description: "Render one widget frame".to_string(),
            category: "clock".to_string(),
            args: vec![CommandArg {
                name: "time".to_string(),
                description: "Local time of day as HH:MM[:SS]; now when omitted".to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "standby-clock clock frame".to_string(),
                "standby-clock clock frame 23:59:30".to_string(),
            ],
        }
    }
}
