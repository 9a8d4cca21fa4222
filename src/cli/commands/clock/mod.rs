//! Commands that render the clock.
mod frame;
mod preview;
mod timeline;
mod widget;

use std::{str::FromStr, sync::Arc};

use chrono::{DateTime, Local, NaiveTime};

pub use frame::FrameCommand;
pub use preview::PreviewCommand;
pub use timeline::TimelineCommand;
pub use widget::WidgetCommand;

use crate::{
    cli::{CliError, CommandRegistry},
    config::AppConfig,
    config_store::ClockConfigStore,
};

/// Width in cells of progress bars drawn in the terminal.
const BAR_WIDTH: usize = 32;

/// Registers all rendering commands under "clock".
pub fn register_commands(
    registry: &mut CommandRegistry,
    store: &Arc<ClockConfigStore>,
    settings: &Arc<AppConfig>,
) {
    const CATEGORY_NAME: &str = "clock";

    registry.register_command(CATEGORY_NAME, Box::new(FrameCommand::new(Arc::clone(store))));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(TimelineCommand::new(Arc::clone(store), Arc::clone(settings))),
    );
    registry.register_command(CATEGORY_NAME, Box::new(PreviewCommand::new(Arc::clone(store))));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(WidgetCommand::new(Arc::clone(store), Arc::clone(settings))),
    );
}

/// Today's local date at `raw` (`HH:MM` or `HH:MM:SS`), or now when absent.
fn local_instant(raw: Option<&String>) -> Result<DateTime<Local>, CliError> {
    let Some(raw) = raw else {
        return Ok(Local::now());
    };

    let time = NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| {
            CliError::InvalidArguments(format!("Expected a time as HH:MM or HH:MM:SS, got '{raw}'"))
        })?;

    Local::now()
        .date_naive()
        .and_time(time)
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| CliError::InvalidArguments(format!("{raw} does not exist today locally")))
}

fn parse_count<T: FromStr>(raw: &str, name: &str) -> Result<T, CliError> {
    raw.parse().map_err(|_| {
        CliError::InvalidArguments(format!("Expected a whole number for <{name}>, got '{raw}'"))
    })
}

fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::ServiceError(format!("Failed to create runtime: {e}")))
}
