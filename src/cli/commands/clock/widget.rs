use std::{ops::ControlFlow, sync::Arc};

use chrono::Local;
use tracing::{info, warn};

use super::{BAR_WIDTH, runtime};
use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::{CLEAR_SCREEN, format_description, render_frame},
        types::CommandMetadata,
    },
    config::AppConfig,
    config_store::{ClockConfigStore, StoreWatcher},
    widget::{ClockTimelineProvider, TimelineScheduler},
};

/// Runs the widget-rendering side: timeline batches, displayed as they come due.
pub struct WidgetCommand {
    store: Arc<ClockConfigStore>,
    settings: Arc<AppConfig>,
}

impl WidgetCommand {
    /// Creates a new WidgetCommand.
    pub fn new(store: Arc<ClockConfigStore>, settings: Arc<AppConfig>) -> Self {
        Self { store, settings }
    }
}

impl Command for WidgetCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let store = (*self.store).clone();
        let provider = ClockTimelineProvider::from_settings(store.clone(), &self.settings.widget);
        let runtime = runtime()?;

        runtime.block_on(async move {
            let placeholder = provider.placeholder().frame();
            println!("{CLEAR_SCREEN}{}", render_frame(&placeholder, BAR_WIDTH));

            let mut scheduler = TimelineScheduler::new(provider);

            // Dropping the watcher closes the change channel.
            let _watcher = match StoreWatcher::watch(&store) {
                Ok((watcher, changes)) => {
                    scheduler = scheduler.with_changes(changes);
                    Some(watcher)
                }
                Err(e) => {
                    warn!(error = %e, "Cannot watch shared storage, refreshing at batch ends only");
                    None
                }
            };

            info!("Widget started");

            let display = scheduler.run(Local::now(), |entry| {
                println!(
                    "{CLEAR_SCREEN}{}{}",
                    render_frame(&entry.frame(), BAR_WIDTH),
                    format_description("Press Ctrl+C to stop")
                );
                ControlFlow::Continue(())
            });

            tokio::select! {
                () = display => Ok(()),
                signal = tokio::signal::ctrl_c() => signal,
            }
            .map_err(CliError::IoError)
        })?;

        Ok("Widget stopped".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "widget".to_string(),
            description: "Run the widget display until Ctrl+C".to_string(),
            category: "clock".to_string(),
            args: vec![],
            examples: vec!["standby-clock clock widget".to_string()],
        }
    }
}
