use std::{sync::Arc, time::Duration};

use futures::StreamExt;
use tracing::info;

use super::{BAR_WIDTH, parse_count, runtime};
use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::{CLEAR_SCREEN, format_description, render_frame},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::ClockConfigStore,
    preview::PreviewSession,
};

/// Shows the stored configuration ticking, as the app's preview card does.
pub struct PreviewCommand {
    store: Arc<ClockConfigStore>,
}

impl PreviewCommand {
    /// Creates a new PreviewCommand reading from `store`.
    pub fn new(store: Arc<ClockConfigStore>) -> Self {
        Self { store }
    }
}

impl Command for PreviewCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let limit = args
            .first()
            .map(|raw| parse_count(raw, "seconds"))
            .transpose()?
            .map(Duration::from_secs);

        let store = (*self.store).clone();
        let runtime = runtime()?;

        runtime.block_on(async move {
            let session = PreviewSession::open(store);
            let ticker = session.spawn_ticker();
            let mut frames = Box::pin(session.frames());
            info!("Preview started");

            let show = async {
                while let Some(frame) = frames.next().await {
                    println!(
                        "{CLEAR_SCREEN}{}{}",
                        render_frame(&frame, BAR_WIDTH),
                        format_description("Press Ctrl+C to stop")
                    );
                }
            };

            let outcome = match limit {
                Some(limit) => tokio::select! {
                    _ = show => Ok(()),
                    _ = tokio::time::sleep(limit) => Ok(()),
                    signal = tokio::signal::ctrl_c() => signal,
                },
                None => tokio::select! {
                    _ = show => Ok(()),
                    signal = tokio::signal::ctrl_c() => signal,
                },
            };

            ticker.abort();
            outcome.map_err(CliError::IoError)
        })?;

        Ok("Preview ended".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "preview".to_string(),
            description: "Live preview of the stored configuration".to_string(),
            category: "clock".to_string(),
            args: vec![CommandArg {
                name: "seconds".to_string(),
                description: "Stop after this many seconds; runs until Ctrl+C when omitted"
                    .to_string(),
                required: false,
                value_type: ArgType::Number,
            }],
            examples: vec![
                "standby-clock clock preview".to_string(),
                "standby-clock clock preview 10".to_string(),
            ],
        }
    }
}
