use std::sync::Arc;

use super::{local_instant, parse_count};
use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_description, format_subheader},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::AppConfig,
    config_store::ClockConfigStore,
    widget::ClockTimelineProvider,
};

/// Lists the entries of the batch the widget would be given now.
pub struct TimelineCommand {
    store: Arc<ClockConfigStore>,
    settings: Arc<AppConfig>,
}

impl TimelineCommand {
    /// Creates a new TimelineCommand.
    pub fn new(store: Arc<ClockConfigStore>, settings: Arc<AppConfig>) -> Self {
        Self { store, settings }
    }
}

impl Command for TimelineCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let entry_count = match args.first() {
            Some(raw) => parse_count(raw, "count")?,
            None => self.settings.widget.timeline_entries,
        };
        let start = local_instant(None)?;

        let provider = ClockTimelineProvider::new((*self.store).clone(), entry_count);
        let timeline = provider.timeline_at(start);

        let mut lines = vec![format_subheader(&format!(
            "{} entries, refresh {:?}",
            timeline.entries.len(),
            timeline.policy
        ))];

        for entry in &timeline.entries {
            let frame = entry.frame();
            let seconds = frame.seconds.map(|s| format!(":{s}")).unwrap_or_default();
            lines.push(format!(
                "{}  {}{}  {}",
                format_description(&entry.date.format("%H:%M:%S").to_string()),
                frame.time,
                seconds,
                frame.date
            ));
        }

        if let Some(next) = timeline.next_batch_start() {
            lines.push(format_description(&format!(
                "next batch at {}",
                next.format("%H:%M:%S")
            )));
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "timeline".to_string(),
            description: "List the widget's next timeline batch".to_string(),
            category: "clock".to_string(),
            args: vec![CommandArg {
                name: "count".to_string(),
                description: "Entries in the batch; [widget] timeline_entries when omitted"
                    .to_string(),
                required: false,
                value_type: ArgType::Number,
            }],
            examples: vec![
                "standby-clock clock timeline".to_string(),
                "standby-clock clock timeline 5".to_string(),
            ],
        }
    }
}
