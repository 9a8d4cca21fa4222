use std::ops::ControlFlow;

use chrono::{DateTime, TimeDelta, TimeZone};
use tokio::{
    sync::mpsc,
    time::{Instant, sleep_until},
};
use tracing::{debug, info};

use super::{ClockEntry, ClockTimelineProvider};
use crate::config_store::StoreEvent;

/// Drives a [`ClockTimelineProvider`] the way the widget host does.
///
/// Each entry is handed to the display callback when its date comes due.
/// After the last entry's slot the next batch is requested, and a change to
/// the stored record cuts the current batch short.
///
/// Waiting happens on tokio's clock, measured from the moment each batch
/// starts, so entry dates only need to be correct relative to each other.
#[derive(Debug)]
pub struct TimelineScheduler {
    provider: ClockTimelineProvider,
    changes: Option<mpsc::UnboundedReceiver<StoreEvent>>,
}

impl TimelineScheduler {
    /// Creates a scheduler that only refreshes at batch boundaries.
    pub fn new(provider: ClockTimelineProvider) -> Self {
        Self {
            provider,
            changes: None,
        }
    }

    /// Also refreshes whenever `changes` reports a store change.
    pub fn with_changes(mut self, changes: mpsc::UnboundedReceiver<StoreEvent>) -> Self {
        self.changes = Some(changes);
        self
    }

    /// Runs until `display` returns [`ControlFlow::Break`].
    ///
    /// `start` dates the first batch; later batches are dated from it.
    pub async fn run<Tz, F>(&mut self, start: DateTime<Tz>, mut display: F)
    where
        Tz: TimeZone,
        F: FnMut(&ClockEntry<Tz>) -> ControlFlow<()>,
    {
        let mut batch_start = start;

        loop {
            // The batch below reads the record afresh.
            self.drain_changes();
            let timeline = self.provider.timeline_at(batch_start.clone());
            let Some(batch_end) = timeline.next_batch_start() else {
                return;
            };
            let anchor = Instant::now();

            let slots = timeline.entries.iter().map(Some).chain([None]);
            let mut next_start = batch_end.clone();

            for slot in slots {
                let due = slot.map_or_else(|| batch_end.clone(), |entry| entry.date.clone());
                let offset = (due - batch_start.clone()).to_std().unwrap_or_default();

                tokio::select! {
                    biased;
                    Some(event) = next_change(&mut self.changes) => {
                        debug!(path = %event.path.display(), kind = ?event.kind, "Stored configuration changed");
                        let elapsed = TimeDelta::from_std(anchor.elapsed()).unwrap_or_default();
                        next_start = batch_start
                            .clone()
                            .checked_add_signed(elapsed)
                            .unwrap_or_else(|| batch_end.clone());
                        break;
                    }
                    () = sleep_until(anchor + offset) => {}
                }

                let Some(entry) = slot else {
                    continue;
                };
                if display(entry).is_break() {
                    info!("Widget display stopped");
                    return;
                }
            }

            batch_start = next_start;
        }
    }

    fn drain_changes(&mut self) {
        if let Some(changes) = self.changes.as_mut() {
            while changes.try_recv().is_ok() {}
        }
    }
}

async fn next_change(
    changes: &mut Option<mpsc::UnboundedReceiver<StoreEvent>>,
) -> Option<StoreEvent> {
    match changes {
        Some(changes) => changes.recv().await,
        None => std::future::pending().await,
    }
}
