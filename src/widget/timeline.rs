use std::{fmt::Display, sync::Arc};

use chrono::{DateTime, Local, TimeDelta, TimeZone};
use tracing::{debug, instrument};

use crate::{
    clock::ClockConfiguration,
    config::WidgetConfig,
    config_store::ClockConfigStore,
    render::{RenderContext, RenderFrame},
};

/// One scheduled widget display: a date and the configuration in force.
#[derive(Debug, Clone)]
pub struct ClockEntry<Tz: TimeZone = Local> {
    /// Instant the entry becomes current.
    pub date: DateTime<Tz>,
    /// Configuration loaded when the batch was built. Shared by every entry
    /// of a batch.
    pub config: Arc<ClockConfiguration>,
}

impl<Tz> ClockEntry<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    /// Renders the entry for the widget surface.
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::render(&self.config, &self.date, RenderContext::Widget)
    }
}

/// When the host should ask for the next batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Once the last entry's slot has elapsed.
    #[default]
    AtEnd,
}

/// A bounded, date-ordered batch of entries.
#[derive(Debug, Clone)]
pub struct Timeline<Tz: TimeZone = Local> {
    /// Entries in ascending date order. Never empty.
    pub entries: Vec<ClockEntry<Tz>>,
    /// Refresh policy of the batch.
    pub policy: RefreshPolicy,
}

impl<Tz: TimeZone> Timeline<Tz> {
    /// Start date of the batch that should follow this one.
    ///
    /// Under [`RefreshPolicy::AtEnd`] this is the last entry's date plus one
    /// refresh interval, so consecutive batches tile without gaps or overlap.
    pub fn next_batch_start(&self) -> Option<DateTime<Tz>> {
        let last = self.entries.last()?;
        match self.policy {
            RefreshPolicy::AtEnd => last.date.clone().checked_add_signed(TimeDelta::seconds(
                i64::from(last.config.refresh_interval_secs()),
            )),
        }
    }
}

/// Longest batch a provider produces.
pub const MAX_TIMELINE_ENTRIES: usize = 600;

/// Builds widget timelines from the stored configuration.
///
/// Reads only. Every batch loads the record afresh, so a save in the host app
/// shows up at the next batch boundary.
#[derive(Debug, Clone)]
pub struct ClockTimelineProvider {
    store: ClockConfigStore,
    entry_count: usize,
}

impl ClockTimelineProvider {
    /// Creates a provider producing `entry_count` entries per batch, clamped
    /// to `1..=MAX_TIMELINE_ENTRIES`.
    pub fn new(store: ClockConfigStore, entry_count: usize) -> Self {
        Self {
            store,
            entry_count: entry_count.clamp(1, MAX_TIMELINE_ENTRIES),
        }
    }

    /// Creates a provider with the batch length from the settings.
    pub fn from_settings(store: ClockConfigStore, settings: &WidgetConfig) -> Self {
        Self::new(store, settings.timeline_entries)
    }

    /// Number of entries per batch.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Store the provider reads from.
    pub fn store(&self) -> &ClockConfigStore {
        &self.store
    }

    /// Entry shown while the widget is first laid out. Uses the default
    /// configuration without touching storage.
    pub fn placeholder_at<Tz: TimeZone>(&self, date: DateTime<Tz>) -> ClockEntry<Tz> {
        ClockEntry {
            date,
            config: Arc::new(ClockConfiguration::default()),
        }
    }

    /// Single entry for transient displays such as the widget gallery.
    pub fn snapshot_at<Tz: TimeZone>(&self, date: DateTime<Tz>) -> ClockEntry<Tz> {
        ClockEntry {
            date,
            config: Arc::new(self.store.load()),
        }
    }

    /// Batch starting at `start`, spaced by the loaded configuration's
    /// refresh interval.
    #[instrument(skip_all, fields(entries = self.entry_count))]
    pub fn timeline_at<Tz: TimeZone>(&self, start: DateTime<Tz>) -> Timeline<Tz> {
        let config = Arc::new(self.store.load());
        let interval = TimeDelta::seconds(i64::from(config.refresh_interval_secs()));

        let mut entries = Vec::with_capacity(self.entry_count);
        let mut date = Some(start);
        while let Some(current) = date {
            if entries.len() == self.entry_count {
                break;
            }
            date = current.clone().checked_add_signed(interval);
            entries.push(ClockEntry {
                date: current,
                config: Arc::clone(&config),
            });
        }

        debug!(
            count = entries.len(),
            interval_secs = interval.num_seconds(),
            "Built timeline"
        );

        Timeline {
            entries,
            policy: RefreshPolicy::AtEnd,
        }
    }

    /// [`placeholder_at`](Self::placeholder_at) for the current local time.
    pub fn placeholder(&self) -> ClockEntry {
        self.placeholder_at(Local::now())
    }

    /// [`snapshot_at`](Self::snapshot_at) for the current local time.
    pub fn snapshot(&self) -> ClockEntry {
        self.snapshot_at(Local::now())
    }

    /// [`timeline_at`](Self::timeline_at) starting at the current local time.
    pub fn timeline(&self) -> Timeline {
        self.timeline_at(Local::now())
    }
}
