#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::{ops::ControlFlow, path::PathBuf, sync::Arc};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use tokio::{sync::mpsc, time::Instant};

use crate::{
    clock::ClockConfiguration,
    config::WidgetConfig,
    config_store::{ClockConfigStore, StoreEvent, StoreEventKind},
    widget::{ClockTimelineProvider, MAX_TIMELINE_ENTRIES, RefreshPolicy, TimelineScheduler},
};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 14, 5, 9).unwrap()
}

fn without_seconds() -> ClockConfiguration {
    ClockConfiguration {
        show_seconds: false,
        use_24_hour_format: true,
        ..ClockConfiguration::default()
    }
}

#[test]
fn timeline_with_seconds_is_spaced_one_second() {
    let provider = ClockTimelineProvider::from_settings(
        ClockConfigStore::in_memory(),
        &WidgetConfig::default(),
    );

    let timeline = provider.timeline_at(start());

    assert_eq!(timeline.entries.len(), 20);
    assert_eq!(timeline.policy, RefreshPolicy::AtEnd);
    for (index, entry) in timeline.entries.iter().enumerate() {
        assert_eq!(entry.date, start() + TimeDelta::seconds(index as i64));
    }
    assert_eq!(
        timeline.next_batch_start(),
        Some(start() + TimeDelta::seconds(20))
    );
}

#[test]
fn timeline_without_seconds_is_spaced_one_minute() {
    let store = ClockConfigStore::in_memory();
    store.save(&without_seconds()).unwrap();
    let provider = ClockTimelineProvider::new(store, 5);

    let timeline = provider.timeline_at(start());

    let dates: Vec<_> = timeline.entries.iter().map(|entry| entry.date).collect();
    assert_eq!(
        dates,
        (0..5)
            .map(|minute| start() + TimeDelta::minutes(minute))
            .collect::<Vec<_>>()
    );
    assert_eq!(
        timeline.next_batch_start(),
        Some(start() + TimeDelta::minutes(5))
    );
}

#[test]
fn timeline_entries_share_one_loaded_configuration() {
    let store = ClockConfigStore::in_memory();
    store.save(&without_seconds()).unwrap();
    let provider = ClockTimelineProvider::new(store, 3);

    let timeline = provider.timeline_at(start());

    let first = &timeline.entries[0].config;
    assert_eq!(**first, without_seconds());
    assert!(
        timeline
            .entries
            .iter()
            .all(|entry| Arc::ptr_eq(&entry.config, first))
    );
}

#[test]
fn batch_length_is_at_least_one() {
    let provider = ClockTimelineProvider::new(ClockConfigStore::in_memory(), 0);

    assert_eq!(provider.entry_count(), 1);
    assert_eq!(provider.timeline_at(start()).entries.len(), 1);
}

#[test]
fn oversized_batch_length_is_capped() {
    let provider = ClockTimelineProvider::new(ClockConfigStore::in_memory(), usize::MAX);
    assert_eq!(provider.entry_count(), MAX_TIMELINE_ENTRIES);

    let timeline = provider.timeline_at(start());
    assert_eq!(timeline.entries.len(), MAX_TIMELINE_ENTRIES);

    let settings = WidgetConfig {
        timeline_entries: 1_000_000_000,
    };
    let provider = ClockTimelineProvider::from_settings(ClockConfigStore::in_memory(), &settings);
    assert_eq!(provider.entry_count(), MAX_TIMELINE_ENTRIES);
}

#[test]
fn placeholder_ignores_stored_configuration() {
    let store = ClockConfigStore::in_memory();
    store.save(&without_seconds()).unwrap();
    let provider = ClockTimelineProvider::new(store, 20);

    let placeholder = provider.placeholder_at(start());
    let snapshot = provider.snapshot_at(start());

    assert_eq!(*placeholder.config, ClockConfiguration::default());
    assert_eq!(*snapshot.config, without_seconds());
    assert_eq!(snapshot.date, start());
}

#[test]
fn entry_frame_renders_its_own_date() {
    let store = ClockConfigStore::in_memory();
    store.save(&without_seconds()).unwrap();
    let provider = ClockTimelineProvider::new(store, 2);

    let timeline = provider.timeline_at(start());
    let frames: Vec<_> = timeline.entries.iter().map(|entry| entry.frame()).collect();

    assert_eq!(frames[0].time, "14:05");
    assert_eq!(frames[1].time, "14:06");
    assert!(frames.iter().all(|frame| frame.seconds.is_none()));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn scheduler_tiles_consecutive_batches() {
    let provider = ClockTimelineProvider::new(ClockConfigStore::in_memory(), 3);
    let mut scheduler = TimelineScheduler::new(provider);
    let began = Instant::now();
    let mut shown = Vec::new();

    scheduler
        .run(start(), |entry| {
            shown.push((entry.date, began.elapsed()));
            if shown.len() == 7 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await;

    for (index, (date, elapsed)) in shown.iter().enumerate() {
        assert_eq!(*date, start() + TimeDelta::seconds(index as i64));
        assert_eq!(elapsed.as_secs(), index as u64);
    }
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn scheduler_reloads_when_store_changes() {
    let store = ClockConfigStore::in_memory();
    let provider = ClockTimelineProvider::new(store.clone(), 20);
    let (changes_tx, changes_rx) = mpsc::unbounded_channel();
    let mut scheduler = TimelineScheduler::new(provider).with_changes(changes_rx);
    let mut shown: Vec<(DateTime<Utc>, ClockConfiguration)> = Vec::new();

    scheduler
        .run(start(), |entry| {
            shown.push((entry.date, (*entry.config).clone()));
            if shown.len() == 1 {
                store.save(&without_seconds()).unwrap();
                changes_tx
                    .send(StoreEvent {
                        path: PathBuf::from("premiumClockConfig"),
                        kind: StoreEventKind::Modified,
                    })
                    .unwrap();
                return ControlFlow::Continue(());
            }
            ControlFlow::Break(())
        })
        .await;

    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0], (start(), ClockConfiguration::default()));
    assert_eq!(shown[1], (start(), without_seconds()));
}
