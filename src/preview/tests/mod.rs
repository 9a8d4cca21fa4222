#![allow(clippy::unwrap_used)]

use std::time::Duration;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use futures::StreamExt;
use tokio::time::{Instant, sleep};

use crate::{
    clock::{ClockConfiguration, ClockLayout},
    config_store::ClockConfigStore,
    preview::PreviewSession,
    render::{RenderContext, RenderFrame},
};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 14, 5, 9).unwrap()
}

fn ticking_clock() -> impl Fn() -> DateTime<Utc> + Send + 'static {
    let began = Instant::now();
    move || start() + TimeDelta::from_std(began.elapsed()).unwrap()
}

#[test]
fn open_renders_stored_configuration_for_preview() {
    let store = ClockConfigStore::in_memory();
    let stored = ClockConfiguration {
        use_24_hour_format: true,
        ..ClockConfiguration::default()
    };
    store.save(&stored).unwrap();

    let session = PreviewSession::open_at(store, &start());

    assert_eq!(session.config(), stored);
    assert_eq!(
        session.current_frame(),
        RenderFrame::render(&stored, &start(), RenderContext::Preview)
    );
}

#[test]
fn save_persists_draft_and_revert_restores_stored() {
    let store = ClockConfigStore::in_memory();
    let session = PreviewSession::open_at(store.clone(), &start());

    session.update(|config| config.layout = ClockLayout::Stacked);
    assert_eq!(store.load(), ClockConfiguration::default());

    session.save().unwrap();
    assert_eq!(store.load().layout, ClockLayout::Stacked);

    session.update(|config| config.show_date = false);
    session.revert();
    assert_eq!(session.config(), store.load());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn ticker_renders_once_per_second() {
    let session = PreviewSession::open_at(ClockConfigStore::in_memory(), &start());
    let _ticker = session.spawn_ticker_with(ticking_clock());

    sleep(Duration::from_millis(3500)).await;

    assert_eq!(session.current_frame().seconds.as_deref(), Some("12"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn draft_change_renders_without_waiting_for_tick() {
    let session = PreviewSession::open_at(ClockConfigStore::in_memory(), &start());
    let _ticker = session.spawn_ticker_with(ticking_clock());
    let mut frames = session.subscribe();
    tokio::task::yield_now().await;
    frames.borrow_and_update();

    session.update(|config| config.use_24_hour_format = true);
    frames.changed().await.unwrap();

    assert_eq!(frames.borrow().time, "14:05");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn frame_stream_starts_with_current_frame() {
    let session = PreviewSession::open_at(ClockConfigStore::in_memory(), &start());
    let mut frames = Box::pin(session.frames());

    let first = frames.next().await.unwrap();

    assert_eq!(first, session.current_frame());
    assert_eq!(first.time, "2:05");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn ticker_stops_when_session_dropped() {
    let session = PreviewSession::open_at(ClockConfigStore::in_memory(), &start());
    let ticker = session.spawn_ticker_with(ticking_clock());

    drop(session);

    tokio::time::timeout(Duration::from_secs(5), ticker)
        .await
        .unwrap()
        .unwrap();
}
