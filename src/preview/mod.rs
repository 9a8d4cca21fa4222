//! Live preview of an in-progress configuration.
//!
//! The host app edits a draft configuration and shows it ticking once a
//! second before saving. A single ticker task per session renders frames;
//! subscribers only ever see the latest one, so a slow consumer skips frames
//! rather than queueing them.

#[cfg(test)]
mod tests;

use std::{fmt::Display, sync::Arc, time::Duration};

use chrono::{DateTime, Local, TimeZone};
use futures::Stream;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};
use tracing::{debug, instrument};

use crate::{
    clock::ClockConfiguration,
    config_store::{ClockConfigStore, StoreError},
    render::{RenderContext, RenderFrame},
};

const TICK: Duration = Duration::from_secs(1);

/// Editing session for the preview card.
#[derive(Debug)]
pub struct PreviewSession {
    store: ClockConfigStore,
    draft: watch::Sender<ClockConfiguration>,
    frames: Arc<watch::Sender<RenderFrame>>,
}

impl PreviewSession {
    /// Opens a session on the stored configuration and renders a first frame
    /// for the current local time.
    pub fn open(store: ClockConfigStore) -> Self {
        Self::open_at(store, &Local::now())
    }

    /// Opens a session whose first frame is rendered for `instant`.
    pub fn open_at<Tz>(store: ClockConfigStore, instant: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let config = store.load();
        let frame = RenderFrame::render(&config, instant, RenderContext::Preview);
        let (draft, _) = watch::channel(config);
        let (frames, _) = watch::channel(frame);

        Self {
            store,
            draft,
            frames: Arc::new(frames),
        }
    }

    /// Current draft.
    pub fn config(&self) -> ClockConfiguration {
        self.draft.borrow().clone()
    }

    /// Replaces the draft. The ticker re-renders immediately.
    pub fn replace_config(&self, config: ClockConfiguration) {
        self.draft.send_replace(config);
    }

    /// Edits the draft in place. The ticker re-renders immediately.
    pub fn update(&self, edit: impl FnOnce(&mut ClockConfiguration)) {
        self.draft.send_modify(edit);
    }

    /// Discards the draft and reloads the stored configuration.
    pub fn revert(&self) {
        self.draft.send_replace(self.store.load());
    }

    /// Persists the draft.
    ///
    /// # Errors
    /// Returns the store's error if the write fails; the draft is kept.
    #[instrument(skip(self))]
    pub fn save(&self) -> Result<(), StoreError> {
        let config = self.config();
        self.store.save(&config)
    }

    /// Most recently rendered frame.
    pub fn current_frame(&self) -> RenderFrame {
        self.frames.borrow().clone()
    }

    /// Receiver that always holds the latest frame.
    pub fn subscribe(&self) -> watch::Receiver<RenderFrame> {
        self.frames.subscribe()
    }

    /// Stream of frames, starting with the current one. Intermediate frames
    /// are skipped when the consumer falls behind.
    pub fn frames(&self) -> impl Stream<Item = RenderFrame> + use<> {
        let mut receiver = self.subscribe();
        receiver.mark_changed();

        futures::stream::unfold(receiver, |mut receiver| async move {
            receiver.changed().await.ok()?;
            let frame = receiver.borrow_and_update().clone();
            Some((frame, receiver))
        })
    }

    /// Starts the ticker on local time.
    pub fn spawn_ticker(&self) -> JoinHandle<()> {
        self.spawn_ticker_with(Local::now)
    }

    /// Starts the ticker, reading the time from `clock`.
    ///
    /// Renders once a second and whenever the draft changes. The task ends
    /// when the session is dropped.
    pub fn spawn_ticker_with<Tz, C>(&self, clock: C) -> JoinHandle<()>
    where
        Tz: TimeZone + Send + 'static,
        Tz::Offset: Display + Send,
        C: Fn() -> DateTime<Tz> + Send + 'static,
    {
        let mut draft = self.draft.subscribe();
        let frames = Arc::clone(&self.frames);

        tokio::spawn(async move {
            let mut ticker = interval(TICK);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    changed = draft.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }

                let frame = {
                    let config = draft.borrow_and_update();
                    RenderFrame::render(&config, &clock(), RenderContext::Preview)
                };
                frames.send_replace(frame);
            }

            debug!("Preview session closed, ticker stopped");
        })
    }
}
