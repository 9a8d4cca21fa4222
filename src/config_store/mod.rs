//! Shared storage for the clock configuration.
//!
//! The host app and the widget-rendering process are separate processes that
//! share one key-value namespace, the app-group container. The app writes the
//! record with [`ClockConfigStore::save`]; the widget reads it with
//! [`ClockConfigStore::load`], which never fails. A [`StoreWatcher`] lets the
//! widget side react to saves instead of waiting out its timeline.

mod app_group;
mod backend;
mod error;
mod file_watcher;
mod store;


pub use app_group::AppGroupBackend;
pub use backend::{KeyValueBackend, MemoryBackend};
pub use error::StoreError;
pub use file_watcher::{StoreEvent, StoreEventKind, StoreWatcher};
pub use store::{ClockConfigStore, DEFAULT_KEY};
