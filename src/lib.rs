//! StandBy clock widget core.
//!
//! A clock widget is configured in a host app and drawn by a separate
//! widget-rendering process. The two share one persisted record and one set of
//! pure derivation functions, so a configuration always looks the same in the
//! app's preview and on the widget.
//!
//! - [`clock`]: the persisted [`ClockConfiguration`](clock::ClockConfiguration)
//! - [`render`]: time, date, progress, fonts and layout derived from it
//! - [`config_store`]: atomic save and never-failing load over shared storage
//! - [`widget`] and [`preview`]: the two consumers
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::Local;
//! use standby_clock::{
//!     config_store::ClockConfigStore,
//!     render::{RenderContext, RenderFrame},
//! };
//!
//! let store = ClockConfigStore::in_memory();
//! let config = store.load();
//! let frame = RenderFrame::render(&config, &Local::now(), RenderContext::Widget);
//! println!("{} {}", frame.time, frame.date);
//! ```

/// Persisted clock configuration model.
pub mod clock;

/// Application settings and directory resolution.
pub mod config;

/// Shared storage for the clock configuration.
pub mod config_store;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface.
pub mod cli;

/// Live preview of a draft configuration.
pub mod preview;

/// Pure render derivations.
pub mod render;

/// Logging initialisation.
pub mod tracing_config;

/// Widget timeline provider and scheduler.
pub mod widget;

/// Re-exported core types for convenience.
pub use core::{Result, StandbyError};
