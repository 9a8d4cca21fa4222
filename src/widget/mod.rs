//! Widget-rendering side of the clock.
//!
//! The widget process never keeps a clock running. It asks for a bounded
//! batch of future entries, displays each when due, and asks again when the
//! batch runs out. [`ClockTimelineProvider`] builds the batches from shared
//! storage; [`TimelineScheduler`] plays the host's part.

mod scheduler;
mod timeline;

#[cfg(test)]
mod tests;

pub use scheduler::TimelineScheduler;
pub use timeline::{
    ClockEntry, ClockTimelineProvider, MAX_TIMELINE_ENTRIES, RefreshPolicy, Timeline,
};
