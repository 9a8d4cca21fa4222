//! Pure derivation of render values from a configuration and an instant.
//!
//! Nothing here performs I/O or can fail. The host app's preview and the
//! widget-rendering process call the same functions, so equal inputs give
//! equal frames in both. Wall-clock fields are taken from the instant's own
//! offset; callers pass `Local::now()` for local time.

mod appearance;
mod layout;
mod progress;
mod text;
mod typography;

#[cfg(test)]
mod tests;

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::clock::{ClockConfiguration, Rgba};

pub use appearance::{Background, ResolvedColors, resolve_background, resolve_colors};
pub use layout::{
    Arrangement, LayoutComposition, ProgressBarPlacement, StandardComposition, TimerComposition,
    select_layout_composition,
};
pub use progress::{DayQuarter, SECONDS_PER_DAY, day_progress, resolve_progress_gradient};
pub use text::{format_date, format_seconds, format_time, timezone_label};
pub use typography::{
    FontDescriptor, FontDesign, FontSizes, ResolvedFonts, context_font_sizes, resolve_font_size,
    resolve_fonts,
};

/// Surface a frame is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderContext {
    /// The widget-rendering process.
    #[default]
    Widget,
    /// The host app's live preview card, drawn smaller.
    Preview,
}

impl RenderContext {
    /// Blur radius for [`BackgroundStyle::Blur`](crate::clock::BackgroundStyle::Blur).
    pub fn blur_radius(self) -> f32 {
        match self {
            Self::Widget => 10.0,
            Self::Preview => 5.0,
        }
    }
}

/// Everything needed to draw the clock for one instant.
///
/// Recomputed on every tick and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// `HH:mm` or `h:mm`.
    pub time: String,
    /// Two-digit seconds, present when `show_seconds` is on.
    pub seconds: Option<String>,
    /// Date line, empty when suppressed.
    pub date: String,
    /// Timezone label, present when `show_timezone` is on.
    pub timezone: Option<String>,
    /// Fonts for the three text lines.
    pub fonts: ResolvedFonts,
    /// Text and effect colours.
    pub colors: ResolvedColors,
    /// Background paint.
    pub background: Background,
    /// Elapsed fraction of the day, in `[0, 1)`.
    pub day_progress: f64,
    /// Standalone progress bar fill stops.
    pub progress_gradient: Vec<Rgba>,
    /// Structural arrangement.
    pub composition: LayoutComposition,
}

impl RenderFrame {
    /// Derives the frame for `config` at `instant`.
    pub fn render<Tz>(
        config: &ClockConfiguration,
        instant: &DateTime<Tz>,
        context: RenderContext,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let progress = day_progress(instant);

        Self {
            time: format_time(config, instant),
            seconds: config.show_seconds.then(|| format_seconds(instant)),
            date: format_date(config, instant),
            timezone: timezone_label(config, instant),
            fonts: resolve_fonts(config, context),
            colors: resolve_colors(config),
            background: resolve_background(config, context),
            day_progress: progress,
            progress_gradient: resolve_progress_gradient(config, progress),
            composition: select_layout_composition(config),
        }
    }

    /// Whether a date line is drawn for this frame.
    pub fn shows_date(&self) -> bool {
        if self.date.is_empty() {
            return false;
        }
        match &self.composition {
            LayoutComposition::AppleTimer(_) => true,
            LayoutComposition::Standard(standard) => standard.shows_date,
        }
    }

    /// Whether the timezone label is drawn for this frame.
    pub fn shows_timezone(&self) -> bool {
        match &self.composition {
            LayoutComposition::AppleTimer(_) => false,
            LayoutComposition::Standard(standard) => {
                standard.shows_timezone && self.timezone.is_some()
            }
        }
    }
}
