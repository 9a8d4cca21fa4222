use chrono::{DateTime, TimeZone, Timelike};

use crate::clock::{ClockConfiguration, ProgressBarStyle, Rgba, SystemColors};

/// Seconds in a wall-clock day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Opacity of the translucent end of a pulsing bar.
const PULSE_TAIL_OPACITY: f32 = 0.6;

/// Fraction of the local day elapsed at `instant`, in `[0, 1)`.
pub fn day_progress<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    let elapsed = instant.hour() * 3600 + instant.minute() * 60 + instant.second();
    f64::from(elapsed) / f64::from(SECONDS_PER_DAY)
}

/// Quarter of the day, which picks the day-progression gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayQuarter {
    /// `[0, 0.25)`
    Night,
    /// `[0.25, 0.5)`
    Morning,
    /// `[0.5, 0.75)`
    Afternoon,
    /// `[0.75, 1)`
    Evening,
}

impl DayQuarter {
    /// Classifies a progress fraction. Out-of-range and NaN values are clamped.
    pub fn from_progress(progress: f64) -> Self {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        if progress < 0.25 {
            Self::Night
        } else if progress < 0.5 {
            Self::Morning
        } else if progress < 0.75 {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }

    /// Gradient stops for this quarter, leading edge first.
    pub fn gradient(self) -> Vec<Rgba> {
        match self {
            Self::Night => vec![SystemColors::PURPLE, SystemColors::BLUE],
            Self::Morning => vec![SystemColors::BLUE, SystemColors::CYAN, SystemColors::YELLOW],
            Self::Afternoon => vec![SystemColors::YELLOW, SystemColors::ORANGE],
            Self::Evening => vec![SystemColors::ORANGE, SystemColors::RED, SystemColors::PURPLE],
        }
    }
}

/// Colour stops of the standalone progress bar fill.
///
/// Never empty: solid bars get a single stop.
pub fn resolve_progress_gradient(config: &ClockConfiguration, progress: f64) -> Vec<Rgba> {
    match config.progress_bar_style {
        ProgressBarStyle::DayProgression => DayQuarter::from_progress(progress).gradient(),
        ProgressBarStyle::Solid => vec![config.accent_color],
        ProgressBarStyle::Pulsing => vec![
            config.accent_color,
            config.accent_color.with_opacity(PULSE_TAIL_OPACITY),
        ],
    }
}
