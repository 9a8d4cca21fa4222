use crate::clock::{
    ClockConfiguration, ClockLayout, ProgressBarPosition, ProgressBarStyle, TextAlignmentOption,
};

const TIMER_INDICATOR_HEIGHT: f32 = 2.0;
const TIMER_ROW_SPACING: f32 = 6.0;
const TIMER_SECONDS_GAP: f32 = 3.0;

/// Arrangement of the non-timer layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Time block above date and timezone.
    Stacked,
    /// Time block and date on one row.
    SideBySide,
    /// Time block alone.
    TimeOnly,
}

/// Where and how the standalone progress bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBarPlacement {
    /// Vertical slot.
    pub position: ProgressBarPosition,
    /// Thickness in points.
    pub height: f32,
    /// Fill colouring.
    pub style: ProgressBarStyle,
}

/// Composition of the stacked, side-by-side and time-only layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardComposition {
    /// Row/column arrangement.
    pub arrangement: Arrangement,
    /// Horizontal alignment of the block.
    pub alignment: TextAlignmentOption,
    /// Gap between the time block and the date.
    pub item_spacing: f32,
    /// Gap between the time digits and the seconds.
    pub time_block_spacing: f32,
    /// Whether the date line has a slot.
    pub shows_date: bool,
    /// Whether the timezone label has a slot.
    pub shows_timezone: bool,
    /// Standalone progress bar, if toggled on.
    pub progress_bar: Option<ProgressBarPlacement>,
}

/// Fixed full-width timer composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerComposition {
    /// Gap between the time row and the date.
    pub row_spacing: f32,
    /// Gap between the time digits and the seconds.
    pub seconds_gap: f32,
    /// Height of the always-on bottom day indicator.
    pub indicator_height: f32,
}

/// Structural arrangement chosen for a configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutComposition {
    /// Full-width timer with a built-in bottom day indicator.
    AppleTimer(TimerComposition),
    /// Stacked, side-by-side or time-only arrangement.
    Standard(StandardComposition),
}

impl LayoutComposition {
    /// The standalone progress bar, if any. The timer layout never has one.
    pub fn progress_bar(&self) -> Option<ProgressBarPlacement> {
        match self {
            Self::AppleTimer(_) => None,
            Self::Standard(standard) => standard.progress_bar,
        }
    }
}

/// Picks the composition for `config`.
///
/// The timer layout ignores alignment, spacing and the standalone progress
/// bar toggle; the others honour all three.
pub fn select_layout_composition(config: &ClockConfiguration) -> LayoutComposition {
    let arrangement = match config.layout {
        ClockLayout::AppleTimer => {
            return LayoutComposition::AppleTimer(TimerComposition {
                row_spacing: TIMER_ROW_SPACING,
                seconds_gap: TIMER_SECONDS_GAP,
                indicator_height: TIMER_INDICATOR_HEIGHT,
            });
        }
        ClockLayout::Stacked => Arrangement::Stacked,
        ClockLayout::SideBySide => Arrangement::SideBySide,
        ClockLayout::TimeOnly => Arrangement::TimeOnly,
    };

    let spacing = config.spacing.points();
    let item_spacing = match arrangement {
        Arrangement::SideBySide => spacing * 2.0,
        Arrangement::Stacked | Arrangement::TimeOnly => spacing,
    };

    let progress_bar = config.show_progress_bar.then(|| ProgressBarPlacement {
        position: config.progress_bar_position,
        height: config.progress_bar_height.points(),
        style: config.progress_bar_style,
    });

    LayoutComposition::Standard(StandardComposition {
        arrangement,
        alignment: config.alignment,
        item_spacing,
        time_block_spacing: spacing / 2.0,
        shows_date: arrangement != Arrangement::TimeOnly,
        shows_timezone: arrangement == Arrangement::Stacked,
        progress_bar,
    })
}
