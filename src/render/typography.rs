use crate::clock::{
    ClockConfiguration, ClockLayout, DateFontStyle, FontSizeOption, FontWeightOption,
    TimeFontStyle,
};

use super::RenderContext;

const DATE_RATIO: f32 = 0.4;
const SECONDS_RATIO: f32 = 0.5;

const PREVIEW_SCALE: f32 = 0.7;
const PREVIEW_MIN_TIME: f32 = 16.0;
const PREVIEW_MIN_SECONDARY: f32 = 10.0;

const TIMER_TIME_SIZE: f32 = 32.0;
const TIMER_SECONDS_SIZE: f32 = 12.0;
const TIMER_DATE_SIZE: f32 = 8.0;

/// Typeface design family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontDesign {
    /// Platform default.
    Default,
    /// Rounded terminals.
    Rounded,
    /// Fixed width.
    Monospaced,
    /// Serif.
    Serif,
}

impl From<TimeFontStyle> for FontDesign {
    fn from(style: TimeFontStyle) -> Self {
        match style {
            TimeFontStyle::System => Self::Default,
            TimeFontStyle::Rounded => Self::Rounded,
            TimeFontStyle::Monospaced => Self::Monospaced,
            TimeFontStyle::Serif => Self::Serif,
        }
    }
}

impl From<DateFontStyle> for FontDesign {
    fn from(style: DateFontStyle) -> Self {
        match style {
            DateFontStyle::System => Self::Default,
            DateFontStyle::Rounded => Self::Rounded,
            DateFontStyle::Serif => Self::Serif,
        }
    }
}

/// A concrete font request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontDescriptor {
    /// Design family.
    pub design: FontDesign,
    /// Size in points.
    pub size: f32,
    /// Stroke weight.
    pub weight: FontWeightOption,
    /// Whether digits should be tabular so the text does not jitter per tick.
    pub monospaced_digits: bool,
}

/// Point sizes of the three text lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    /// Time digits.
    pub time: f32,
    /// Date line.
    pub date: f32,
    /// Seconds line.
    pub seconds: f32,
}

/// Fonts for every text line of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedFonts {
    /// Time digits.
    pub time: FontDescriptor,
    /// Date line.
    pub date: FontDescriptor,
    /// Seconds line.
    pub seconds: FontDescriptor,
}

/// Canonical size table: 24/32/40/48 pt time, date at 0.4x and seconds at 0.5x.
pub fn resolve_font_size(option: FontSizeOption) -> FontSizes {
    let time = option.time_points();
    FontSizes {
        time,
        date: time * DATE_RATIO,
        seconds: time * SECONDS_RATIO,
    }
}

/// Sizes after the render context's transform is applied.
pub fn context_font_sizes(option: FontSizeOption, context: RenderContext) -> FontSizes {
    let sizes = resolve_font_size(option);
    match context {
        RenderContext::Widget => sizes,
        RenderContext::Preview => FontSizes {
            time: (sizes.time * PREVIEW_SCALE).max(PREVIEW_MIN_TIME),
            date: (sizes.date * PREVIEW_SCALE).max(PREVIEW_MIN_SECONDARY),
            seconds: (sizes.seconds * PREVIEW_SCALE).max(PREVIEW_MIN_SECONDARY),
        },
    }
}

/// Resolves all three fonts of a frame.
///
/// The timer layout uses its own fixed sizes in every context.
pub fn resolve_fonts(config: &ClockConfiguration, context: RenderContext) -> ResolvedFonts {
    if config.layout == ClockLayout::AppleTimer {
        return ResolvedFonts {
            time: FontDescriptor {
                design: FontDesign::Rounded,
                size: TIMER_TIME_SIZE,
                weight: config.time_font_weight,
                monospaced_digits: true,
            },
            date: FontDescriptor {
                design: FontDesign::Default,
                size: TIMER_DATE_SIZE,
                weight: FontWeightOption::Medium,
                monospaced_digits: false,
            },
            seconds: FontDescriptor {
                design: FontDesign::Rounded,
                size: TIMER_SECONDS_SIZE,
                weight: FontWeightOption::Medium,
                monospaced_digits: true,
            },
        };
    }

    let sizes = context_font_sizes(config.time_font_size, context);

    ResolvedFonts {
        time: FontDescriptor {
            design: config.time_font.into(),
            size: sizes.time,
            weight: config.time_font_weight,
            monospaced_digits: config.time_font == TimeFontStyle::Monospaced,
        },
        date: FontDescriptor {
            design: config.date_font.into(),
            size: sizes.date,
            weight: FontWeightOption::Medium,
            monospaced_digits: false,
        },
        seconds: FontDescriptor {
            design: FontDesign::Rounded,
            size: sizes.seconds,
            weight: FontWeightOption::Regular,
            monospaced_digits: false,
        },
    }
}
