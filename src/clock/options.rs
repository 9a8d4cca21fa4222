use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pattern used to render the date line.
///
/// Earlier builds persisted the raw pattern string instead of the tag, so
/// both spellings are accepted when decoding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum DateDisplayFormat {
    /// `Jan 1, 2024`
    #[default]
    #[serde(alias = "MMM d, yyyy")]
    MonthDayYear,
    /// `1 Jan 2024`
    #[serde(alias = "d MMM yyyy")]
    DayMonthYear,
    /// `1/1/24`
    #[serde(alias = "M/d/yy")]
    ShortDate,
    /// `Monday`
    #[serde(alias = "EEEE")]
    DayOfWeek,
    /// `Mon`
    #[serde(alias = "EEE")]
    DayOfWeekShort,
    /// No date line at all, whatever `show_date` says.
    #[serde(alias = "")]
    None,
}

impl DateDisplayFormat {
    /// Every variant, in editor order.
    pub const ALL: [Self; 6] = [
        Self::MonthDayYear,
        Self::DayMonthYear,
        Self::ShortDate,
        Self::DayOfWeek,
        Self::DayOfWeekShort,
        Self::None,
    ];

    /// Unicode date pattern shown to users and stored by earlier builds.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::MonthDayYear => "MMM d, yyyy",
            Self::DayMonthYear => "d MMM yyyy",
            Self::ShortDate => "M/d/yy",
            Self::DayOfWeek => "EEEE",
            Self::DayOfWeekShort => "EEE",
            Self::None => "",
        }
    }

    /// The same pattern expressed as a `chrono` format string.
    ///
    /// Returns `None` for [`DateDisplayFormat::None`].
    pub fn strftime(self) -> Option<&'static str> {
        match self {
            Self::MonthDayYear => Some("%b %-d, %Y"),
            Self::DayMonthYear => Some("%-d %b %Y"),
            Self::ShortDate => Some("%-m/%-d/%y"),
            Self::DayOfWeek => Some("%A"),
            Self::DayOfWeekShort => Some("%a"),
            Self::None => None,
        }
    }

    /// Sample rendering used as a label in listings.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::MonthDayYear => "Jan 1, 2024",
            Self::DayMonthYear => "1 Jan 2024",
            Self::ShortDate => "1/1/24",
            Self::DayOfWeek => "Monday",
            Self::DayOfWeekShort => "Mon",
            Self::None => "No Date",
        }
    }
}

/// How the widget background is painted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundStyle {
    /// Flat `background_color`.
    #[default]
    Solid,
    /// Diagonal gradient through `gradient_colors`.
    Gradient,
    /// `background_color` with a blur applied.
    Blur,
}

impl BackgroundStyle {
    /// Every variant, in editor order.
    pub const ALL: [Self; 3] = [Self::Solid, Self::Gradient, Self::Blur];

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Solid => "Solid Color",
            Self::Gradient => "Gradient",
            Self::Blur => "Blurred",
        }
    }
}

/// Typeface design for the time digits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum TimeFontStyle {
    /// Platform default design.
    System,
    /// Rounded terminals.
    #[default]
    Rounded,
    /// Fixed-width digits.
    Monospaced,
    /// Serif design.
    Serif,
}

impl TimeFontStyle {
    /// Every variant, in editor order.
    pub const ALL: [Self; 4] = [Self::System, Self::Rounded, Self::Monospaced, Self::Serif];

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Rounded => "Rounded",
            Self::Monospaced => "Monospaced",
            Self::Serif => "Serif",
        }
    }
}

/// Size class of the clock text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum FontSizeOption {
    /// 24 pt time.
    Small,
    /// 32 pt time.
    Medium,
    /// 40 pt time.
    #[default]
    Large,
    /// 48 pt time.
    ExtraLarge,
}

impl FontSizeOption {
    /// Every variant, in editor order.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::ExtraLarge];

    /// Point size of the time digits. Date and seconds sizes derive from it.
    pub fn time_points(self) -> f32 {
        match self {
            Self::Small => 24.0,
            Self::Medium => 32.0,
            Self::Large => 40.0,
            Self::ExtraLarge => 48.0,
        }
    }

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::ExtraLarge => "Extra Large",
        }
    }
}

/// Stroke weight of the time digits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum FontWeightOption {
    /// Light.
    Light,
    /// Regular.
    Regular,
    /// Medium.
    #[default]
    Medium,
    /// Semibold.
    Semibold,
    /// Bold.
    Bold,
}

impl FontWeightOption {
    /// Every variant, in editor order.
    pub const ALL: [Self; 5] = [
        Self::Light,
        Self::Regular,
        Self::Medium,
        Self::Semibold,
        Self::Bold,
    ];

    /// Numeric weight on the usual 100..900 scale.
    pub fn numeric(self) -> u16 {
        match self {
            Self::Light => 300,
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
        }
    }

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::Semibold => "Semibold",
            Self::Bold => "Bold",
        }
    }
}

/// Typeface design for the date line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum DateFontStyle {
    /// Platform default design.
    #[default]
    System,
    /// Rounded terminals.
    Rounded,
    /// Serif design.
    Serif,
}

impl DateFontStyle {
    /// Every variant, in editor order.
    pub const ALL: [Self; 3] = [Self::System, Self::Rounded, Self::Serif];

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Rounded => "Rounded",
            Self::Serif => "Serif",
        }
    }
}

/// Structural arrangement of the clock.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum ClockLayout {
    /// Time above date.
    Stacked,
    /// Time and date on one row.
    SideBySide,
    /// Time only.
    TimeOnly,
    /// Full-width composition with a built-in day progress indicator.
    #[default]
    AppleTimer,
}

impl ClockLayout {
    /// Every variant, in editor order.
    pub const ALL: [Self; 4] = [
        Self::Stacked,
        Self::SideBySide,
        Self::TimeOnly,
        Self::AppleTimer,
    ];

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Stacked => "Stacked",
            Self::SideBySide => "Side by Side",
            Self::TimeOnly => "Time Only",
            Self::AppleTimer => "Apple Timer Style",
        }
    }

    /// One-line description shown in layout listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::Stacked => "Time above date",
            Self::SideBySide => "Time and date side by side",
            Self::TimeOnly => "Just the time",
            Self::AppleTimer => "Full-width Apple Timer style",
        }
    }
}

/// Horizontal alignment of the text block.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum TextAlignmentOption {
    /// Left.
    Leading,
    /// Center.
    #[default]
    Center,
    /// Right.
    Trailing,
}

impl TextAlignmentOption {
    /// Every variant, in editor order.
    pub const ALL: [Self; 3] = [Self::Leading, Self::Center, Self::Trailing];

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Leading => "Left",
            Self::Center => "Center",
            Self::Trailing => "Right",
        }
    }
}

/// Gap between the clock's text rows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum SpacingOption {
    /// 2 pt.
    Tight,
    /// 6 pt.
    #[default]
    Normal,
    /// 12 pt.
    Loose,
}

impl SpacingOption {
    /// Every variant, in editor order.
    pub const ALL: [Self; 3] = [Self::Tight, Self::Normal, Self::Loose];

    /// Gap in points.
    pub fn points(self) -> f32 {
        match self {
            Self::Tight => 2.0,
            Self::Normal => 6.0,
            Self::Loose => 12.0,
        }
    }

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Tight => "Tight",
            Self::Normal => "Normal",
            Self::Loose => "Loose",
        }
    }
}

/// Entrance animation. Cosmetic only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum AnimationStyle {
    /// No animation.
    #[default]
    None,
    /// Fade in.
    Fade,
    /// Slight scale up.
    Scale,
    /// Larger scale bounce.
    Bounce,
}

impl AnimationStyle {
    /// Every variant, in editor order.
    pub const ALL: [Self; 4] = [Self::None, Self::Fade, Self::Scale, Self::Bounce];

    /// Peak scale factor applied to the time text while animating.
    pub fn peak_scale(self) -> f32 {
        match self {
            Self::Scale => 1.02,
            Self::Bounce => 1.05,
            Self::None | Self::Fade => 1.0,
        }
    }

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Fade => "Fade",
            Self::Scale => "Scale",
            Self::Bounce => "Bounce",
        }
    }
}

/// Thickness of the standalone progress bar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum ProgressBarHeight {
    /// 2 pt.
    Thin,
    /// 4 pt.
    #[default]
    Medium,
    /// 6 pt.
    Thick,
}

impl ProgressBarHeight {
    /// Every variant, in editor order.
    pub const ALL: [Self; 3] = [Self::Thin, Self::Medium, Self::Thick];

    /// Bar height in points.
    pub fn points(self) -> f32 {
        match self {
            Self::Thin => 2.0,
            Self::Medium => 4.0,
            Self::Thick => 6.0,
        }
    }

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::Medium => "Medium",
            Self::Thick => "Thick",
        }
    }
}

/// Vertical placement of the standalone progress bar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum ProgressBarPosition {
    /// Above the clock.
    Top,
    /// Between the clock and the bottom edge.
    Middle,
    /// Along the bottom edge.
    #[default]
    Bottom,
}

impl ProgressBarPosition {
    /// Every variant, in editor order.
    pub const ALL: [Self; 3] = [Self::Top, Self::Middle, Self::Bottom];

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Middle => "Middle",
            Self::Bottom => "Bottom",
        }
    }
}

/// Fill colouring of the standalone progress bar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum ProgressBarStyle {
    /// Gradient chosen by which quarter of the day it is.
    #[default]
    DayProgression,
    /// Flat accent colour.
    Solid,
    /// Accent fading to a translucent accent.
    Pulsing,
}

impl ProgressBarStyle {
    /// Every variant, in editor order.
    pub const ALL: [Self; 3] = [Self::DayProgression, Self::Solid, Self::Pulsing];

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::DayProgression => "Day Progression",
            Self::Solid => "Solid Color",
            Self::Pulsing => "Pulsing",
        }
    }
}

macro_rules! display_via_serde_tag {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match serde_json::to_value(self) {
                        Ok(serde_json::Value::String(tag)) => f.write_str(&tag),
                        _ => write!(f, "{self:?}"),
                    }
                }
            }
        )+
    };
}

display_via_serde_tag!(
    DateDisplayFormat,
    BackgroundStyle,
    TimeFontStyle,
    FontSizeOption,
    FontWeightOption,
    DateFontStyle,
    ClockLayout,
    TextAlignmentOption,
    SpacingOption,
    AnimationStyle,
    ProgressBarHeight,
    ProgressBarPosition,
    ProgressBarStyle,
);
