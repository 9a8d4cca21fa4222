//! Persisted clock-widget configuration.
//!
//! [`ClockConfiguration`] is the single record shared by the host app and the
//! widget-rendering process. It is encoded as JSON with camelCase keys, and
//! every field falls back to its documented default when absent so records
//! written by earlier builds keep decoding.

mod color;
mod options;


pub use color::{ColorParseError, Rgba, SystemColors, WidgetColor};
pub use options::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors raised while converting a [`ClockConfiguration`] to or from bytes.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The bytes were not a valid record, or a present field held an invalid value.
    #[error("failed to decode clock configuration: {0}")]
    Decode(#[source] serde_json::Error),

    /// Serialization failed.
    #[error("failed to encode clock configuration: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Every visual and behavioural option of the clock widget.
///
/// A plain value: editors replace it wholesale, and the widget process only
/// ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockConfiguration {
    /// `HH:mm` when set, `h:mm` otherwise.
    pub use_24_hour_format: bool,

    /// Whether the seconds line is rendered.
    pub show_seconds: bool,

    /// Whether the date line is rendered.
    pub show_date: bool,

    /// Pattern of the date line.
    pub date_format: DateDisplayFormat,

    /// How the background is painted.
    pub background_style: BackgroundStyle,

    /// Solid/blur background colour, and the gradient fallback.
    #[schemars(with = "String")]
    pub background_color: Rgba,

    /// Gradient stops, used only with [`BackgroundStyle::Gradient`].
    #[schemars(with = "Vec<String>")]
    pub gradient_colors: Vec<Rgba>,

    /// Primary text colour.
    #[schemars(with = "String")]
    pub text_color: Rgba,

    /// Seconds, glow and solid progress colour.
    #[schemars(with = "String")]
    pub accent_color: Rgba,

    /// Typeface design of the time digits.
    pub time_font: TimeFontStyle,

    /// Size class of all clock text.
    pub time_font_size: FontSizeOption,

    /// Weight of the time digits.
    pub time_font_weight: FontWeightOption,

    /// Typeface design of the date line.
    pub date_font: DateFontStyle,

    /// Structural arrangement.
    pub layout: ClockLayout,

    /// Horizontal alignment; ignored by [`ClockLayout::AppleTimer`].
    pub alignment: TextAlignmentOption,

    /// Row gap; ignored by [`ClockLayout::AppleTimer`].
    pub spacing: SpacingOption,

    /// Drop shadow under the text.
    pub shadow_enabled: bool,

    /// Accent glow behind the time digits.
    pub glow_enabled: bool,

    /// Entrance animation.
    pub animation_style: AnimationStyle,

    /// IANA identifier shown by the timezone label. Empty means the system zone.
    pub timezone: String,

    /// Whether the timezone label is rendered.
    pub show_timezone: bool,

    /// Whether the standalone progress bar is rendered.
    pub show_progress_bar: bool,

    /// Standalone progress bar thickness.
    pub progress_bar_height: ProgressBarHeight,

    /// Standalone progress bar placement.
    pub progress_bar_position: ProgressBarPosition,

    /// Standalone progress bar colouring.
    pub progress_bar_style: ProgressBarStyle,
}

impl Default for ClockConfiguration {
    fn default() -> Self {
        Self {
            use_24_hour_format: false,
            show_seconds: true,
            show_date: true,
            date_format: DateDisplayFormat::MonthDayYear,
            background_style: BackgroundStyle::Solid,
            background_color: Rgba::BLACK,
            gradient_colors: vec![Rgba::BLACK, Rgba::opaque(0x1A, 0x1A, 0x1A)],
            text_color: Rgba::WHITE,
            accent_color: SystemColors::BLUE,
            time_font: TimeFontStyle::Rounded,
            time_font_size: FontSizeOption::Large,
            time_font_weight: FontWeightOption::Medium,
            date_font: DateFontStyle::System,
            layout: ClockLayout::AppleTimer,
            alignment: TextAlignmentOption::Center,
            spacing: SpacingOption::Normal,
            shadow_enabled: true,
            glow_enabled: false,
            animation_style: AnimationStyle::None,
            timezone: String::new(),
            show_timezone: false,
            show_progress_bar: false,
            progress_bar_height: ProgressBarHeight::Medium,
            progress_bar_position: ProgressBarPosition::Bottom,
            progress_bar_style: ProgressBarStyle::DayProgression,
        }
    }
}

impl ClockConfiguration {
    /// Decodes a persisted record.
    ///
    /// Absent fields take their default. Fails when the bytes are not a JSON
    /// object or when a present field holds an unknown tag or a bad colour.
    ///
    /// # Errors
    /// Returns `CodecError::Decode` describing the first offending field.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        serde_json::from_slice(bytes).map_err(CodecError::Decode)
    }

    /// Decodes a persisted record, substituting [`ClockConfiguration::default`]
    /// wholesale when decoding fails.
    pub fn decode_or_default(bytes: &[u8]) -> Self {
        Self::decode(bytes).unwrap_or_else(|e| {
            warn!(error = %e, "Stored clock configuration is unreadable, using defaults");
            Self::default()
        })
    }

    /// Serializes the record. Field order is fixed, so equal values encode
    /// to identical bytes.
    ///
    /// # Errors
    /// Returns `CodecError::Encode` if serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(self).map_err(CodecError::Encode)
    }

    /// Seconds between consecutive widget refreshes this configuration asks for.
    pub fn refresh_interval_secs(&self) -> u32 {
        if self.show_seconds { 1 } else { 60 }
    }
}
