use crate::clock::{BackgroundStyle, ClockConfiguration, ClockLayout, Rgba};

use super::RenderContext;

const SECONDARY_TEXT_OPACITY: f32 = 0.8;
const TIMER_DATE_OPACITY: f32 = 0.7;
const SECONDS_OPACITY: f32 = 0.8;
const SHADOW_OPACITY: f32 = 0.3;
const TRACK_OPACITY: f32 = 0.2;
const TIMER_FILL_OPACITY: f32 = 0.6;

/// How the area behind the clock is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// A flat colour.
    Solid(Rgba),
    /// A diagonal gradient, top-leading to bottom-trailing. Always at least one stop.
    Gradient(Vec<Rgba>),
    /// A flat colour with a blur.
    Blurred {
        /// Base colour.
        color: Rgba,
        /// Blur radius in points.
        radius: f32,
    },
}

/// Every colour a frame paints with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColors {
    /// Time digits.
    pub text: Rgba,
    /// Date line. Dimmer in the timer layout.
    pub date_text: Rgba,
    /// Seconds line.
    pub seconds: Rgba,
    /// Accent, used by the timezone label and glow.
    pub accent: Rgba,
    /// Text shadow, when enabled.
    pub shadow: Option<Rgba>,
    /// Glow behind the time digits, when enabled.
    pub glow: Option<Rgba>,
    /// Unfilled part of any progress bar.
    pub progress_track: Rgba,
    /// Fill of the timer layout's built-in indicator.
    pub timer_fill: Rgba,
}

/// Resolves the background. An empty gradient list paints `background_color`
/// at both ends.
pub fn resolve_background(config: &ClockConfiguration, context: RenderContext) -> Background {
    match config.background_style {
        BackgroundStyle::Solid => Background::Solid(config.background_color),
        BackgroundStyle::Gradient if config.gradient_colors.is_empty() => {
            Background::Gradient(vec![config.background_color, config.background_color])
        }
        BackgroundStyle::Gradient => Background::Gradient(config.gradient_colors.clone()),
        BackgroundStyle::Blur => Background::Blurred {
            color: config.background_color,
            radius: context.blur_radius(),
        },
    }
}

/// Resolves text, effect and track colours.
pub fn resolve_colors(config: &ClockConfiguration) -> ResolvedColors {
    let date_opacity = match config.layout {
        ClockLayout::AppleTimer => TIMER_DATE_OPACITY,
        ClockLayout::Stacked | ClockLayout::SideBySide | ClockLayout::TimeOnly => {
            SECONDARY_TEXT_OPACITY
        }
    };

    ResolvedColors {
        text: config.text_color,
        date_text: config.text_color.with_opacity(date_opacity),
        seconds: config.accent_color.with_opacity(SECONDS_OPACITY),
        accent: config.accent_color,
        shadow: config
            .shadow_enabled
            .then(|| Rgba::BLACK.with_opacity(SHADOW_OPACITY)),
        glow: config.glow_enabled.then_some(config.accent_color),
        progress_track: config.text_color.with_opacity(TRACK_OPACITY),
        timer_fill: config.text_color.with_opacity(TIMER_FILL_OPACITY),
    }
}
