//! Formatting utilities for CLI output.
//!
//! Styled help text, JSON value summaries and a terminal rendition of a
//! [`RenderFrame`].

use std::fmt::Write;

use serde_json::Value;

use crate::{
    clock::{ProgressBarPosition, Rgba},
    render::{Arrangement, Background, LayoutComposition, RenderFrame},
};

/// ANSI escape codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Clears the terminal and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions and usage examples with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Paints `text` in a 24-bit foreground colour. Alpha is ignored.
pub fn paint(text: &str, color: Rgba) -> String {
    format!(
        "\x1b[38;2;{};{};{}m{}{}",
        color.r,
        color.g,
        color.b,
        text,
        Colors::RESET
    )
}

/// Two-cell swatch of `color`, for palette listings.
pub fn swatch(color: Rgba) -> String {
    format!(
        "\x1b[48;2;{};{};{}m  {}",
        color.r,
        color.g,
        color.b,
        Colors::RESET
    )
}

/// Formats a JSON value for one-line CLI output.
///
/// Scalars print as themselves; strings keep their quotes. Arrays of strings
/// print inline since the only list in the record is a handful of colours.
///
/// # Examples
///
/// ```
/// use standby_clock::cli::formatting::format_json_value;
///
/// assert_eq!(format_json_value(&serde_json::json!("large")), "\"large\"");
/// assert_eq!(format_json_value(&serde_json::json!(true)), "true");
/// assert_eq!(
///     format_json_value(&serde_json::json!(["#000000", "#1A1A1A"])),
///     "[\"#000000\", \"#1A1A1A\"]"
/// );
/// ```
pub fn format_json_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(format_json_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => format!("{{{}}}", map.len()),
        other => other.to_string(),
    }
}

/// Draws a text-only rendition of `frame`.
///
/// Lines are painted with the frame's colours; progress bars are `width`
/// cells filled in proportion to the day's progress.
pub fn render_frame(frame: &RenderFrame, width: usize) -> String {
    let mut time_line = paint(&frame.time, frame.colors.text);
    if let Some(seconds) = &frame.seconds {
        time_line.push(' ');
        time_line.push_str(&paint(seconds, frame.colors.seconds));
    }
    let date = frame
        .shows_date()
        .then(|| paint(&frame.date, frame.colors.date_text));

    let mut lines = Vec::new();

    match &frame.composition {
        LayoutComposition::AppleTimer(_) => {
            lines.push(time_line);
            lines.extend(date);
            lines.push(timer_indicator(frame, width));
        }
        LayoutComposition::Standard(standard) => {
            match (standard.arrangement, date) {
                (Arrangement::SideBySide, Some(date)) => lines.push(format!("{time_line}  {date}")),
                (_, date) => {
                    lines.push(time_line);
                    lines.extend(date);
                }
            }

            if frame.shows_timezone() {
                if let Some(label) = &frame.timezone {
                    lines.push(paint(label, frame.colors.accent));
                }
            }

            if let Some(placement) = standard.progress_bar {
                let bar = progress_bar(frame, width);
                match placement.position {
                    ProgressBarPosition::Top => lines.insert(0, bar),
                    ProgressBarPosition::Middle => lines.insert(1, bar),
                    ProgressBarPosition::Bottom => lines.push(bar),
                }
            }
        }
    }

    lines.push(format_description(&describe_background(&frame.background)));

    let mut out = String::new();
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    out
}

fn filled_cells(progress: f64, width: usize) -> usize {
    ((progress.clamp(0.0, 1.0) * width as f64).round() as usize).min(width)
}

fn progress_bar(frame: &RenderFrame, width: usize) -> String {
    let filled = filled_cells(frame.day_progress, width);
    let stops = &frame.progress_gradient;

    let mut bar = String::new();
    for cell in 0..filled {
        let stop = if stops.len() < 2 || filled < 2 {
            0
        } else {
            cell * (stops.len() - 1) / (filled - 1)
        };
        let color = stops.get(stop).copied().unwrap_or(frame.colors.accent);
        bar.push_str(&paint("━", color));
    }
    bar.push_str(&paint(&"━".repeat(width - filled), frame.colors.progress_track));
    bar
}

fn timer_indicator(frame: &RenderFrame, width: usize) -> String {
    let filled = filled_cells(frame.day_progress, width);
    format!(
        "{}{}",
        paint(&"▁".repeat(filled), frame.colors.timer_fill),
        paint(&"▁".repeat(width - filled), frame.colors.progress_track)
    )
}

fn describe_background(background: &Background) -> String {
    match background {
        Background::Solid(color) => format!("background {color}"),
        Background::Gradient(stops) => {
            let stops: Vec<String> = stops.iter().map(Rgba::to_string).collect();
            format!("background gradient {}", stops.join(" → "))
        }
        Background::Blurred { color, radius } => format!("background {color}, blur {radius}"),
    }
}
