use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::clock::ClockConfiguration;

const TIME_24H: &str = "%H:%M";
const TIME_12H: &str = "%-I:%M";
const SECONDS: &str = "%S";

/// Hours and minutes of `instant`, as `HH:mm` or `h:mm`.
pub fn format_time<Tz>(config: &ClockConfiguration, instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = if config.use_24_hour_format {
        TIME_24H
    } else {
        TIME_12H
    };
    instant.format(pattern).to_string()
}

/// Zero-padded seconds of `instant`.
///
/// Always produced; whether it is shown is decided by `show_seconds`.
pub fn format_seconds<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format(SECONDS).to_string()
}

/// The date line, or an empty string when the date is switched off or the
/// format is [`DateDisplayFormat::None`](crate::clock::DateDisplayFormat::None).
pub fn format_date<Tz>(config: &ClockConfiguration, instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !config.show_date {
        return String::new();
    }

    match config.date_format.strftime() {
        Some(pattern) => instant.format(pattern).to_string(),
        None => String::new(),
    }
}

/// Short label naming the zone, when `show_timezone` is on.
///
/// Uses the configured identifier, or the instant's UTC offset when none is set.
pub fn timezone_label<Tz>(config: &ClockConfiguration, instant: &DateTime<Tz>) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !config.show_timezone {
        return None;
    }

    let identifier = config.timezone.trim();
    if identifier.is_empty() {
        Some(instant.format("UTC%:z").to_string())
    } else {
        Some(identifier.to_string())
    }
}
