use std::fmt::Display;

use serde_json::{Map, Value};

use crate::{
    cli::CliError,
    clock::{
        AnimationStyle, BackgroundStyle, ClockConfiguration, ClockLayout, DateDisplayFormat,
        DateFontStyle, FontSizeOption, FontWeightOption, ProgressBarHeight, ProgressBarPosition,
        ProgressBarStyle, Rgba, SpacingOption, TextAlignmentOption, TimeFontStyle,
    },
};

const COLOR_FIELDS: [&str; 3] = ["backgroundColor", "textColor", "accentColor"];
const GRADIENT_FIELD: &str = "gradientColors";

/// The record as a JSON object keyed by stored field name.
pub(super) fn to_object(config: &ClockConfiguration) -> Result<Map<String, Value>, CliError> {
    match serde_json::to_value(config) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(CliError::ServiceError(
            "clock configuration did not serialize to an object".to_string(),
        )),
        Err(e) => Err(CliError::ServiceError(e.to_string())),
    }
}

pub(super) fn unknown_field(field: &str, object: &Map<String, Value>) -> CliError {
    let known: Vec<&str> = object.keys().map(String::as_str).collect();
    CliError::InvalidArguments(format!(
        "Unknown field '{field}'. Known fields: {}",
        known.join(", ")
    ))
}

/// Interprets a raw command-line value for `field`.
///
/// Colour fields take a palette name or hex, the gradient takes a comma
/// separated list of them, and everything else is read as JSON with a bare
/// string as the fallback.
pub(super) fn parse_value(field: &str, raw: &str) -> Result<Value, CliError> {
    if COLOR_FIELDS.contains(&field) {
        return parse_color(raw).map(Value::String);
    }

    if field == GRADIENT_FIELD {
        let stops = raw
            .split(',')
            .map(str::trim)
            .filter(|stop| !stop.is_empty())
            .map(|stop| parse_color(stop).map(Value::String))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Value::Array(stops));
    }

    Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}

fn parse_color(raw: &str) -> Result<String, CliError> {
    Rgba::parse_named_or_hex(raw)
        .map(|color| color.to_hex())
        .map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Returns `config` with `field` replaced by `value`.
///
/// The whole record is decoded again, so a value the field cannot hold is
/// rejected rather than stored.
pub(super) fn apply(
    config: &ClockConfiguration,
    field: &str,
    value: Value,
) -> Result<ClockConfiguration, CliError> {
    let mut object = to_object(config)?;
    if !object.contains_key(field) {
        return Err(unknown_field(field, &object));
    }
    object.insert(field.to_string(), value);

    serde_json::from_value(Value::Object(object))
        .map_err(|e| CliError::InvalidArguments(format!("Invalid value for '{field}': {e}")))
}

fn listing<T: Copy + Display>(all: &[T], name: fn(T) -> &'static str) -> Vec<(String, &'static str)> {
    all.iter().map(|&value| (value.to_string(), name(value))).collect()
}

/// Stored tags and labels of an option field, or `None` for free-form fields.
pub(super) fn option_values(field: &str) -> Option<Vec<(String, &'static str)>> {
    let values = match field {
        "dateFormat" => listing(&DateDisplayFormat::ALL, DateDisplayFormat::display_name),
        "backgroundStyle" => listing(&BackgroundStyle::ALL, BackgroundStyle::display_name),
        "timeFont" => listing(&TimeFontStyle::ALL, TimeFontStyle::display_name),
        "timeFontSize" => listing(&FontSizeOption::ALL, FontSizeOption::display_name),
        "timeFontWeight" => listing(&FontWeightOption::ALL, FontWeightOption::display_name),
        "dateFont" => listing(&DateFontStyle::ALL, DateFontStyle::display_name),
        "layout" => listing(&ClockLayout::ALL, ClockLayout::display_name),
        "alignment" => listing(&TextAlignmentOption::ALL, TextAlignmentOption::display_name),
        "spacing" => listing(&SpacingOption::ALL, SpacingOption::display_name),
        "animationStyle" => listing(&AnimationStyle::ALL, AnimationStyle::display_name),
        "progressBarHeight" => listing(&ProgressBarHeight::ALL, ProgressBarHeight::display_name),
        "progressBarPosition" => {
            listing(&ProgressBarPosition::ALL, ProgressBarPosition::display_name)
        }
        "progressBarStyle" => listing(&ProgressBarStyle::ALL, ProgressBarStyle::display_name),
        _ => return None,
    };
    Some(values)
}

/// Field names that have a fixed set of values.
pub(super) const OPTION_FIELDS: [&str; 13] = [
    "dateFormat",
    "backgroundStyle",
    "timeFont",
    "timeFontSize",
    "timeFontWeight",
    "dateFont",
    "layout",
    "alignment",
    "spacing",
    "animationStyle",
    "progressBarHeight",
    "progressBarPosition",
    "progressBarStyle",
];
