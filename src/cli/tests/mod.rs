//! Unit tests for CLI module
//!
//! Commands run against an in-memory store; nothing touches the filesystem
//! or starts a runtime.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use chrono::TimeZone;
use serde_json::json;

use crate::cli::{
    CliError, CliService,
    formatting::{format_json_value, render_frame},
};
use crate::clock::{ClockConfiguration, ClockLayout, ProgressBarPosition, Rgba, WidgetColor};
use crate::config::AppConfig;
use crate::config_store::ClockConfigStore;
use crate::render::{RenderContext, RenderFrame};

fn service() -> (CliService, ClockConfigStore) {
    let store = ClockConfigStore::in_memory();
    (CliService::new(store.clone(), AppConfig::default()), store)
}

fn run(service: &CliService, args: &[&str]) -> Result<String, CliError> {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    service.run(&args)
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn format_json_value_scalars() {
    assert_eq!(format_json_value(&json!("stacked")), "\"stacked\"");
    assert_eq!(format_json_value(&json!(true)), "true");
    assert_eq!(format_json_value(&json!(20)), "20");
    assert_eq!(format_json_value(&json!(null)), "null");
}

#[test]
fn format_json_value_collections() {
    assert_eq!(
        format_json_value(&json!(["#000000", "#1A1A1A"])),
        "[\"#000000\", \"#1A1A1A\"]"
    );
    assert_eq!(format_json_value(&json!([])), "[]");
    assert_eq!(format_json_value(&json!({"a": 1, "b": 2})), "{2}");
}

#[test]
fn list_all_is_sorted_by_category() {
    let (service, _) = service();

    let listing = service.list_all();

    let categories: Vec<&str> = listing.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(categories, ["clock", "config"]);
    assert_eq!(listing[0].1, ["frame", "preview", "timeline", "widget"]);
    assert_eq!(
        listing[1].1,
        ["get", "options", "palette", "reset", "schema", "set", "show"]
    );
}

#[test]
fn help_lists_categories_and_commands() {
    let (service, _) = service();

    let overview = strip_ansi(&run(&service, &[]).unwrap());
    assert!(overview.contains("config"));
    assert!(overview.contains("clock"));
    assert!(overview.contains("Get a clock configuration field"));

    let config_help = strip_ansi(&run(&service, &["help", "config"]).unwrap());
    assert!(config_help.contains("set <field> <value>"));
    assert!(config_help.contains("options [field]"));

    let bare_category = strip_ansi(&run(&service, &["clock"]).unwrap());
    assert!(bare_category.contains("frame [time]"));
}

#[test]
fn unknown_category_or_command_is_not_found() {
    let (service, _) = service();

    assert!(matches!(
        run(&service, &["audio", "mute"]),
        Err(CliError::CommandNotFound(_))
    ));
    assert!(matches!(
        run(&service, &["config", "watch"]),
        Err(CliError::CommandNotFound(_))
    ));
    assert!(matches!(
        run(&service, &["help", "audio"]),
        Err(CliError::CommandNotFound(_))
    ));
}

#[test]
fn argument_count_is_validated() {
    let (service, _) = service();

    assert!(matches!(
        run(&service, &["config", "get"]),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        run(&service, &["config", "show", "extra"]),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn get_reads_defaults_when_nothing_stored() {
    let (service, _) = service();

    assert_eq!(
        run(&service, &["config", "get", "layout"]).unwrap(),
        "layout: \"appleTimer\""
    );
    assert_eq!(
        run(&service, &["config", "get", "use24HourFormat"]).unwrap(),
        "use24HourFormat: false"
    );
}

#[test]
fn get_unknown_field_lists_known_fields() {
    let (service, _) = service();

    let Err(CliError::InvalidArguments(message)) = run(&service, &["config", "get", "volume"])
    else {
        panic!("expected invalid arguments");
    };
    assert!(message.contains("volume"));
    assert!(message.contains("showSeconds"));
}

#[test]
fn set_saves_parsed_values() {
    let (service, store) = service();

    run(&service, &["config", "set", "use24HourFormat", "true"]).unwrap();
    run(&service, &["config", "set", "layout", "stacked"]).unwrap();
    run(&service, &["config", "set", "timezone", "Europe/Paris"]).unwrap();

    let stored = store.load();
    assert!(stored.use_24_hour_format);
    assert_eq!(stored.layout, ClockLayout::Stacked);
    assert_eq!(stored.timezone, "Europe/Paris");
}

#[test]
fn set_accepts_palette_names_for_colours() {
    let (service, store) = service();

    let output = run(&service, &["config", "set", "accentColor", "Orange"]).unwrap();
    run(&service, &["config", "set", "gradientColors", "#000000, indigo"]).unwrap();

    let stored = store.load();
    assert_eq!(stored.accent_color, WidgetColor::Orange.rgba());
    assert_eq!(
        stored.gradient_colors,
        vec![Rgba::BLACK, WidgetColor::Indigo.rgba()]
    );
    assert!(output.contains(&WidgetColor::Orange.rgba().to_hex()));
}

#[test]
fn set_rejects_invalid_values_without_saving() {
    let (service, store) = service();
    run(&service, &["config", "set", "layout", "stacked"]).unwrap();

    assert!(matches!(
        run(&service, &["config", "set", "layout", "spiral"]),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        run(&service, &["config", "set", "textColor", "#12345"]),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        run(&service, &["config", "set", "showSeconds", "\"yes\""]),
        Err(CliError::InvalidArguments(_))
    ));

    assert_eq!(store.load().layout, ClockLayout::Stacked);
}

#[test]
fn show_prints_stored_record_and_reset_restores_defaults() {
    let (service, store) = service();

    let empty = run(&service, &["config", "show"]).unwrap();
    assert!(empty.starts_with("// nothing stored"));

    run(&service, &["config", "set", "showDate", "false"]).unwrap();
    let shown = run(&service, &["config", "show"]).unwrap();
    let json = shown.split_once('\n').map(|(_, json)| json).unwrap();
    let decoded = ClockConfiguration::decode(json.as_bytes()).unwrap();
    assert!(!decoded.show_date);

    run(&service, &["config", "reset"]).unwrap();
    assert_eq!(store.load(), ClockConfiguration::default());
}

#[test]
fn options_lists_tags_and_labels() {
    let (service, _) = service();

    let date_formats = strip_ansi(&run(&service, &["config", "options", "dateFormat"]).unwrap());
    assert!(date_formats.contains("monthDayYear"));
    assert!(date_formats.contains("dayOfWeekShort"));

    let all = strip_ansi(&run(&service, &["config", "options"]).unwrap());
    assert!(all.contains("progressBarStyle"));
    assert!(all.contains("appleTimer"));

    assert!(matches!(
        run(&service, &["config", "options", "timezone"]),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn palette_lists_every_named_colour() {
    let (service, _) = service();

    let palette = strip_ansi(&run(&service, &["config", "palette"]).unwrap());

    assert_eq!(palette.lines().count(), WidgetColor::ALL.len());
    assert!(palette.contains("teal"));
}

#[test]
fn schema_describes_record_fields() {
    let (service, _) = service();

    let schema: serde_json::Value =
        serde_json::from_str(&run(&service, &["config", "schema"]).unwrap()).unwrap();

    let properties = &schema["properties"];
    assert!(properties.get("use24HourFormat").is_some());
    assert!(properties.get("progressBarStyle").is_some());
}

#[test]
fn frame_renders_requested_time() {
    let (service, _) = service();
    run(&service, &["config", "set", "use24HourFormat", "true"]).unwrap();

    let frame = strip_ansi(&run(&service, &["clock", "frame", "14:05:09"]).unwrap());

    assert!(frame.starts_with("14:05 09"));
}

#[test]
fn frame_rejects_malformed_time() {
    let (service, _) = service();

    assert!(matches!(
        run(&service, &["clock", "frame", "25:00"]),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn timeline_lists_requested_entries() {
    let (service, _) = service();

    let listing = strip_ansi(&run(&service, &["clock", "timeline", "3"]).unwrap());

    assert!(listing.starts_with("3 entries, refresh AtEnd"));
    assert_eq!(listing.lines().count(), 5);
    assert!(matches!(
        run(&service, &["clock", "timeline", "many"]),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn render_frame_places_progress_bar() {
    let config = ClockConfiguration {
        layout: ClockLayout::Stacked,
        show_progress_bar: true,
        progress_bar_position: ProgressBarPosition::Top,
        ..ClockConfiguration::default()
    };
    let instant = chrono::Utc
        .with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
        .unwrap();
    let frame = RenderFrame::render(&config, &instant, RenderContext::Widget);

    let drawn = strip_ansi(&render_frame(&frame, 10));
    let lines: Vec<&str> = drawn.lines().collect();

    assert_eq!(lines[0], "━".repeat(10));
    assert_eq!(lines[1], "12:00 00");
    assert_eq!(lines[2], "Mar 15, 2024");
}
