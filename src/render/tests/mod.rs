//! Unit tests for frame derivation.
//! Instants are built in fixed offsets so results do not depend on the host zone.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::clock::{
    BackgroundStyle, ClockConfiguration, ClockLayout, DateDisplayFormat, FontSizeOption,
    FontWeightOption, ProgressBarPosition, ProgressBarStyle, Rgba, SpacingOption, SystemColors,
    TextAlignmentOption, TimeFontStyle,
};
use crate::render::{
    Arrangement, Background, DayQuarter, FontDesign, LayoutComposition, RenderContext,
    RenderFrame, context_font_sizes, day_progress, format_date, format_seconds, format_time,
    resolve_background, resolve_colors, resolve_font_size, resolve_fonts,
    resolve_progress_gradient, select_layout_composition, timezone_label,
};

fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, hour, minute, second).unwrap()
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

fn standard(config: &ClockConfiguration) -> crate::render::StandardComposition {
    match select_layout_composition(config) {
        LayoutComposition::Standard(standard) => standard,
        LayoutComposition::AppleTimer(_) => panic!("expected a standard composition"),
    }
}

#[test]
fn formats_24_and_12_hour_time() {
    let instant = at(14, 5, 9);
    let mut config = ClockConfiguration {
        use_24_hour_format: true,
        ..ClockConfiguration::default()
    };
    assert_eq!(format_time(&config, &instant), "14:05");
    assert_eq!(format_seconds(&instant), "09");

    config.use_24_hour_format = false;
    assert_eq!(format_time(&config, &instant), "2:05");
    assert_eq!(format_seconds(&instant), "09");
}

#[test]
fn twelve_hour_clock_shows_twelve_after_midnight() {
    let config = ClockConfiguration::default();
    assert_eq!(format_time(&config, &at(0, 30, 0)), "12:30");
    assert_eq!(format_time(&config, &at(12, 0, 0)), "12:00");
}

#[test]
fn formats_every_date_pattern() {
    let instant = at(9, 0, 0);
    let cases = [
        (DateDisplayFormat::MonthDayYear, "Mar 5, 2024"),
        (DateDisplayFormat::DayMonthYear, "5 Mar 2024"),
        (DateDisplayFormat::ShortDate, "3/5/24"),
        (DateDisplayFormat::DayOfWeek, "Tuesday"),
        (DateDisplayFormat::DayOfWeekShort, "Tue"),
        (DateDisplayFormat::None, ""),
    ];

    for (date_format, expected) in cases {
        let config = ClockConfiguration {
            date_format,
            ..ClockConfiguration::default()
        };
        assert_eq!(format_date(&config, &instant), expected, "{date_format:?}");
    }
}

#[test]
fn date_none_is_empty_regardless_of_show_date() {
    for show_date in [true, false] {
        let config = ClockConfiguration {
            date_format: DateDisplayFormat::None,
            show_date,
            ..ClockConfiguration::default()
        };
        for hour in [0, 7, 13, 23] {
            assert_eq!(format_date(&config, &at(hour, 59, 59)), "");
        }
    }
}

#[test]
fn hidden_date_is_empty() {
    let config = ClockConfiguration {
        show_date: false,
        ..ClockConfiguration::default()
    };
    assert_eq!(format_date(&config, &at(10, 0, 0)), "");
}

#[test]
fn day_progress_boundaries() {
    assert!(day_progress(&at(0, 0, 0)).abs() < 1e-12);
    assert!((day_progress(&at(12, 0, 0)) - 0.5).abs() < 1e-12);

    let last = day_progress(&at(23, 59, 59));
    assert!((last - 86_399.0 / 86_400.0).abs() < 1e-12);
    assert!(last < 1.0);
}

#[test]
fn day_progress_uses_the_instants_wall_clock() {
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let local_midnight = plus_two.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();

    assert!(day_progress(&local_midnight).abs() < 1e-12);
    assert!((day_progress(&local_midnight.with_timezone(&Utc)) - 22.0 / 24.0).abs() < 1e-12);
}

#[test]
fn day_progression_gradient_follows_quarters() {
    let config = ClockConfiguration::default();

    assert_eq!(
        resolve_progress_gradient(&config, 0.10),
        vec![SystemColors::PURPLE, SystemColors::BLUE]
    );
    assert_eq!(
        resolve_progress_gradient(&config, 0.40),
        vec![SystemColors::BLUE, SystemColors::CYAN, SystemColors::YELLOW]
    );
    assert_eq!(
        resolve_progress_gradient(&config, 0.60),
        vec![SystemColors::YELLOW, SystemColors::ORANGE]
    );
    assert_eq!(
        resolve_progress_gradient(&config, 0.90),
        vec![SystemColors::ORANGE, SystemColors::RED, SystemColors::PURPLE]
    );
}

#[test]
fn quarter_boundaries_belong_to_the_later_quarter() {
    assert_eq!(DayQuarter::from_progress(0.0), DayQuarter::Night);
    assert_eq!(DayQuarter::from_progress(0.25), DayQuarter::Morning);
    assert_eq!(DayQuarter::from_progress(0.5), DayQuarter::Afternoon);
    assert_eq!(DayQuarter::from_progress(0.75), DayQuarter::Evening);
    assert_eq!(DayQuarter::from_progress(f64::NAN), DayQuarter::Night);
    assert_eq!(DayQuarter::from_progress(7.0), DayQuarter::Evening);
}

#[test]
fn solid_and_pulsing_use_accent() {
    let accent = Rgba::opaque(0x10, 0x20, 0x30);
    let mut config = ClockConfiguration {
        accent_color: accent,
        progress_bar_style: ProgressBarStyle::Solid,
        ..ClockConfiguration::default()
    };
    assert_eq!(resolve_progress_gradient(&config, 0.9), vec![accent]);

    config.progress_bar_style = ProgressBarStyle::Pulsing;
    assert_eq!(
        resolve_progress_gradient(&config, 0.9),
        vec![accent, accent.with_opacity(0.6)]
    );
}

#[test]
fn font_size_table() {
    let cases = [
        (FontSizeOption::Small, 24.0, 9.6, 12.0),
        (FontSizeOption::Medium, 32.0, 12.8, 16.0),
        (FontSizeOption::Large, 40.0, 16.0, 20.0),
        (FontSizeOption::ExtraLarge, 48.0, 19.2, 24.0),
    ];

    for (option, time, date, seconds) in cases {
        let sizes = resolve_font_size(option);
        assert_close(sizes.time, time);
        assert_close(sizes.date, date);
        assert_close(sizes.seconds, seconds);
    }
}

#[test]
fn preview_context_scales_with_floors() {
    let small = context_font_sizes(FontSizeOption::Small, RenderContext::Preview);
    assert_close(small.time, 16.8);
    assert_close(small.date, 10.0);
    assert_close(small.seconds, 10.0);

    let extra = context_font_sizes(FontSizeOption::ExtraLarge, RenderContext::Preview);
    assert_close(extra.time, 33.6);
    assert_close(extra.date, 13.44);
    assert_close(extra.seconds, 16.8);

    let widget = context_font_sizes(FontSizeOption::Small, RenderContext::Widget);
    assert_eq!(widget, resolve_font_size(FontSizeOption::Small));
}

#[test]
fn standard_fonts_follow_configuration() {
    let config = ClockConfiguration {
        layout: ClockLayout::Stacked,
        time_font: TimeFontStyle::Serif,
        time_font_weight: FontWeightOption::Bold,
        time_font_size: FontSizeOption::Medium,
        ..ClockConfiguration::default()
    };
    let fonts = resolve_fonts(&config, RenderContext::Widget);

    assert_eq!(fonts.time.design, FontDesign::Serif);
    assert_eq!(fonts.time.weight, FontWeightOption::Bold);
    assert_close(fonts.time.size, 32.0);
    assert_eq!(fonts.seconds.design, FontDesign::Rounded);
    assert_eq!(fonts.seconds.weight, FontWeightOption::Regular);
    assert_eq!(fonts.date.design, FontDesign::Default);
    assert_eq!(fonts.date.weight, FontWeightOption::Medium);
}

#[test]
fn timer_layout_uses_fixed_sizes() {
    let config = ClockConfiguration {
        time_font_size: FontSizeOption::Small,
        time_font: TimeFontStyle::Serif,
        ..ClockConfiguration::default()
    };

    for context in [RenderContext::Widget, RenderContext::Preview] {
        let fonts = resolve_fonts(&config, context);
        assert_close(fonts.time.size, 32.0);
        assert_close(fonts.seconds.size, 12.0);
        assert_close(fonts.date.size, 8.0);
        assert_eq!(fonts.time.design, FontDesign::Rounded);
        assert!(fonts.time.monospaced_digits);
    }
}

#[test]
fn empty_gradient_falls_back_to_background_color() {
    let background = Rgba::opaque(0x22, 0x33, 0x44);
    let config = ClockConfiguration {
        background_style: BackgroundStyle::Gradient,
        background_color: background,
        gradient_colors: Vec::new(),
        ..ClockConfiguration::default()
    };

    assert_eq!(
        resolve_background(&config, RenderContext::Widget),
        Background::Gradient(vec![background, background])
    );
}

#[test]
fn blur_radius_depends_on_context() {
    let config = ClockConfiguration {
        background_style: BackgroundStyle::Blur,
        ..ClockConfiguration::default()
    };

    assert_eq!(
        resolve_background(&config, RenderContext::Widget),
        Background::Blurred {
            color: Rgba::BLACK,
            radius: 10.0
        }
    );
    assert_eq!(
        resolve_background(&config, RenderContext::Preview),
        Background::Blurred {
            color: Rgba::BLACK,
            radius: 5.0
        }
    );
}

#[test]
fn effect_colors_follow_toggles() {
    let mut config = ClockConfiguration {
        layout: ClockLayout::Stacked,
        ..ClockConfiguration::default()
    };
    let colors = resolve_colors(&config);
    assert_eq!(colors.shadow, Some(Rgba::BLACK.with_opacity(0.3)));
    assert_eq!(colors.glow, None);
    assert_eq!(colors.date_text, Rgba::WHITE.with_opacity(0.8));

    config.shadow_enabled = false;
    config.glow_enabled = true;
    let colors = resolve_colors(&config);
    assert_eq!(colors.shadow, None);
    assert_eq!(colors.glow, Some(config.accent_color));
}

#[test]
fn timer_layout_dims_the_date_further() {
    let config = ClockConfiguration {
        layout: ClockLayout::AppleTimer,
        ..ClockConfiguration::default()
    };
    let colors = resolve_colors(&config);
    assert_eq!(colors.date_text, Rgba::WHITE.with_opacity(0.7));
    assert_eq!(colors.text, Rgba::WHITE);

    let stacked = resolve_colors(&ClockConfiguration {
        layout: ClockLayout::Stacked,
        ..config
    });
    assert_eq!(stacked.date_text, Rgba::WHITE.with_opacity(0.8));
}

#[test]
fn timer_layout_ignores_alignment_spacing_and_bar_toggle() {
    let config = ClockConfiguration {
        layout: ClockLayout::AppleTimer,
        alignment: TextAlignmentOption::Leading,
        spacing: SpacingOption::Loose,
        show_progress_bar: true,
        ..ClockConfiguration::default()
    };
    let composition = select_layout_composition(&config);

    match composition {
        LayoutComposition::AppleTimer(timer) => {
            assert_close(timer.indicator_height, 2.0);
            assert_close(timer.row_spacing, 6.0);
        }
        LayoutComposition::Standard(_) => panic!("expected the timer composition"),
    }
    assert_eq!(composition.progress_bar(), None);
}

#[test]
fn standard_layouts_honor_alignment_spacing_and_bar() {
    let config = ClockConfiguration {
        layout: ClockLayout::SideBySide,
        alignment: TextAlignmentOption::Trailing,
        spacing: SpacingOption::Loose,
        show_progress_bar: true,
        progress_bar_position: ProgressBarPosition::Top,
        ..ClockConfiguration::default()
    };
    let side = standard(&config);

    assert_eq!(side.arrangement, Arrangement::SideBySide);
    assert_eq!(side.alignment, TextAlignmentOption::Trailing);
    assert_close(side.item_spacing, 24.0);
    assert_close(side.time_block_spacing, 6.0);
    let bar = side.progress_bar.unwrap();
    assert_eq!(bar.position, ProgressBarPosition::Top);
    assert_close(bar.height, 4.0);

    let stacked = standard(&ClockConfiguration {
        layout: ClockLayout::Stacked,
        ..config.clone()
    });
    assert_close(stacked.item_spacing, 12.0);
    assert!(stacked.shows_timezone);

    let time_only = standard(&ClockConfiguration {
        layout: ClockLayout::TimeOnly,
        show_progress_bar: false,
        ..config
    });
    assert!(!time_only.shows_date);
    assert_eq!(time_only.progress_bar, None);
}

#[test]
fn timezone_label_prefers_identifier() {
    let mut config = ClockConfiguration {
        show_timezone: true,
        timezone: "Europe/Oslo".to_string(),
        ..ClockConfiguration::default()
    };
    assert_eq!(
        timezone_label(&config, &at(8, 0, 0)).as_deref(),
        Some("Europe/Oslo")
    );

    config.timezone.clear();
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let instant = plus_two.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap();
    assert_eq!(
        timezone_label(&config, &instant).as_deref(),
        Some("UTC+02:00")
    );

    config.show_timezone = false;
    assert_eq!(timezone_label(&config, &instant), None);
}

#[test]
fn frame_combines_all_derivations() {
    let config = ClockConfiguration {
        use_24_hour_format: true,
        layout: ClockLayout::Stacked,
        ..ClockConfiguration::default()
    };
    let frame = RenderFrame::render(&config, &at(18, 0, 0), RenderContext::Widget);

    assert_eq!(frame.time, "18:00");
    assert_eq!(frame.seconds.as_deref(), Some("00"));
    assert_eq!(frame.date, "Mar 5, 2024");
    assert!(frame.shows_date());
    assert!(!frame.shows_timezone());
    assert!((frame.day_progress - 0.75).abs() < 1e-12);
    assert_eq!(
        frame.progress_gradient,
        vec![SystemColors::ORANGE, SystemColors::RED, SystemColors::PURPLE]
    );
}

#[test]
fn hidden_seconds_produce_no_seconds_line() {
    let config = ClockConfiguration {
        show_seconds: false,
        ..ClockConfiguration::default()
    };
    let frame = RenderFrame::render(&config, &at(1, 2, 3), RenderContext::Preview);
    assert_eq!(frame.seconds, None);
}

#[test]
fn derivation_is_total_over_options() {
    let instants = [at(0, 0, 0), at(6, 0, 0), at(11, 59, 59), at(23, 59, 59)];

    for layout in ClockLayout::ALL {
        for date_format in DateDisplayFormat::ALL {
            for background_style in BackgroundStyle::ALL {
                for progress_bar_style in ProgressBarStyle::ALL {
                    for size in FontSizeOption::ALL {
                        let config = ClockConfiguration {
                            layout,
                            date_format,
                            background_style,
                            progress_bar_style,
                            time_font_size: size,
                            gradient_colors: Vec::new(),
                            show_progress_bar: true,
                            ..ClockConfiguration::default()
                        };

                        for instant in &instants {
                            for context in [RenderContext::Widget, RenderContext::Preview] {
                                let frame = RenderFrame::render(&config, instant, context);
                                assert!((0.0..1.0).contains(&frame.day_progress));
                                assert!(!frame.progress_gradient.is_empty());
                                assert!(!frame.time.is_empty());
                            }
                        }
                    }
                }
            }
        }
    }
}
