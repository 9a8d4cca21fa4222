//! standby-clock - configure, preview and run the StandBy clock widget.

use std::{env, error::Error, process};

use standby_clock::{
    cli::{CliService, formatting::format_error},
    config::AppConfig,
    config_store::ClockConfigStore,
    tracing_config,
};
use tracing::{Level, info, span};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

/// Long-running commands also log to a file; one-shot commands keep stdout
/// clean and only report warnings.
fn is_long_running(args: &[String]) -> bool {
    matches!(
        (args.first().map(String::as_str), args.get(1).map(String::as_str)),
        (Some("clock"), Some("preview" | "widget"))
    )
}

fn run(args: &[String]) -> Result<String, Box<dyn Error>> {
    let settings = AppConfig::load_default()?;

    let _guard = if is_long_running(args) {
        Some(tracing_config::init_with_file(settings.general.log_level)?)
    } else {
        tracing_config::init_cli_mode()?;
        None
    };
    let _span = span!(Level::INFO, "standby_clock").entered();
    info!(command = ?args, "Starting standby-clock");

    let store = ClockConfigStore::from_settings(&settings.storage)?;
    let cli_service = CliService::new(store, settings);

    Ok(cli_service.run(args)?)
}
