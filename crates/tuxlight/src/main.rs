//! tuxlight — set and persist the keyboard backlight of tuxedo_keyboard laptops.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tuxlight_lib::TuxlightError;
use tuxlight_lib::brightness::Brightness;
use tuxlight_lib::color::Color;
use tuxlight_lib::settings::Settings;

mod cli;

#[derive(Parser)]
#[command(
    name = "tuxlight",
    version,
    about = "Set keyboard backlight color and brightness for tuxedo_keyboard laptops, persisted across reboots"
)]
struct Args {
    /// Set color: BLACK, RED, GREEN, BLUE, YELLOW, MAGENTA, CYAN, WHITE (case-insensitive)
    #[arg(long, alias = "set_color", value_name = "COLOR", value_parser = parse_color)]
    set_color: Option<Color>,

    /// Set brightness, any integer between 0-200
    #[arg(
        long,
        alias = "set_brightness",
        value_name = "0-200",
        value_parser = parse_brightness,
        allow_hyphen_values = true
    )]
    set_brightness: Option<Brightness>,

    /// Print the current color
    #[arg(long, alias = "get_color")]
    get_color: bool,

    /// Print the current brightness
    #[arg(long, alias = "get_brightness")]
    get_brightness: bool,

    /// Skip the module config file check
    #[arg(long, alias = "skip_config_check")]
    skip_config_check: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Settings file (default: <config dir>/tuxlight/settings.toml)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse().map_err(|e: TuxlightError| e.to_string())
}

fn parse_brightness(s: &str) -> Result<Brightness, String> {
    s.parse().map_err(|e: TuxlightError| e.to_string())
}

fn load_settings(custom_path: Option<&PathBuf>) -> Settings {
    match custom_path {
        Some(path) => {
            let (settings, warnings) = Settings::load_from(path);
            for w in &warnings {
                log::warn!("{w}");
            }
            settings
        }
        None => Settings::load(),
    }
}

fn main() {
    if std::env::args_os().len() <= 1 {
        let _ = Args::command().print_help();
        return;
    }

    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let settings = load_settings(args.settings.as_ref());
    let request = cli::Request {
        set_color: args.set_color,
        set_brightness: args.set_brightness,
        get_color: args.get_color,
        get_brightness: args.get_brightness,
        skip_config_check: args.skip_config_check,
    };

    if let Err(e) = cli::run(&request, &settings, args.json) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
