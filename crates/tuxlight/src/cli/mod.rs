//! Request handling — privilege check, config check, set, get.

mod privilege;

use serde::Serialize;

use tuxlight_lib::TuxlightError;
use tuxlight_lib::backlight::Backlight;
use tuxlight_lib::brightness::Brightness;
use tuxlight_lib::color::Color;
use tuxlight_lib::error::Result;
use tuxlight_lib::keyboard::Keyboard;
use tuxlight_lib::settings::Settings;

/// Validated command-line request. Values are already parsed, so nothing
/// here can fail validation after a file has been touched.
#[derive(Debug, Default)]
pub struct Request {
    pub set_color: Option<Color>,
    pub set_brightness: Option<Brightness>,
    pub get_color: bool,
    pub get_brightness: bool,
    pub skip_config_check: bool,
}

impl Request {
    fn mutates(&self) -> bool {
        self.set_color.is_some() || self.set_brightness.is_some()
    }

    /// Flag named in the permission error, in processing order.
    fn mutating_flag(&self) -> &'static str {
        if self.set_color.is_some() {
            "--set-color"
        } else {
            "--set-brightness"
        }
    }
}

// ── JSON output structs ──

#[derive(Debug, Default, Serialize)]
pub(super) struct StateOutput {
    pub config_repaired: bool,
    pub persisted: Option<PersistedJson>,
    pub color: Option<String>,
    pub brightness: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(super) struct PersistedJson {
    pub brightness: String,
    pub color: String,
}

pub fn run(req: &Request, settings: &Settings, json: bool) -> Result<()> {
    let kbd = Keyboard::open(settings);
    let output = run_with(&kbd, req, privilege::is_root())?;
    print_output(&output, kbd.config().path(), json)
}

/// Process a request against any backlight. `root` is whether the caller
/// may write sysfs and the module config.
pub(super) fn run_with<B: Backlight>(
    kbd: &Keyboard<B>,
    req: &Request,
    root: bool,
) -> Result<StateOutput> {
    if req.mutates() && !root {
        return Err(TuxlightError::Permission(format!(
            "{} needs root permission. Change to root or use sudo.",
            req.mutating_flag()
        )));
    }

    let mut output = StateOutput::default();

    if !req.skip_config_check {
        output.config_repaired = !kbd.config().ensure_valid()?;
    }

    if req.mutates() {
        let record = kbd.apply_and_persist(req.set_color, req.set_brightness)?;
        output.persisted = Some(PersistedJson {
            brightness: record.brightness,
            color: record.color,
        });
    }

    if req.get_color {
        output.color = Some(kbd.current_color()?);
    }
    if req.get_brightness {
        output.brightness = Some(kbd.current_brightness()?);
    }

    Ok(output)
}

fn print_output(output: &StateOutput, config_path: &std::path::Path, json: bool) -> Result<()> {
    if json {
        // stdout carries the JSON document; the repair notice goes to stderr.
        if output.config_repaired {
            eprintln!("Missing config file or missing parameter");
            eprintln!("New config file \"{}\" created", config_path.display());
        }
        let text = serde_json::to_string_pretty(output)
            .map_err(|e| TuxlightError::Io(std::io::Error::other(e)))?;
        println!("{text}");
        return Ok(());
    }

    if output.config_repaired {
        println!("Missing config file or missing parameter");
        println!("New config file \"{}\" created", config_path.display());
    }
    if let Some(ref color) = output.color {
        println!("{color}");
    }
    if let Some(brightness) = output.brightness {
        println!("{brightness}");
    }
    Ok(())
}
