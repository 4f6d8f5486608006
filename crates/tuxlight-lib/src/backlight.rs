//! Live backlight access — trait + sysfs backend.
//!
//! The driver exposes two text attributes: `color_string` (accepts a color
//! name, cannot be read back meaningfully) and `brightness` (ASCII integer,
//! read/write). Writes are plain text writes with no acknowledgment; a value
//! the driver rejects surfaces only as an I/O error.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::brightness::Brightness;
use crate::color::Color;
use crate::error::{Result, TuxlightError};
use crate::settings::Settings;

// ── Trait ──

pub trait Backlight {
    /// Current hardware brightness. Reflects hotkey changes that never reach
    /// the module config.
    fn read_brightness(&self) -> Result<u32>;
    /// Write an upper-case color name to the color attribute.
    fn write_color(&self, color: Color) -> Result<()>;
    /// Write a brightness value to the brightness attribute.
    fn write_brightness(&self, brightness: Brightness) -> Result<()>;
}

// ── sysfs implementation ──

pub struct SysfsBacklight {
    color_file: PathBuf,
    brightness_file: PathBuf,
}

impl SysfsBacklight {
    pub fn new(settings: &Settings) -> Self {
        SysfsBacklight {
            color_file: settings.color_file.clone(),
            brightness_file: settings.brightness_file.clone(),
        }
    }
}

/// Write `value` to an existing attribute file. The attribute is never created.
fn write_attribute(path: &Path, value: &str) -> Result<()> {
    log::debug!("writing {value:?} to {}", path.display());
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)?;
    file.write_all(value.as_bytes())?;
    Ok(())
}

impl Backlight for SysfsBacklight {
    fn read_brightness(&self) -> Result<u32> {
        let raw = std::fs::read_to_string(&self.brightness_file)?;
        let trimmed = raw.trim();
        trimmed.parse().map_err(|_| {
            TuxlightError::Brightness(format!(
                "cannot parse {trimmed:?} from {} as integer",
                self.brightness_file.display()
            ))
        })
    }

    fn write_color(&self, color: Color) -> Result<()> {
        write_attribute(&self.color_file, color.name())
    }

    fn write_brightness(&self, brightness: Brightness) -> Result<()> {
        write_attribute(&self.brightness_file, &brightness.to_string())
    }
}

// ── Mock backlight for testing ──

/// In-memory mock backlight for unit and integration tests.
///
/// Always compiled (zero runtime cost), hidden from public docs.
#[doc(hidden)]
pub mod mock {
    use super::*;
    use std::cell::{Cell, RefCell};

    pub struct MockBacklight {
        /// Value returned by `read_brightness`; updated by `write_brightness`.
        pub brightness: Cell<u32>,
        /// Recorded color writes, in order.
        pub color_writes: RefCell<Vec<Color>>,
        /// Recorded brightness writes, in order.
        pub brightness_writes: RefCell<Vec<u8>>,
        /// If true, every write returns an error.
        pub fail_writes: Cell<bool>,
    }

    impl Default for MockBacklight {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockBacklight {
        pub fn new() -> Self {
            Self::with_brightness(Brightness::DEFAULT.value().into())
        }

        pub fn with_brightness(brightness: u32) -> Self {
            MockBacklight {
                brightness: Cell::new(brightness),
                color_writes: RefCell::new(Vec::new()),
                brightness_writes: RefCell::new(Vec::new()),
                fail_writes: Cell::new(false),
            }
        }

        /// Simulate a hotkey press that changes brightness behind our back.
        pub fn hotkey_set(&self, brightness: u32) {
            self.brightness.set(brightness);
        }

        pub fn write_count(&self) -> usize {
            self.color_writes.borrow().len() + self.brightness_writes.borrow().len()
        }

        fn check_fail(&self) -> Result<()> {
            if self.fail_writes.get() {
                return Err(TuxlightError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "mock: no such device",
                )));
            }
            Ok(())
        }
    }

    impl Backlight for MockBacklight {
        fn read_brightness(&self) -> Result<u32> {
            Ok(self.brightness.get())
        }

        fn write_color(&self, color: Color) -> Result<()> {
            self.check_fail()?;
            self.color_writes.borrow_mut().push(color);
            Ok(())
        }

        fn write_brightness(&self, brightness: Brightness) -> Result<()> {
            self.check_fail()?;
            self.brightness_writes.borrow_mut().push(brightness.value());
            self.brightness.set(brightness.value().into());
            Ok(())
        }
    }
}
