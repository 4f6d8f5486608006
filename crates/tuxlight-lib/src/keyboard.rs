//! Keyboard backlight controller: live hardware plus persisted options.

use crate::backlight::{Backlight, SysfsBacklight};
use crate::brightness::Brightness;
use crate::color::Color;
use crate::error::Result;
use crate::modprobe::ModprobeConfig;
use crate::options::OptionsRecord;
use crate::settings::Settings;

pub struct Keyboard<B: Backlight> {
    backlight: B,
    config: ModprobeConfig,
}

impl Keyboard<SysfsBacklight> {
    /// Controller for the real sysfs attributes named in `settings`.
    pub fn open(settings: &Settings) -> Self {
        Keyboard::new(SysfsBacklight::new(settings), ModprobeConfig::new(settings))
    }
}

impl<B: Backlight> Keyboard<B> {
    pub fn new(backlight: B, config: ModprobeConfig) -> Self {
        Keyboard { backlight, config }
    }

    pub fn backlight(&self) -> &B {
        &self.backlight
    }

    pub fn config(&self) -> &ModprobeConfig {
        &self.config
    }

    /// Persisted color. The driver has no readable color attribute.
    pub fn current_color(&self) -> Result<String> {
        self.config.current_color()
    }

    /// Live brightness from hardware.
    pub fn current_brightness(&self) -> Result<u32> {
        self.backlight.read_brightness()
    }

    /// Apply the given values to hardware, then persist the effective state.
    ///
    /// An omitted color is taken from the module config; an omitted
    /// brightness is taken from hardware, which also sees hotkey changes.
    /// The config file is always fully rewritten. Hardware and config are
    /// not updated atomically.
    pub fn apply_and_persist(
        &self,
        color: Option<Color>,
        brightness: Option<Brightness>,
    ) -> Result<OptionsRecord> {
        let color = match color {
            Some(c) => {
                self.backlight.write_color(c)?;
                c.name().to_string()
            }
            None => self.config.current_color()?,
        };
        let brightness = match brightness {
            Some(b) => {
                self.backlight.write_brightness(b)?;
                b.to_string()
            }
            None => self.backlight.read_brightness()?.to_string(),
        };
        let record = OptionsRecord::new(brightness, color);
        self.config.write_record(&record)?;
        log::debug!(
            "persisted brightness={} color={}",
            record.brightness,
            record.color
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backlight::mock::MockBacklight;
    use crate::error::TuxlightError;

    fn setup(
        contents: Option<&str>,
        hw_brightness: u32,
    ) -> (tempfile::TempDir, Keyboard<MockBacklight>) {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::in_dir(dir.path());
        if let Some(c) = contents {
            std::fs::write(&settings.config_file, c).unwrap();
        }
        let kbd = Keyboard::new(
            MockBacklight::with_brightness(hw_brightness),
            ModprobeConfig::new(&settings),
        );
        (dir, kbd)
    }

    fn config_text(kbd: &Keyboard<MockBacklight>) -> String {
        std::fs::read_to_string(kbd.config().path()).unwrap()
    }

    #[test]
    fn set_color_writes_hardware_and_keeps_hw_brightness() {
        let line = "options tuxedo_keyboard brightness=100 color=BLUE\n";
        let (_dir, kbd) = setup(Some(line), 100);
        kbd.backlight().hotkey_set(40);
        let record = kbd.apply_and_persist(Some(Color::Red), None).unwrap();
        assert_eq!(*kbd.backlight().color_writes.borrow(), vec![Color::Red]);
        assert!(kbd.backlight().brightness_writes.borrow().is_empty());
        // Hotkey moved brightness to 40; hardware wins over the stale 100.
        assert_eq!(record, OptionsRecord::new(40, "RED"));
        assert_eq!(
            config_text(&kbd),
            "options tuxedo_keyboard brightness=40 color=RED\n"
        );
    }

    #[test]
    fn set_brightness_keeps_persisted_color() {
        let line = "options tuxedo_keyboard brightness=100 color=CYAN\n";
        let (_dir, kbd) = setup(Some(line), 100);
        kbd.apply_and_persist(None, Some(Brightness::new(7).unwrap()))
            .unwrap();
        assert!(kbd.backlight().color_writes.borrow().is_empty());
        assert_eq!(*kbd.backlight().brightness_writes.borrow(), vec![7]);
        assert_eq!(
            config_text(&kbd),
            "options tuxedo_keyboard brightness=7 color=CYAN\n"
        );
    }

    #[test]
    fn set_both() {
        let (_dir, kbd) = setup(Some("color=WHITE brightness=60"), 60);
        kbd.apply_and_persist(Some(Color::Green), Some(Brightness::new(200).unwrap()))
            .unwrap();
        assert_eq!(
            config_text(&kbd),
            "options tuxedo_keyboard brightness=200 color=GREEN\n"
        );
        assert_eq!(kbd.current_brightness().unwrap(), 200);
        assert_eq!(kbd.current_color().unwrap(), "GREEN");
    }

    #[test]
    fn nothing_given_reproduces_existing_line() {
        let line = "options tuxedo_keyboard brightness=100 color=BLUE\n";
        let (_dir, kbd) = setup(Some(line), 100);
        kbd.apply_and_persist(None, None).unwrap();
        assert_eq!(config_text(&kbd), line);
        assert_eq!(kbd.backlight().write_count(), 0);
    }

    #[test]
    fn hardware_failure_leaves_config_untouched() {
        let line = "options tuxedo_keyboard brightness=100 color=BLUE\n";
        let (_dir, kbd) = setup(Some(line), 100);
        kbd.backlight().fail_writes.set(true);
        let err = kbd.apply_and_persist(Some(Color::Red), None).unwrap_err();
        assert!(matches!(err, TuxlightError::Io(_)));
        assert_eq!(config_text(&kbd), line);
    }

    #[test]
    fn missing_color_option_is_config_error() {
        let (_dir, kbd) = setup(Some("brightness=5"), 5);
        let err = kbd
            .apply_and_persist(None, Some(Brightness::new(9).unwrap()))
            .unwrap_err();
        assert!(matches!(err, TuxlightError::Config(_)));
    }

    #[test]
    fn current_color_trims() {
        let (_dir, kbd) = setup(Some("color=YELLOW\n"), 0);
        assert_eq!(kbd.current_color().unwrap(), "YELLOW");
    }
}
