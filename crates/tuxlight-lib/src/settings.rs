//! Tool settings: file locations and module name, TOML-based.
//!
//! Every field has a default matching the stock `tuxedo_keyboard` driver, so
//! the settings file is optional. Tests build a [`Settings`] pointing at a
//! temporary directory instead of `/sys` and `/etc`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Kernel module whose options are persisted. Default: "tuxedo_keyboard".
    #[serde(default = "default_module")]
    pub module: String,

    /// Module configuration file read at boot.
    #[serde(default = "default_config_file")]
    pub config_file: PathBuf,

    /// sysfs attribute holding the live brightness (read/write).
    #[serde(default = "default_brightness_file")]
    pub brightness_file: PathBuf,

    /// sysfs attribute accepting a color name (write-only in practice).
    #[serde(default = "default_color_file")]
    pub color_file: PathBuf,
}

fn default_module() -> String {
    "tuxedo_keyboard".into()
}
fn default_config_file() -> PathBuf {
    PathBuf::from("/etc/modprobe.d/tuxedo_keyboard.conf")
}
fn default_brightness_file() -> PathBuf {
    PathBuf::from("/sys/devices/platform/tuxedo_keyboard/uw_kbd_bl_color/brightness")
}
fn default_color_file() -> PathBuf {
    PathBuf::from("/sys/devices/platform/tuxedo_keyboard/uw_kbd_bl_color/color_string")
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            module: default_module(),
            config_file: default_config_file(),
            brightness_file: default_brightness_file(),
            color_file: default_color_file(),
        }
    }
}

impl Settings {
    /// Settings rooted in `dir`, with the driver-style file names. Used by tests.
    pub fn in_dir(dir: &Path) -> Self {
        Settings {
            module: default_module(),
            config_file: dir.join("tuxedo_keyboard.conf"),
            brightness_file: dir.join("brightness"),
            color_file: dir.join("color_string"),
        }
    }

    /// Platform-specific settings directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tuxlight"))
    }

    /// Full path to the settings file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("settings.toml"))
    }

    /// Load settings from an arbitrary path, returning the settings and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(settings) => (settings, vec![]),
                Err(e) => {
                    let warning = format!("{e} ({}), using defaults", path.display());
                    (Self::default(), vec![warning])
                }
            },
            Err(_) => (Self::default(), vec![]),
        }
    }

    /// Load settings from the default path, logging parse warnings.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        let (settings, warnings) = Self::load_from(&path);
        for w in &warnings {
            log::warn!("{w}");
        }
        settings
    }

    /// Parse settings from TOML text.
    pub fn parse(contents: &str) -> crate::error::Result<Self> {
        toml::from_str(contents)
            .map_err(|e| crate::TuxlightError::Settings(format!("parse error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_tuxedo_driver() {
        let s = Settings::default();
        assert_eq!(s.module, "tuxedo_keyboard");
        assert_eq!(
            s.config_file,
            PathBuf::from("/etc/modprobe.d/tuxedo_keyboard.conf")
        );
        assert!(s.brightness_file.ends_with("uw_kbd_bl_color/brightness"));
        assert!(s.color_file.ends_with("uw_kbd_bl_color/color_string"));
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let s = Settings::parse("config_file = \"/tmp/kbd.conf\"\n").unwrap();
        assert_eq!(s.config_file, PathBuf::from("/tmp/kbd.conf"));
        assert_eq!(s.module, "tuxedo_keyboard");
        assert_eq!(s.brightness_file, Settings::default().brightness_file);
    }

    #[test]
    fn wrong_type_is_error() {
        let err = Settings::parse("module = 5\n").unwrap_err();
        assert!(err.to_string().starts_with("Settings error"), "got: {err}");
    }

    #[test]
    fn load_from_missing_file_gives_defaults_without_warning() {
        let dir = tempfile::tempdir().unwrap();
        let (s, warnings) = Settings::load_from(&dir.path().join("nope.toml"));
        assert_eq!(s, Settings::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn load_from_malformed_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "this is [[ not toml").unwrap();
        let (s, warnings) = Settings::load_from(&path);
        assert_eq!(s, Settings::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("using defaults"));
    }

    #[test]
    fn load_from_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "module = \"clevo_keyboard\"\n").unwrap();
        let (s, warnings) = Settings::load_from(&path);
        assert!(warnings.is_empty());
        assert_eq!(s.module, "clevo_keyboard");
    }

    #[test]
    fn in_dir_keeps_files_inside_dir() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::in_dir(dir.path());
        for p in [&s.config_file, &s.brightness_file, &s.color_file] {
            assert!(p.starts_with(dir.path()));
        }
    }

    #[test]
    fn settings_path_ends_with_toml() {
        if let Some(p) = Settings::path() {
            assert!(p.to_string_lossy().ends_with("settings.toml"));
        }
    }
}
