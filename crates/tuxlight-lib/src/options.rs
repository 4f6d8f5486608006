//! Module option tokenizer for modprobe configuration files.
//!
//! A config file is split on whitespace and every `key=value` token is
//! collected. The first assignment of a key wins; later duplicates are
//! ignored. Other tokens (`options`, the module name, comments) are skipped.

use std::collections::HashMap;

use crate::brightness::Brightness;
use crate::color::Color;

pub const KEY_BRIGHTNESS: &str = "brightness";
pub const KEY_COLOR: &str = "color";

/// Collect `key=value` assignments from whitespace-separated tokens.
///
/// Tokens with an empty key or an empty value are not assignments.
pub fn parse_assignments(content: &str) -> HashMap<&str, &str> {
    let mut map = HashMap::new();
    for token in content.split_whitespace() {
        if let Some((key, value)) = token.split_once('=')
            && !key.is_empty()
            && !value.is_empty()
        {
            map.entry(key).or_insert(value);
        }
    }
    map
}

/// The two persisted option values, kept as raw tokens.
///
/// Values read from an existing file are not re-validated; they are written
/// back as found (color upper-cased).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsRecord {
    pub brightness: String,
    pub color: String,
}

/// Which options were absent when a record was read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Missing {
    pub brightness: bool,
    pub color: bool,
}

impl Missing {
    pub fn any(self) -> bool {
        self.brightness || self.color
    }
}

impl OptionsRecord {
    pub fn new(brightness: impl ToString, color: impl ToString) -> Self {
        OptionsRecord {
            brightness: brightness.to_string(),
            color: color.to_string().to_uppercase(),
        }
    }

    /// Read a record from file content, substituting defaults for absent keys.
    pub fn from_content(content: &str) -> (Self, Missing) {
        let map = parse_assignments(content);
        let brightness = map.get(KEY_BRIGHTNESS).copied();
        let color = map.get(KEY_COLOR).copied();
        let missing = Missing {
            brightness: brightness.is_none(),
            color: color.is_none(),
        };
        let record = OptionsRecord::new(
            brightness.map_or_else(|| Brightness::DEFAULT.to_string(), str::to_string),
            color.unwrap_or(Color::DEFAULT.name()),
        );
        (record, missing)
    }

    /// Canonical single-line form: `options <module> brightness=<b> color=<C>\n`.
    pub fn render(&self, module: &str) -> String {
        format!(
            "options {module} {KEY_BRIGHTNESS}={} {KEY_COLOR}={}\n",
            self.brightness, self.color
        )
    }
}
