//! Validated backlight brightness.

use std::fmt;
use std::str::FromStr;

use crate::error::TuxlightError;

/// Brightness in the range accepted on the command line, `0..=200`.
///
/// The driver does not document its own range check, so this type is the
/// only guard against out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 200;

    /// Brightness written to a repaired module config.
    pub const DEFAULT: Brightness = Brightness(60);

    pub fn new(value: u8) -> crate::error::Result<Self> {
        if value > Self::MAX {
            return Err(TuxlightError::Brightness(format!(
                "{value} is out of range (must be between {}-{})",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Brightness(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Brightness {
    type Err = TuxlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed.parse().map_err(|_| {
            TuxlightError::Brightness(format!("\"{trimmed}\" is not an integer"))
        })?;
        if !(Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            return Err(TuxlightError::Brightness(format!(
                "{value} is out of range (must be between {}-{})",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Brightness(value as u8))
    }
}
