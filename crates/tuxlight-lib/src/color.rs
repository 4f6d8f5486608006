//! Backlight color names accepted by the `color_string` attribute.
//!
//! The driver only knows eight fixed names. Input is case-insensitive;
//! output (sysfs writes, module options, display) is always upper-case.

use std::fmt;
use std::str::FromStr;

use crate::error::TuxlightError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Every color the driver accepts, in driver order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Color written to a repaired module config.
    pub const DEFAULT: Color = Color::White;

    /// Upper-case name as understood by the driver.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "BLACK",
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Yellow => "YELLOW",
            Color::Magenta => "MAGENTA",
            Color::Cyan => "CYAN",
            Color::White => "WHITE",
        }
    }

    /// Comma-separated list of supported names, for help and error text.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = TuxlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                TuxlightError::Color(format!(
                    "\"{trimmed}\" is not supported (supported colors: {})",
                    Self::supported_list()
                ))
            })
    }
}
