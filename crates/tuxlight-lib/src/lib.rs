//! tuxlight — keyboard backlight color and brightness for `tuxedo_keyboard` laptops.

pub mod backlight;
pub mod brightness;
pub mod color;
pub mod error;
pub mod keyboard;
pub mod modprobe;
pub mod options;
pub mod settings;

pub use error::TuxlightError;
