//! Unified error type for the tuxlight-lib crate.
//!
//! [`TuxlightError`] separates user input problems (`Color`, `Brightness`),
//! privilege problems (`Permission`), unreadable persisted state (`Config`,
//! `Settings`) and plain file-system failures (`Io`). A `From<io::Error>`
//! impl lets `?` propagate sysfs and config-file errors directly.

use std::fmt;

/// Unified error type for tuxlight-lib operations.
#[derive(Debug)]
pub enum TuxlightError {
    /// File I/O error (sysfs attribute or module config file).
    Io(std::io::Error),
    /// Unsupported color name.
    Color(String),
    /// Brightness is not an integer or out of range.
    Brightness(String),
    /// Persisted module options could not be interpreted.
    Config(String),
    /// Tool settings file could not be interpreted.
    Settings(String),
    /// Operation requires elevated privileges.
    Permission(String),
}

impl fmt::Display for TuxlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuxlightError::Io(e) => write!(f, "I/O error: {e}"),
            TuxlightError::Color(e) => write!(f, "Color error: {e}"),
            TuxlightError::Brightness(e) => write!(f, "Brightness error: {e}"),
            TuxlightError::Config(e) => write!(f, "Config error: {e}"),
            TuxlightError::Settings(e) => write!(f, "Settings error: {e}"),
            TuxlightError::Permission(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TuxlightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuxlightError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TuxlightError {
    fn from(e: std::io::Error) -> Self {
        TuxlightError::Io(e)
    }
}

/// Crate-level Result alias using [`TuxlightError`].
pub type Result<T> = std::result::Result<T, TuxlightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: TuxlightError = io_err.into();
        assert!(matches!(e, TuxlightError::Io(_)));
    }

    #[test]
    fn display_color_error() {
        let e = TuxlightError::Color("PINK".into());
        assert_eq!(e.to_string(), "Color error: PINK");
    }

    #[test]
    fn display_brightness_error() {
        let e = TuxlightError::Brightness("out of range".into());
        assert_eq!(e.to_string(), "Brightness error: out of range");
    }

    #[test]
    fn display_config_error() {
        let e = TuxlightError::Config("no color".into());
        assert_eq!(e.to_string(), "Config error: no color");
    }

    #[test]
    fn display_permission_error_is_bare() {
        let e = TuxlightError::Permission("needs root".into());
        assert_eq!(e.to_string(), "needs root");
    }

    #[test]
    fn source_chains_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = TuxlightError::Io(io_err);
        let source = std::error::Error::source(&e).unwrap();
        assert!(source.to_string().contains("denied"));
    }

    #[test]
    fn source_none_for_string_variants() {
        let e = TuxlightError::Settings("test".into());
        assert!(std::error::Error::source(&e).is_none());
    }

    #[test]
    fn question_mark_propagation_io() {
        fn inner() -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "nope"))
        }
        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }
        let err = outer().unwrap_err();
        assert!(matches!(err, TuxlightError::Io(_)));
    }
}
