//! Failures of `tonal-shades` and the status each one exits with.
//!
//! | Status | Cause |
//! |---|---|
//! | 0 | done |
//! | 2 | bad arguments, reported by clap |
//! | 10 | rejected colors or shade settings: hex, count, window, duplicate names |
//! | 11 | the PNG or stdout could not be written |
//! | 13 | the theme JSON could not be produced |

use std::fmt;

/// Why a subcommand gave up.
#[derive(Debug)]
pub enum CliError {
    /// The library rejected an input color or shade configuration.
    Color(tonal::Error),
    /// Writing output failed.
    Io(String),
    /// A theme could not be serialized.
    Serialization(String),
}

impl CliError {
    /// Status for `process::exit`, see the module table.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<tonal::Error> for CliError {
    fn from(e: tonal::Error) -> Self {
        match e {
            tonal::Error::Serialization(msg) => CliError::Serialization(msg),
            other => CliError::Color(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<image::ImageError> for CliError {
    fn from(e: image::ImageError) -> Self {
        CliError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_exit_code_is_10() {
        let err = CliError::Color(tonal::Error::InvalidHex("#zz".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_library_serialization_routes_to_serialization() {
        let cli_err = CliError::from(tonal::Error::Serialization("bad map".into()));
        assert_eq!(cli_err.exit_code(), 13);
        assert!(cli_err.to_string().contains("bad map"));
    }

    #[test]
    fn from_library_input_error_routes_to_color() {
        let cli_err = CliError::from(tonal::Error::UnsupportedShadeCount(42));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("42"));
    }

    #[test]
    fn rejected_settings_route_to_color() {
        for err in [
            tonal::Error::InvalidWindow(0.9, 0.1),
            tonal::Error::DuplicateName("primary".into()),
        ] {
            assert_eq!(CliError::from(err).exit_code(), 10);
        }
    }

    #[test]
    fn from_io_error_routes_to_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let cli_err = CliError::from(io_err);
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }
}
