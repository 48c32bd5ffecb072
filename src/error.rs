//! Error types for tonal.

use thiserror::Error;

/// Errors produced by the few fallible operations of the crate.
///
/// Conversions between color spaces never fail, only parsing input,
/// validating shade options and building theme maps can.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A hex color string did not have 3 or 6 hex digits after an optional
    /// leading `#`.
    #[error("invalid hex color {0:?}: expected #RGB or #RRGGBB")]
    InvalidHex(String),

    /// The predefined shade distribution has no table for this many shades.
    #[error("no predefined shade table for {0} shades, supported counts are 5 to 15")]
    UnsupportedShadeCount(i32),

    /// A shade lightness window was not inside [0, 1] or was empty.
    #[error("invalid lightness window [{0}, {1}]: expected 0 <= min < max <= 1")]
    InvalidWindow(f64, f64),

    /// Two shade lists in one theme have the same name.
    #[error("more than one shade list named {0:?}")]
    DuplicateName(String),

    /// Two shades of one list round to the same weight.
    #[error("shade list {name:?} has more than one shade with weight {weight}")]
    DuplicateWeight {
        /// Name of the list.
        name: String,
        /// The repeated weight.
        weight: u32,
    },

    /// Shade lists could not be serialized into a theme fragment.
    #[error("could not serialize theme: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Result type used throughout tonal.
pub type Result<T> = std::result::Result<T, Error>;
