//! tonal converts colors between sRGB and the CIE and HSLuv families of color
//! spaces, measures perceptual differences and builds lightness ramps
//! ("shades") from a single base color.
//!
//! ```rust
//! use tonal::{Color, shades::{Distribution, ShadeList}};
//!
//! let base = Color::from_hex("#3366cc").unwrap();
//! let shades = ShadeList::new(base, 10, Distribution::Enforced).unwrap();
//! assert!(shades.iter().any(|shade| shade.color == base));
//! ```

#![deny(missing_docs)]

mod color;
mod contrast;
mod convert;
pub mod distance;
mod error;
pub mod export;
pub mod gamut;
mod interpolate;
mod math;
pub mod models;
pub mod shades;
#[cfg(test)]
mod test;

pub use color::{Color, Component, Components, Space};
pub use contrast::contrast_ratio;
pub use error::{Error, Result};
pub use models::{Hcl, Hsl, Hsluv, Hsv, Lab, Lch, LinearRgb, Luv, Uv, WhiteReference, Xyy, Xyz};
