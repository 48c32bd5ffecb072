//! One record per color space. Records are plain data: conversions between
//! neighbouring spaces live on the records, conversions from and to a
//! [`Color`](crate::Color) live in the `convert` module.

pub mod hsl;
pub mod hsluv;
pub mod lab;
pub mod rgb;
pub mod xyz;

pub use hsl::{Hsl, Hsv};
pub use hsluv::Hsluv;
pub use lab::{Hcl, Lab, Lch, Luv};
pub use rgb::LinearRgb;
pub use xyz::{Uv, WhiteReference, Xyy, Xyz};
