//! A [`Color`] is a gamma encoded sRGB triple. Every other color space is
//! reached through conversions on it, see [`Space`] for the full list.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The color spaces and notations a [`Color`] can be converted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Space {
    /// Gamma encoded sRGB, the space a [`Color`] is stored in.
    Srgb = 0,
    /// sRGB primaries without the gamma encoding.
    SrgbLinear = 1,
    /// Hue, saturation, value.
    Hsv = 2,
    /// Hue, saturation, lightness.
    Hsl = 3,
    /// CIE-XYZ.
    Xyz = 4,
    /// CIE-xyY.
    Xyy = 5,
    /// CIE-L\*a\*b\*.
    Lab = 6,
    /// CIE-L\*u\*v\*.
    Luv = 7,
    /// The polar form of CIE-L\*a\*b\*, in hue, chroma, lightness order.
    Hcl = 8,
    /// The polar form of CIE-L\*u\*v\*, in lightness, chroma, hue order.
    Lch = 9,
    /// HSLuv.
    Hsluv = 10,
    /// HPLuv.
    Hpluv = 11,
}

impl Space {
    /// Every space, in declaration order.
    pub const ALL: [Space; 12] = [
        Space::Srgb,
        Space::SrgbLinear,
        Space::Hsv,
        Space::Hsl,
        Space::Xyz,
        Space::Xyy,
        Space::Lab,
        Space::Luv,
        Space::Hcl,
        Space::Lch,
        Space::Hsluv,
        Space::Hpluv,
    ];

    /// The name used when parsing and printing the space.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Srgb => "srgb",
            Space::SrgbLinear => "srgb-linear",
            Space::Hsv => "hsv",
            Space::Hsl => "hsl",
            Space::Xyz => "xyz",
            Space::Xyy => "xyy",
            Space::Lab => "lab",
            Space::Luv => "luv",
            Space::Hcl => "hcl",
            Space::Lch => "lch",
            Space::Hsluv => "hsluv",
            Space::Hpluv => "hpluv",
        }
    }

    /// Returns true for the cylindrical spaces that carry a hue component.
    pub fn is_polar(&self) -> bool {
        matches!(
            self,
            Space::Hsv | Space::Hsl | Space::Hcl | Space::Lch | Space::Hsluv | Space::Hpluv
        )
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Space::ALL
            .into_iter()
            .find(|space| space.name() == lower)
            .ok_or_else(|| format!("unknown color space: {s}"))
    }
}

tonal_macros::gen_model! {
    /// A color stored as gamma encoded sRGB.
    ///
    /// Components are nominally in [0, 1], but nothing enforces it; blends
    /// and conversions from other spaces can land outside. Use
    /// [`Color::is_valid`] and [`Color::clamped`] when a displayable color
    /// is required.
    pub struct Color {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Allowed summed channel difference for [`Color::almost_equal_rgb`].
const ALMOST_EQUAL_DELTA: Component = 3.0 / 255.0;

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create a color from 8-bit channels.
    pub fn from_rgb255(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            Component::from(red) / 255.0,
            Component::from(green) / 255.0,
            Component::from(blue) / 255.0,
        )
    }

    /// Parse `#RGB` or `#RRGGBB`, case-insensitive, with the `#` optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            log::debug!("rejecting hex color {hex:?}: non-hex characters");
            return Err(Error::InvalidHex(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>, max: Component| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| Component::from(v) / max)
                .map_err(|_| Error::InvalidHex(hex.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::new(
                channel(0..2, 255.0)?,
                channel(2..4, 255.0)?,
                channel(4..6, 255.0)?,
            )),
            3 => Ok(Self::new(
                channel(0..1, 15.0)?,
                channel(1..2, 15.0)?,
                channel(2..3, 15.0)?,
            )),
            len => {
                log::debug!("rejecting hex color {hex:?}: {len} digits");
                Err(Error::InvalidHex(hex.to_string()))
            }
        }
    }

    /// Format as `#RRGGBB` with uppercase digits. Components are clamped
    /// first.
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb255();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Return the 8-bit channels, rounded to the nearest value.
    pub fn rgb255(&self) -> (u8, u8, u8) {
        let quantize = |v: Component| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.red), quantize(self.green), quantize(self.blue))
    }

    /// Return 16-bit channels plus a fully opaque alpha, all widened to
    /// `u32`.
    pub fn rgba(&self) -> (u32, u32, u32, u32) {
        let quantize = |v: Component| (v.clamp(0.0, 1.0) * 65535.0).round() as u32;
        (
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
            0xFFFF,
        )
    }

    /// Returns true if the two colors are equal up to a summed channel
    /// difference of 3/255.
    pub fn almost_equal_rgb(&self, other: &Color) -> bool {
        (self.red - other.red).abs()
            + (self.green - other.green).abs()
            + (self.blue - other.blue).abs()
            < ALMOST_EQUAL_DELTA
    }

    /// Lexicographic total order over (red, green, blue). Only useful for
    /// deterministic sorting, it has no perceptual meaning.
    pub fn total_cmp(&self, other: &Color) -> Ordering {
        self.red
            .total_cmp(&other.red)
            .then_with(|| self.green.total_cmp(&other.green))
            .then_with(|| self.blue.total_cmp(&other.blue))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
