//! Model a color in the CIE-XYZ and CIE-xyY color spaces.

use serde::{Deserialize, Serialize};

use crate::color::{Component, Components};

/// The tristimulus values of "white" under some illuminant. Conversions to
/// Lab, Luv and their polar forms are relative to one of these.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhiteReference {
    /// The X tristimulus value.
    pub x: Component,
    /// The Y tristimulus value.
    pub y: Component,
    /// The Z tristimulus value.
    pub z: Component,
}

impl WhiteReference {
    /// Noon daylight, the white point of sRGB and the default everywhere.
    pub const D65: WhiteReference = WhiteReference::new(0.95047, 1.0, 1.08883);

    /// Horizon light, common in print workflows.
    pub const D50: WhiteReference = WhiteReference::new(0.96422, 1.0, 0.82521);

    /// D65 as derived from the sRGB matrices. HSLuv and HPLuv are defined
    /// against this value.
    #[allow(clippy::excessive_precision)]
    pub const HSLUV_D65: WhiteReference = WhiteReference::new(0.95045592705, 1.0, 1.08905775076);

    /// Create a white reference from its tristimulus values.
    pub const fn new(x: Component, y: Component, z: Component) -> Self {
        Self { x, y, z }
    }

    /// The white reference as CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        Xyz::new(self.x, self.y, self.z)
    }

    /// The chromaticity coordinates (x, y) of the white.
    pub fn chromaticity(&self) -> (Component, Component) {
        let sum = self.x + self.y + self.z;
        (self.x / sum, self.y / sum)
    }
}

impl Default for WhiteReference {
    fn default() -> Self {
        Self::D65
    }
}

tonal_macros::gen_model! {
    /// A color in the CIE-XYZ color space.
    #[derive(Serialize, Deserialize)]
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color, the luminance.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

tonal_macros::gen_model! {
    /// A color in the CIE-xyY color space: chromaticity plus luminance.
    #[derive(Serialize, Deserialize)]
    pub struct Xyy {
        /// The x chromaticity coordinate.
        pub x: Component,
        /// The y chromaticity coordinate.
        pub y: Component,
        /// The luminance, identical to Y of CIE-XYZ.
        pub luminance: Component,
    }
}

tonal_macros::gen_model! {
    /// The CIE 1976 u′ v′ chromaticity coordinates, with an unused third
    /// slot so it fits the three component models.
    #[derive(Serialize, Deserialize)]
    pub struct Uv {
        /// The u′ coordinate.
        pub u: Component,
        /// The v′ coordinate.
        pub v: Component,
        /// Always zero.
        pub unused: Component,
    }
}

const BLACK_EPSILON: Component = 1.0e-14;

impl Xyz {
    /// Convert to CIE-xyY. Black has no chromaticity, so it takes the
    /// chromaticity of `white` instead.
    pub fn to_xyy(&self, white: &WhiteReference) -> Xyy {
        let sum = self.x + self.y + self.z;

        if sum.abs() < BLACK_EPSILON {
            let (x, y) = white.chromaticity();
            Xyy::new(x, y, self.y)
        } else {
            Xyy::new(self.x / sum, self.y / sum, self.y)
        }
    }

    /// The u′ v′ chromaticity of this color, zero when X + 15Y + 3Z is
    /// zero.
    pub fn uv(&self) -> Uv {
        let denominator = self.x + 15.0 * self.y + 3.0 * self.z;
        if denominator == 0.0 {
            Uv::new(0.0, 0.0, 0.0)
        } else {
            Uv::new(
                4.0 * self.x / denominator,
                9.0 * self.y / denominator,
                0.0,
            )
        }
    }
}

impl Xyy {
    /// Convert to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        if self.y.abs() < BLACK_EPSILON {
            Xyz::new(0.0, self.luminance, 0.0)
        } else {
            let Components(x, y, luminance) = self.to_components();
            Xyz::new(
                luminance / y * x,
                luminance,
                luminance / y * (1.0 - x - y),
            )
        }
    }
}
