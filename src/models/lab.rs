//! Models for the CIE-Lab and CIE-Luv spaces, in rectangular and polar form.
//!
//! Lightness is kept on the unit scale (white is 1.0) and the opponent
//! components are roughly in [-1, 1]. Multiply by 100 for the textbook
//! values.

use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    math::{normalize_hue, sq},
    models::xyz::{WhiteReference, Xyz},
};

tonal_macros::gen_model! {
    /// A color in the CIE-Lab color space.
    #[derive(Serialize, Deserialize)]
    pub struct Lab {
        /// The lightness component.
        pub lightness: Component,
        /// The green-red component.
        pub a: Component,
        /// The blue-yellow component.
        pub b: Component,
    }
}

tonal_macros::gen_model! {
    /// A color in the CIE-Luv color space.
    #[derive(Serialize, Deserialize)]
    pub struct Luv {
        /// The lightness component.
        pub lightness: Component,
        /// The u component.
        pub u: Component,
        /// The v component.
        pub v: Component,
    }
}

tonal_macros::gen_model! {
    /// The polar form of CIE-Lab, in hue, chroma, lightness order.
    #[derive(Serialize, Deserialize)]
    pub struct Hcl {
        /// The hue in degrees, in [0, 360).
        pub hue: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The lightness component.
        pub lightness: Component,
    }
}

tonal_macros::gen_model! {
    /// The polar form of CIE-Luv, in lightness, chroma, hue order.
    #[derive(Serialize, Deserialize)]
    pub struct Lch {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue in degrees, in [0, 360).
        pub hue: Component,
    }
}

/// Below this magnitude on both axes a color is treated as achromatic and
/// gets a hue of 0.
const ACHROMATIC_EPSILON: Component = 1.0e-4;

/// (6/29)³
const EPSILON: Component = 216.0 / 24389.0;

/// Return (chroma, hue) for the rectangular pair.
fn to_polar(first: Component, second: Component) -> (Component, Component) {
    let chroma = (sq(first) + sq(second)).sqrt();
    let hue = if first.abs() < ACHROMATIC_EPSILON && second.abs() < ACHROMATIC_EPSILON {
        0.0
    } else {
        normalize_hue(second.atan2(first).to_degrees())
    };
    (chroma, hue)
}

/// Return the rectangular pair for (chroma, hue).
fn to_rectangular(chroma: Component, hue: Component) -> (Component, Component) {
    let (sin, cos) = hue.to_radians().sin_cos();
    (chroma * cos, chroma * sin)
}

fn lab_f(t: Component) -> Component {
    if t > EPSILON {
        t.cbrt()
    } else {
        t / 3.0 * sq(29.0 / 6.0) + 4.0 / 29.0
    }
}

fn lab_finv(t: Component) -> Component {
    if t > 6.0 / 29.0 {
        t * t * t
    } else {
        3.0 * sq(6.0 / 29.0) * (t - 4.0 / 29.0)
    }
}

impl Xyz {
    /// Convert to CIE-Lab relative to `white`.
    pub fn to_lab(&self, white: &WhiteReference) -> Lab {
        let fy = lab_f(self.y / white.y);
        let lightness = 1.16 * fy - 0.16;
        let a = 5.0 * (lab_f(self.x / white.x) - fy);
        let b = 2.0 * (fy - lab_f(self.z / white.z));
        Lab::new(lightness, a, b)
    }

    /// Convert to CIE-Luv relative to `white`.
    pub fn to_luv(&self, white: &WhiteReference) -> Luv {
        let y = self.y / white.y;
        let lightness = if y <= EPSILON {
            y * (29.0 / 3.0_f64).powi(3) / 100.0
        } else {
            1.16 * y.cbrt() - 0.16
        };

        let uv = self.uv();
        let white_uv = white.to_xyz().uv();
        Luv::new(
            lightness,
            13.0 * lightness * (uv.u - white_uv.u),
            13.0 * lightness * (uv.v - white_uv.v),
        )
    }
}

impl Lab {
    /// Convert to CIE-XYZ relative to `white`.
    pub fn to_xyz(&self, white: &WhiteReference) -> Xyz {
        let l = (self.lightness + 0.16) / 1.16;
        Xyz::new(
            white.x * lab_finv(l + self.a / 5.0),
            white.y * lab_finv(l),
            white.z * lab_finv(l - self.b / 2.0),
        )
    }

    /// Convert to the polar form.
    pub fn to_hcl(&self) -> Hcl {
        let (chroma, hue) = to_polar(self.a, self.b);
        Hcl::new(hue, chroma, self.lightness)
    }
}

impl Hcl {
    /// Convert to the rectangular form.
    pub fn to_lab(&self) -> Lab {
        let (a, b) = to_rectangular(self.chroma, self.hue);
        Lab::new(self.lightness, a, b)
    }
}

impl Luv {
    /// Convert to CIE-XYZ relative to `white`. Zero lightness is black.
    pub fn to_xyz(&self, white: &WhiteReference) -> Xyz {
        if self.lightness == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }

        let y = if self.lightness <= 0.08 {
            white.y * self.lightness * 100.0 * (3.0 / 29.0_f64).powi(3)
        } else {
            white.y * ((self.lightness + 0.16) / 1.16).powi(3)
        };

        let white_uv = white.to_xyz().uv();
        let u = self.u / (13.0 * self.lightness) + white_uv.u;
        let v = self.v / (13.0 * self.lightness) + white_uv.v;

        Xyz::new(
            y * 9.0 * u / (4.0 * v),
            y,
            y * (12.0 - 3.0 * u - 20.0 * v) / (4.0 * v),
        )
    }

    /// Convert to the polar form.
    pub fn to_lch(&self) -> Lch {
        let (chroma, hue) = to_polar(self.u, self.v);
        Lch::new(self.lightness, chroma, hue)
    }
}

impl Lch {
    /// Convert to the rectangular form.
    pub fn to_luv(&self) -> Luv {
        let (u, v) = to_rectangular(self.chroma, self.hue);
        Luv::new(self.lightness, u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn white_is_unit_lightness() {
        let lab = WhiteReference::D65.to_xyz().to_lab(&WhiteReference::D65);
        assert_component_eq!(lab.lightness, 1.0, epsilon = 1.0e-12);
        assert_component_eq!(lab.a, 0.0, epsilon = 1.0e-12);
        assert_component_eq!(lab.b, 0.0, epsilon = 1.0e-12);

        let luv = WhiteReference::D50.to_xyz().to_luv(&WhiteReference::D50);
        assert_component_eq!(luv.lightness, 1.0, epsilon = 1.0e-12);
        assert_component_eq!(luv.u, 0.0, epsilon = 1.0e-12);
        assert_component_eq!(luv.v, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn black_luv_is_black_xyz() {
        let luv = Xyz::new(0.0, 0.0, 0.0).to_luv(&WhiteReference::D65);
        assert_eq!(luv, Luv::new(0.0, 0.0, 0.0));
        assert_eq!(luv.to_xyz(&WhiteReference::D65), Xyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn lab_round_trip_through_both_branches() {
        for xyz in [
            Xyz::new(0.4, 0.3, 0.2),
            Xyz::new(0.001, 0.002, 0.003),
            Xyz::new(0.9, 0.05, 0.7),
        ] {
            let back = xyz.to_lab(&WhiteReference::D50).to_xyz(&WhiteReference::D50);
            assert_component_eq!(back.x, xyz.x, epsilon = 1.0e-12);
            assert_component_eq!(back.y, xyz.y, epsilon = 1.0e-12);
            assert_component_eq!(back.z, xyz.z, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn luv_round_trip_through_both_branches() {
        for xyz in [Xyz::new(0.4, 0.3, 0.2), Xyz::new(0.001, 0.002, 0.003)] {
            let back = xyz.to_luv(&WhiteReference::D65).to_xyz(&WhiteReference::D65);
            assert_component_eq!(back.x, xyz.x, epsilon = 1.0e-12);
            assert_component_eq!(back.y, xyz.y, epsilon = 1.0e-12);
            assert_component_eq!(back.z, xyz.z, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn polar_hue_is_normalized() {
        let hcl = Lab::new(0.5, 0.0, -0.3).to_hcl();
        assert_component_eq!(hcl.hue, 270.0, epsilon = 1.0e-12);
        assert_component_eq!(hcl.chroma, 0.3, epsilon = 1.0e-12);

        let lab = hcl.to_lab();
        assert_component_eq!(lab.a, 0.0, epsilon = 1.0e-12);
        assert_component_eq!(lab.b, -0.3, epsilon = 1.0e-12);

        let lch = Luv::new(0.5, -0.2, -0.2).to_lch();
        assert_component_eq!(lch.hue, 225.0, epsilon = 1.0e-12);
    }

    #[test]
    fn achromatic_hue_is_zero() {
        assert_eq!(Lab::new(0.5, 5.0e-5, -5.0e-5).to_hcl().hue, 0.0);
        assert_eq!(Luv::new(0.5, 0.0, 0.0).to_lch().hue, 0.0);
    }
}
