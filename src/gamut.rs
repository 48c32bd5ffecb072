//! Gamut checks for sRGB and the boundary solver behind HSLuv and HPLuv.
//!
//! For a fixed CIE-Luv lightness, the sRGB gamut projected onto the (u, v)
//! plane is bounded by six lines, one for each of the R, G and B channels
//! hitting 0 or 1. Chroma limits are intersections with those lines.

use crate::{
    color::{Color, Component},
    math::rows,
    models::rgb::HSLUV_XYZ_TO_LINEAR,
};

/// κ of the CIE lightness curve, 24389/27.
#[allow(clippy::excessive_precision)]
const KAPPA: Component = 903.2962962962963;

/// ε of the CIE lightness curve, 216/24389.
#[allow(clippy::excessive_precision)]
const EPSILON: Component = 0.0088564516790356308;

#[allow(clippy::manual_range_contains)]
fn in_zero_to_one(value: Component) -> bool {
    value >= 0.0 && value <= 1.0
}

impl Color {
    /// Returns true if all components are inside [0, 1].
    pub fn is_valid(&self) -> bool {
        in_zero_to_one(self.red) && in_zero_to_one(self.green) && in_zero_to_one(self.blue)
    }

    /// Return a color with each of the components clamped to [0, 1].
    /// NOTE: This is a lossy operation.
    pub fn clamped(&self) -> Color {
        Color::new(
            self.red.clamp(0.0, 1.0),
            self.green.clamp(0.0, 1.0),
            self.blue.clamp(0.0, 1.0),
        )
    }
}

/// A line `v = slope·u + intercept` in the chroma plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// The slope of the line.
    pub slope: Component,
    /// Where the line crosses the v axis.
    pub intercept: Component,
}

/// The six lines bounding the sRGB gamut at `lightness`, on the 0 to 100
/// scale.
pub fn bounds(lightness: Component) -> [Line; 6] {
    let sub1 = (lightness + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON {
        sub1
    } else {
        lightness / KAPPA
    };

    let mut lines = [Line {
        slope: 0.0,
        intercept: 0.0,
    }; 6];

    for (i, m) in rows(&HSLUV_XYZ_TO_LINEAR).iter().enumerate() {
        for k in 0..2 {
            let k = k as Component;

            let top1 = (284_517.0 * m[0] - 94_839.0 * m[2]) * sub2;
            let top2 = (838_422.0 * m[2] + 769_860.0 * m[1] + 731_718.0 * m[0])
                * lightness
                * sub2
                - 769_860.0 * k * lightness;
            let bottom = (632_260.0 * m[2] - 126_452.0 * m[1]) * sub2 + 126_452.0 * k;

            lines[i * 2 + k as usize] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }

    lines
}

/// The largest chroma (0 to 100 scale) that stays inside sRGB for the given
/// lightness (0 to 100) and hue (degrees).
pub fn max_chroma_for_lh(lightness: Component, hue: Component) -> Component {
    if lightness <= 0.0 || lightness >= 100.0 {
        return 0.0;
    }

    let (sin, cos) = hue.to_radians().sin_cos();

    bounds(lightness)
        .iter()
        .map(|line| line.intercept / (sin - line.slope * cos))
        .filter(|length| *length > 0.0)
        .reduce(Component::min)
        .unwrap_or(0.0)
}

/// The largest chroma (0 to 100 scale) that stays inside sRGB for every hue
/// at the given lightness (0 to 100).
pub fn max_safe_chroma_for_l(lightness: Component) -> Component {
    if lightness <= 0.0 || lightness >= 100.0 {
        return 0.0;
    }

    bounds(lightness)
        .iter()
        .map(|line| {
            // Foot of the perpendicular from the origin.
            let x = line.intercept / (-1.0 / line.slope - line.slope);
            x.hypot(line.intercept + x * line.slope)
        })
        .reduce(Component::min)
        .unwrap_or(0.0)
}
