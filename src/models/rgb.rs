//! Linear light RGB and the sRGB transfer functions.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::xyz::{WhiteReference, Xyz},
};

tonal_macros::gen_model! {
    /// A color with sRGB primaries and no gamma encoding.
    #[derive(serde::Serialize, serde::Deserialize)]
    pub struct LinearRgb {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Decode a gamma encoded sRGB component to linear light.
pub fn linearize(value: Component) -> Component {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear light component with the sRGB gamma.
pub fn delinearize(value: Component) -> Component {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

/// Evaluate `c[0] + c[1]·t + c[2]·t² + …`.
fn polynomial(coefficients: &[Component], t: Component) -> Component {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// A polynomial approximation of [`linearize`].
///
/// Only valid for inputs in [0, 1], where it stays within 1e-3 of the exact
/// curve.
#[allow(clippy::excessive_precision)]
pub fn linearize_fast(value: Component) -> Component {
    const C: [Component; 6] = [
        0.2140061352794986,
        0.9258616900137437,
        1.1698482137477535,
        0.27280101017226066,
        -0.0979222640783051,
        0.08700830326166001,
    ];

    polynomial(&C, value - 0.5)
}

/// A piecewise polynomial approximation of [`delinearize`].
///
/// Only valid for inputs in [0, 1], where it stays within 2.5e-3 of the
/// exact curve. The error is largest close to black, where the root is
/// steepest.
#[allow(clippy::excessive_precision)]
pub fn delinearize_fast(value: Component) -> Component {
    const HIGH: [Component; 6] = [
        0.7976729875116572,
        0.5925383709425809,
        -0.279878412906503,
        0.23440163651174595,
        -0.40525106280544915,
        0.5503226352403743,
    ];
    const MID: [Component; 6] = [
        0.37335525020371074,
        1.5544071357490525,
        -3.745126018872153,
        15.641372938293715,
        -169.68706038446007,
        1250.005489273816,
    ];
    const LOW: [Component; 6] = [
        0.12838364442038136,
        5.034613576456462,
        -96.48835067142096,
        4848.642372786261,
        -253253.75562092158,
        5106782.439448078,
    ];

    if value > 0.2 {
        polynomial(&HIGH, value - 0.6)
    } else if value > 0.03 {
        polynomial(&MID, value - 0.115)
    } else {
        polynomial(&LOW, value - 0.015)
    }
}

/// Linear sRGB to CIE-XYZ, derived from the sRGB primaries so that white
/// lands exactly on [`WhiteReference::D65`].
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_TO_XYZ: Transform = transform_3x3(
    0.4124564390896921,  0.21267285140562248, 0.019333895582329317,
    0.357576077643909,   0.715152155287818,   0.119192025881303,
    0.18043748326639894, 0.07217499330655958, 0.9503040785363677,
);

/// CIE-XYZ to linear sRGB, the inverse of [`LINEAR_TO_XYZ`].
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_LINEAR: Transform = transform_3x3(
     3.2404541621141054, -0.9692660305051868,  0.05564343095911469,
    -1.5371385127977166,  1.8760108454466942, -0.20402591351675387,
    -0.4985314095560162,  0.04155601753034984, 1.0572251882231791,
);

/// Linear sRGB to CIE-XYZ as published with HSLuv. White lands on
/// [`WhiteReference::HSLUV_D65`].
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const HSLUV_LINEAR_TO_XYZ: Transform = transform_3x3(
    0.41239079926595948,  0.21263900587151036, 0.019330818715591851,
    0.35758433938387796,  0.71516867876775593, 0.11919477979462599,
    0.18048078840183429,  0.072192315360733715, 0.95053215224966058,
);

/// CIE-XYZ to linear sRGB as published with HSLuv. The gamut boundaries of
/// HSLuv and HPLuv are derived from its rows.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const HSLUV_XYZ_TO_LINEAR: Transform = transform_3x3(
     3.2409699419045214, -0.96924363628087983,  0.055630079696993609,
    -1.5373831775700935,  1.8759675015077207,  -0.20397695888897657,
    -0.49861076029300328, 0.041555057407175613, 1.0569715142428786,
);

impl LinearRgb {
    /// Convert to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        transform(&LINEAR_TO_XYZ, self.to_components()).into()
    }

    /// Convert to CIE-XYZ with the HSLuv matrix.
    pub fn to_xyz_hsluv(&self) -> Xyz {
        transform(&HSLUV_LINEAR_TO_XYZ, self.to_components()).into()
    }
}

impl Xyz {
    /// Convert to linear light sRGB. The result is not clamped.
    pub fn to_linear_rgb(&self) -> LinearRgb {
        transform(&XYZ_TO_LINEAR, self.to_components()).into()
    }

    /// Convert to linear light sRGB with the HSLuv matrix. The result is not
    /// clamped.
    pub fn to_linear_rgb_hsluv(&self) -> LinearRgb {
        transform(&HSLUV_XYZ_TO_LINEAR, self.to_components()).into()
    }
}
