//! HSLuv and HPLuv, CIE-LCh(uv) with the chroma rescaled by the sRGB gamut.
//!
//! HSLuv divides the chroma by the largest chroma available at the same
//! lightness and hue, so every saturation in [0, 1] is displayable. HPLuv
//! divides by the largest chroma available at that lightness for every
//! hue, which keeps saturation perceptually uniform across hues at the cost
//! of saturations above 1 for vivid colors.

use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    gamut::{max_chroma_for_lh, max_safe_chroma_for_l},
    models::lab::Lch,
};

tonal_macros::gen_model! {
    /// A color in HSLuv or HPLuv. Saturation and lightness are fractions.
    #[derive(Serialize, Deserialize)]
    pub struct Hsluv {
        /// The hue in degrees, in [0, 360).
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The lightness component of the color.
        pub lightness: Component,
    }
}

/// Lightness (0 to 100) at which there is no room for chroma left.
#[allow(clippy::manual_range_contains)]
fn is_degenerate(lightness: Component) -> bool {
    lightness > 99.999_999_9 || lightness < 1.0e-8
}

fn lch_to_saturation(lch: &Lch, max_chroma: impl Fn(Component, Component) -> Component) -> Hsluv {
    let lightness = lch.lightness * 100.0;
    let chroma = lch.chroma * 100.0;

    let saturation = if is_degenerate(lightness) {
        0.0
    } else {
        chroma / max_chroma(lightness, lch.hue) * 100.0
    };

    Hsluv::new(lch.hue, saturation / 100.0, lightness / 100.0)
}

fn saturation_to_lch(
    hsluv: &Hsluv,
    max_chroma: impl Fn(Component, Component) -> Component,
) -> Lch {
    let lightness = hsluv.lightness * 100.0;
    let saturation = hsluv.saturation * 100.0;

    let chroma = if is_degenerate(lightness) {
        0.0
    } else {
        max_chroma(lightness, hsluv.hue) / 100.0 * saturation
    };

    Lch::new(lightness / 100.0, chroma / 100.0, hsluv.hue)
}

impl Lch {
    /// Convert to HSLuv. Saturation and lightness are clamped to [0, 1].
    pub fn to_hsluv(&self) -> Hsluv {
        let hsluv = lch_to_saturation(self, max_chroma_for_lh);
        Hsluv::new(
            hsluv.hue,
            hsluv.saturation.clamp(0.0, 1.0),
            hsluv.lightness.clamp(0.0, 1.0),
        )
    }

    /// Convert to HPLuv. Saturation goes above 1 for colors outside the
    /// chroma that every hue can reach.
    pub fn to_hpluv(&self) -> Hsluv {
        lch_to_saturation(self, |lightness, _| max_safe_chroma_for_l(lightness))
    }
}

impl Hsluv {
    /// Interpret this record as HSLuv and convert to CIE-LCh(uv).
    pub fn to_lch(&self) -> Lch {
        saturation_to_lch(self, max_chroma_for_lh)
    }

    /// Interpret this record as HPLuv and convert to CIE-LCh(uv).
    pub fn hpluv_to_lch(&self) -> Lch {
        saturation_to_lch(self, |lightness, _| max_safe_chroma_for_l(lightness))
    }
}
