//! Color difference metrics.
//!
//! The Lab based formulas are published for lightness on the 0 to 100 scale.
//! The free functions here take [`Lab`] records on that scale, so published
//! reference data can be checked directly. The methods on [`Color`] scale
//! their unit Lab values up by 100 and the result down by 100, so a distance
//! of 0.01 is roughly one just noticeable difference.

use crate::{
    color::{Color, Component},
    math::sq,
    models::Lab,
};

/// 25⁷, used by the chroma compensation of CIEDE2000.
const POW25_7: Component = 6_103_515_625.0;

/// Parametric weighting factors of CIEDE2000.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    /// kL, the lightness weight.
    pub lightness: Component,
    /// kC, the chroma weight.
    pub chroma: Component,
    /// kH, the hue weight.
    pub hue: Component,
}

impl Weights {
    /// The reference conditions, all weights 1.
    pub const GRAPHIC_ARTS: Weights = Weights {
        lightness: 1.0,
        chroma: 1.0,
        hue: 1.0,
    };
}

impl Default for Weights {
    fn default() -> Self {
        Self::GRAPHIC_ARTS
    }
}

/// Application constants of CIE94.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cie94Weights {
    /// kL, the lightness weight.
    pub lightness: Component,
    /// K1, scales the chroma weighting function.
    pub k1: Component,
    /// K2, scales the hue weighting function.
    pub k2: Component,
}

impl Cie94Weights {
    /// Constants for graphic arts, the default.
    pub const GRAPHIC_ARTS: Cie94Weights = Cie94Weights {
        lightness: 1.0,
        k1: 0.045,
        k2: 0.015,
    };

    /// Constants for textiles.
    pub const TEXTILES: Cie94Weights = Cie94Weights {
        lightness: 2.0,
        k1: 0.048,
        k2: 0.014,
    };
}

impl Default for Cie94Weights {
    fn default() -> Self {
        Self::GRAPHIC_ARTS
    }
}

/// Hue angle in degrees in [0, 360), 0 when both components are 0.
fn hue_angle(a: Component, b: Component) -> Component {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        b.atan2(a).to_degrees().rem_euclid(360.0)
    }
}

/// CIE76: the Euclidean distance in Lab.
pub fn delta_e_76(lab1: &Lab, lab2: &Lab) -> Component {
    (sq(lab1.lightness - lab2.lightness) + sq(lab1.a - lab2.a) + sq(lab1.b - lab2.b)).sqrt()
}

/// CIE94. The weighting functions use the chroma of `reference` only, so the
/// result is not symmetric.
pub fn delta_e_94(reference: &Lab, sample: &Lab, weights: Cie94Weights) -> Component {
    let delta_l = reference.lightness - sample.lightness;
    let c1 = reference.a.hypot(reference.b);
    let c2 = sample.a.hypot(sample.b);
    let delta_c = c1 - c2;
    let delta_h2 =
        (sq(reference.a - sample.a) + sq(reference.b - sample.b) - sq(delta_c)).max(0.0);

    let sc = 1.0 + weights.k1 * c1;
    let sh = 1.0 + weights.k2 * c1;

    (sq(delta_l / weights.lightness) + sq(delta_c / sc) + delta_h2 / sq(sh)).sqrt()
}

/// CIEDE2000.
pub fn delta_e_2000(lab1: &Lab, lab2: &Lab, weights: Weights) -> Component {
    let (l1, a1, b1) = (lab1.lightness, lab1.a, lab1.b);
    let (l2, a2, b2) = (lab2.lightness, lab2.a, lab2.b);

    let c_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt());

    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);
    let c1_prime = a1_prime.hypot(b1);
    let c2_prime = a2_prime.hypot(b2);
    let h1_prime = hue_angle(a1_prime, b1);
    let h2_prime = hue_angle(a2_prime, b2);

    let chroma_product = c1_prime * c2_prime;

    let delta_l = l2 - l1;
    let delta_c = c2_prime - c1_prime;
    let delta_h_angle = if chroma_product == 0.0 {
        0.0
    } else {
        let delta = h2_prime - h1_prime;
        if delta > 180.0 {
            delta - 360.0
        } else if delta < -180.0 {
            delta + 360.0
        } else {
            delta
        }
    };
    let delta_h = 2.0 * chroma_product.sqrt() * (delta_h_angle / 2.0).to_radians().sin();

    let l_mean = (l1 + l2) / 2.0;
    let c_prime_mean = (c1_prime + c2_prime) / 2.0;

    // One gray endpoint has no hue, the mean is then the other hue.
    let h_mean = if chroma_product == 0.0 {
        h1_prime + h2_prime
    } else if (h1_prime - h2_prime).abs() <= 180.0 {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < 360.0 {
        (h1_prime + h2_prime + 360.0) / 2.0
    } else {
        (h1_prime + h2_prime - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-sq((h_mean - 275.0) / 25.0)).exp();
    let c_prime_mean7 = c_prime_mean.powi(7);
    let rc = 2.0 * (c_prime_mean7 / (c_prime_mean7 + POW25_7)).sqrt();
    let rt = -(2.0 * delta_theta).to_radians().sin() * rc;

    let l_offset = sq(l_mean - 50.0);
    let sl = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let sc = 1.0 + 0.045 * c_prime_mean;
    let sh = 1.0 + 0.015 * c_prime_mean * t;

    let term_l = delta_l / (weights.lightness * sl);
    let term_c = delta_c / (weights.chroma * sc);
    let term_h = delta_h / (weights.hue * sh);

    (sq(term_l) + sq(term_c) + sq(term_h) + rt * term_c * term_h).sqrt()
}

/// Lab of a color on the 0 to 100 scale.
fn lab100(color: &Color) -> Lab {
    let lab = color.lab();
    Lab::new(lab.lightness * 100.0, lab.a * 100.0, lab.b * 100.0)
}

impl Color {
    /// Euclidean distance in gamma encoded sRGB. Cheap, but a poor match for
    /// how different the colors look.
    pub fn distance_rgb(&self, other: &Color) -> Component {
        (sq(self.red - other.red) + sq(self.green - other.green) + sq(self.blue - other.blue))
            .sqrt()
    }

    /// Euclidean distance in linear light sRGB. Also a poor perceptual match.
    pub fn distance_linear_rgb(&self, other: &Color) -> Component {
        let (a, b) = (self.linear_rgb(), other.linear_rgb());
        (sq(a.red - b.red) + sq(a.green - b.green) + sq(a.blue - b.blue)).sqrt()
    }

    /// The "redmean" weighted sRGB distance by Thiadmer Riemersma. A cheap
    /// improvement over [`Color::distance_rgb`].
    pub fn distance_riemersma(&self, other: &Color) -> Component {
        let red_mean = (self.red + other.red) / 2.0;
        let delta_r = self.red - other.red;
        let delta_g = self.green - other.green;
        let delta_b = self.blue - other.blue;

        ((2.0 + red_mean) * sq(delta_r) + 4.0 * sq(delta_g) + (3.0 - red_mean) * sq(delta_b))
            .sqrt()
    }

    /// CIE76, the Euclidean distance in CIE-Lab.
    pub fn distance_lab(&self, other: &Color) -> Component {
        delta_e_76(&self.lab(), &other.lab())
    }

    /// Euclidean distance in CIE-Luv.
    pub fn distance_luv(&self, other: &Color) -> Component {
        let (a, b) = (self.luv(), other.luv());
        (sq(a.lightness - b.lightness) + sq(a.u - b.u) + sq(a.v - b.v)).sqrt()
    }

    /// CIE94 with the graphic arts constants. `self` is the reference color.
    pub fn distance_cie94(&self, other: &Color) -> Component {
        self.distance_cie94_with(other, Cie94Weights::GRAPHIC_ARTS)
    }

    /// CIE94 with explicit constants, e.g. [`Cie94Weights::TEXTILES`].
    pub fn distance_cie94_with(&self, other: &Color, weights: Cie94Weights) -> Component {
        delta_e_94(&lab100(self), &lab100(other), weights) * 0.01
    }

    /// CIEDE2000, the most accurate of the metrics.
    pub fn distance_ciede2000(&self, other: &Color) -> Component {
        self.distance_ciede2000_klch(other, 1.0, 1.0, 1.0)
    }

    /// CIEDE2000 with explicit lightness, chroma and hue weights.
    pub fn distance_ciede2000_klch(
        &self,
        other: &Color,
        kl: Component,
        kc: Component,
        kh: Component,
    ) -> Component {
        let weights = Weights {
            lightness: kl,
            chroma: kc,
            hue: kh,
        };
        delta_e_2000(&lab100(self), &lab100(other), weights) * 0.01
    }
}
