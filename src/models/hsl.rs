//! Model a color with the HSV and HSL notations of the sRGB color space.

use serde::{Deserialize, Serialize};

use crate::{
    color::{Component, Components},
    math::normalize_hue,
};

tonal_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space.
    #[derive(Serialize, Deserialize)]
    pub struct Hsv {
        /// The hue in degrees, in [0, 360).
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The value component of the color.
        pub value: Component,
    }
}

tonal_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    #[derive(Serialize, Deserialize)]
    pub struct Hsl {
        /// The hue in degrees, in [0, 360).
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The lightness component of the color.
        pub lightness: Component,
    }
}

/// Calculate the hue from RGB components and return it along with the min
/// and max RGB values. Achromatic colors get a hue of 0.
fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta != 0.0 {
        60.0 * if max == red {
            (green - blue) / delta
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        }
    } else {
        0.0
    };

    (normalize_hue(hue), min, max)
}

impl Hsv {
    /// Convert from gamma encoded RGB components.
    pub fn from_rgb(from: &Components) -> Self {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        Hsv::new(hue, saturation, max)
    }

    /// Convert to gamma encoded RGB components.
    pub fn to_rgb(&self) -> Components {
        let hue = normalize_hue(self.hue);
        let (saturation, value) = (self.saturation, self.value);

        let f = |n: Component| {
            let k = (n + hue / 60.0).rem_euclid(6.0);
            value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
        };

        Components(f(5.0), f(3.0), f(1.0))
    }
}

impl Hsl {
    /// Convert from gamma encoded RGB components.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn from_rgb(from: &Components) -> Self {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        Hsl::new(hue, saturation, lightness)
    }

    /// Convert to gamma encoded RGB components.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn to_rgb(&self) -> Components {
        let (saturation, lightness) = (self.saturation, self.lightness);

        if saturation == 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(self.hue);

        let f = |n: Component| {
            let k = (n + hue / 30.0).rem_euclid(12.0);
            let a = saturation * lightness.min(1.0 - lightness);
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        Components(f(0.0), f(8.0), f(4.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn assert_components_eq(a: Components, b: Components) {
        assert_component_eq!(a.0, b.0, epsilon = 1.0e-12);
        assert_component_eq!(a.1, b.1, epsilon = 1.0e-12);
        assert_component_eq!(a.2, b.2, epsilon = 1.0e-12);
    }

    #[test]
    fn primaries() {
        let red = Components(1.0, 0.0, 0.0);
        let green = Components(0.0, 1.0, 0.0);
        let blue = Components(0.0, 0.0, 1.0);
        let magenta = Components(1.0, 0.0, 1.0);

        assert_eq!(Hsv::from_rgb(&red), Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(Hsv::from_rgb(&green), Hsv::new(120.0, 1.0, 1.0));
        assert_eq!(Hsv::from_rgb(&blue), Hsv::new(240.0, 1.0, 1.0));
        assert_eq!(Hsv::from_rgb(&magenta), Hsv::new(300.0, 1.0, 1.0));

        assert_eq!(Hsl::from_rgb(&red), Hsl::new(0.0, 1.0, 0.5));
        assert_eq!(Hsl::from_rgb(&blue), Hsl::new(240.0, 1.0, 0.5));

        assert_components_eq(Hsv::new(300.0, 1.0, 1.0).to_rgb(), magenta);
        assert_components_eq(Hsl::new(120.0, 1.0, 0.5).to_rgb(), green);
    }

    #[test]
    fn achromatic_colors_have_no_hue() {
        for v in [0.0, 0.5, 1.0] {
            let gray = Components(v, v, v);
            assert_eq!(Hsv::from_rgb(&gray), Hsv::new(0.0, 0.0, v));
            assert_eq!(Hsl::from_rgb(&gray), Hsl::new(0.0, 0.0, v));
        }
    }

    #[test]
    fn out_of_range_hues_wrap() {
        assert_components_eq(
            Hsv::new(-60.0, 1.0, 1.0).to_rgb(),
            Hsv::new(300.0, 1.0, 1.0).to_rgb(),
        );
        assert_components_eq(
            Hsl::new(480.0, 0.5, 0.4).to_rgb(),
            Hsl::new(120.0, 0.5, 0.4).to_rgb(),
        );
    }

    #[test]
    fn round_trip() {
        let rgb = Components(0.2, 0.7, 0.4);
        assert_components_eq(Hsv::from_rgb(&rgb).to_rgb(), rgb);
        assert_components_eq(Hsl::from_rgb(&rgb).to_rgb(), rgb);

        let rgb = Components(0.9, 0.85, 0.1);
        assert_components_eq(Hsv::from_rgb(&rgb).to_rgb(), rgb);
        assert_components_eq(Hsl::from_rgb(&rgb).to_rgb(), rgb);
    }
}
