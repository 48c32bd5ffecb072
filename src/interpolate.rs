use crate::{
    color::{Color, Component, Components, Space},
    math::{interp_angle, lerp},
};

/// Chroma at or below which a CIE-Lab or CIE-Luv polar color has no
/// meaningful hue.
const ACHROMATIC_CHROMA: Component = 0.00015;

/// Saturation below which an HSV, HSL, HSLuv or HPLuv color has no
/// meaningful hue. sRGB grays come out of the HSLuv matrix with a
/// saturation around 1e-12.
const ACHROMATIC_SATURATION: Component = 1.0e-8;

/// Returns true if the saturation or chroma component of a polar `space`
/// marks the color as a gray.
fn is_achromatic(space: Space, chroma: Component) -> bool {
    match space {
        Space::Hcl | Space::Lch => chroma <= ACHROMATIC_CHROMA,
        _ => chroma < ACHROMATIC_SATURATION,
    }
}

/// Position of the hue within the components of a polar space.
fn hue_index(space: Space) -> Option<usize> {
    match space {
        Space::Hsv | Space::Hsl | Space::Hcl | Space::Hsluv | Space::Hpluv => Some(0),
        Space::Lch => Some(2),
        _ => None,
    }
}

fn to_array(Components(c0, c1, c2): Components) -> [Component; 3] {
    [c0, c1, c2]
}

impl Color {
    /// Linearly interpolate from this color to another in the color space
    /// specified using `t` as the progress between them.
    ///
    /// Hues take the shortest way around the circle. When exactly one of the
    /// two colors is a gray, it borrows the hue of the other one so the blend
    /// does not sweep through unrelated hues. Blends in HCL, LCh, HSLuv and
    /// HPLuv are clamped into [0, 1].
    pub fn blend(&self, other: &Color, t: Component, space: Space) -> Color {
        let mut left = to_array(self.components_in(space));
        let mut right = to_array(other.components_in(space));

        if let Some(hue) = hue_index(space) {
            // Saturation and chroma always sit in the middle.
            let left_gray = is_achromatic(space, left[1]);
            let right_gray = is_achromatic(space, right[1]);

            if left_gray && !right_gray {
                left[hue] = right[hue];
            } else if right_gray && !left_gray {
                right[hue] = left[hue];
            }
        }

        let mut mixed = [
            lerp(left[0], right[0], t),
            lerp(left[1], right[1], t),
            lerp(left[2], right[2], t),
        ];

        if let Some(hue) = hue_index(space) {
            mixed[hue] = interp_angle(left[hue], right[hue], t);
        }

        let color = Color::from_components_in(space, Components(mixed[0], mixed[1], mixed[2]));

        match space {
            Space::Hcl | Space::Lch | Space::Hsluv | Space::Hpluv => color.clamped(),
            _ => color,
        }
    }

    /// Blend in gamma encoded sRGB. Fast, but the midpoints look muddy.
    pub fn blend_rgb(&self, other: &Color, t: Component) -> Color {
        self.blend(other, t, Space::Srgb)
    }

    /// Blend in linear light sRGB.
    pub fn blend_linear_rgb(&self, other: &Color, t: Component) -> Color {
        self.blend(other, t, Space::SrgbLinear)
    }

    /// Blend in HSV.
    pub fn blend_hsv(&self, other: &Color, t: Component) -> Color {
        self.blend(other, t, Space::Hsv)
    }

    /// Blend in HSL.
    pub fn blend_hsl(&self, other: &Color, t: Component) -> Color {
        self.blend(other, t, Space::Hsl)
    }

    /// Blend in CIE-Lab.
    pub fn blend_lab(&self, other: &Color, t: Component) -> Color {
        self.blend(other, t, Space::Lab)
    }

    /// Blend in CIE-Luv.
    pub fn blend_luv(&self, other: &Color, t: Component) -> Color {
        self.blend(other, t, Space::Luv)
    }

    /// Blend in HCL. Usually the best looking gradients.
    pub fn blend_hcl(&self, other: &Color, t: Component) -> Color {
        self.blend(other, t, Space::Hcl)
    }

    /// Blend in LCh(uv).
    pub fn blend_lch(&self, other: &Color, t: Component) -> Color {
        self.blend(other, t, Space::Lch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_color_eq, assert_component_eq};

    #[test]
    fn basic() {
        let left = Color::new(0.1, 0.2, 0.3);
        let right = Color::new(0.5, 0.6, 0.7);
        let mixed = left.blend_rgb(&right, 0.5);
        assert_component_eq!(mixed.red, 0.3);
        assert_component_eq!(mixed.green, 0.4);
        assert_component_eq!(mixed.blue, 0.5);
    }

    #[test]
    fn linear_blend_is_lighter_than_gamma_blend() {
        let mixed_rgb = Color::BLACK.blend_rgb(&Color::WHITE, 0.5);
        let mixed_linear = Color::BLACK.blend_linear_rgb(&Color::WHITE, 0.5);
        assert_component_eq!(mixed_rgb.red, 0.5);
        assert!(mixed_linear.red > 0.7);
    }

    #[test]
    fn grays_borrow_the_other_hue() {
        let blue = Color::new(0.0, 0.0, 1.0);

        let mixed = Color::WHITE.blend_hsv(&blue, 0.5);
        assert_color_eq!(mixed, Color::new(0.5, 0.5, 1.0));
        assert_component_eq!(mixed.hsv().hue, 240.0);

        let mixed = blue.blend_hsl(&Color::BLACK, 0.5);
        assert_component_eq!(mixed.hsl().hue, 240.0);

        let blue_hue = blue.hcl().hue;
        let mixed = Color::new(0.5, 0.5, 0.5).blend_hcl(&blue, 0.5);
        assert_component_eq!(mixed.hcl().hue, blue_hue, epsilon = 1.0);
    }

    #[test]
    fn grays_and_white_keep_the_hue_of_the_other_color() {
        let grays = [
            Color::WHITE,
            Color::from_hex("#cccccc").unwrap(),
            Color::new(0.5, 0.5, 0.5),
            Color::from_hex("#333333").unwrap(),
            Color::BLACK,
        ];
        let colors = [
            Color::from_hex("#3366cc").unwrap(),
            Color::from_hex("#cc6633").unwrap(),
            Color::from_hex("#2e8b57").unwrap(),
        ];

        for space in Space::ALL.into_iter().filter(Space::is_polar) {
            let index = hue_index(space).unwrap();
            let hue = |color: &Color| to_array(color.components_in(space))[index];

            for color in colors {
                let expected = hue(&color);
                for gray in grays {
                    for mixed in [gray.blend(&color, 0.5, space), color.blend(&gray, 0.5, space)] {
                        let delta = ((hue(&mixed) - expected + 540.0) % 360.0 - 180.0).abs();
                        assert!(
                            delta < 1.0,
                            "{space}: {gray} with {color} gave {mixed}, hue off by {delta}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn white_to_red_in_lch_does_not_pass_through_magenta() {
        let red = Color::new(1.0, 0.0, 0.0);
        let red_hue = red.lch().hue;
        for t in [0.25, 0.5, 0.75] {
            let mixed = Color::WHITE.blend_lch(&red, t);
            assert_component_eq!(mixed.lch().hue, red_hue, epsilon = 1.0);
        }
    }

    #[test]
    fn hues_take_the_short_way() {
        // Hues 350 and 10 should meet at red, not at cyan.
        let left = Color::from_hsv(crate::models::Hsv::new(350.0, 1.0, 1.0));
        let right = Color::from_hsv(crate::models::Hsv::new(10.0, 1.0, 1.0));
        let mixed = left.blend_hsv(&right, 0.5);
        assert_color_eq!(mixed, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn polar_cie_blends_are_clamped() {
        let left = Color::new(0.0, 1.0, 0.0);
        let right = Color::new(1.0, 0.0, 1.0);
        for t in [0.25, 0.5, 0.75] {
            assert!(left.blend_hcl(&right, t).is_valid());
            assert!(left.blend_lch(&right, t).is_valid());
            assert!(left.blend(&right, t, Space::Hsluv).is_valid());
            assert!(left.blend(&right, t, Space::Hpluv).is_valid());
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn color() -> impl Strategy<Value = Color> {
            (0.0_f64..=1.0, 0.0_f64..=1.0, 0.0_f64..=1.0).prop_map(|(r, g, b)| Color::new(r, g, b))
        }

        proptest! {
            #[test]
            fn blended_hues_stay_in_range(a in color(), b in color(), t in 0.0_f64..=1.0) {
                for hue in [
                    a.blend_hsv(&b, t).hsv().hue,
                    a.blend_hsl(&b, t).hsl().hue,
                    a.blend_hcl(&b, t).hcl().hue,
                    a.blend_lch(&b, t).lch().hue,
                    a.blend(&b, t, Space::Hsluv).hsluv().hue,
                    a.blend(&b, t, Space::Hpluv).hpluv().hue,
                ] {
                    prop_assert!((0.0..360.0).contains(&hue), "hue {hue} out of range");
                }
            }

            #[test]
            fn endpoints_are_reproduced(a in color(), b in color()) {
                for space in Space::ALL {
                    for (t, expected) in [(0.0, a), (1.0, b)] {
                        let mixed = a.blend(&b, t, space);
                        prop_assert!(
                            (mixed.red - expected.red).abs() < 1.0e-5
                                && (mixed.green - expected.green).abs() < 1.0e-5
                                && (mixed.blue - expected.blue).abs() < 1.0e-5,
                            "{space} at {t}: expected {expected:?}, got {mixed:?}"
                        );
                    }
                }
            }
        }
    }
}
