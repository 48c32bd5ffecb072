//! Lightness ramps built from a single base color.
//!
//! Every shade keeps the HSLuv hue and saturation of the base color and only
//! varies the HSLuv lightness. How the lightness values are picked is
//! controlled by a [`Distribution`].

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    color::{Color, Component},
    error::{Error, Result},
    models::Hsluv,
};

/// Two lightness values closer than this are the same shade.
const SAME_LIGHTNESS: Component = 1.0e-12;

/// How the lightness values of a [`ShadeList`] are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    /// Evenly spaced over the lightness window, `[1/(N+1), N/(N+1)]` unless
    /// configured otherwise.
    Even,
    /// Like [`Distribution::Even`], but re-spaced so one shade has exactly
    /// the lightness of the base color.
    #[default]
    Enforced,
    /// Hand tuned tables, for 5 to 15 shades only.
    Predefined,
}

impl Distribution {
    /// Every distribution, in declaration order.
    pub const ALL: [Distribution; 3] = [
        Distribution::Even,
        Distribution::Enforced,
        Distribution::Predefined,
    ];

    /// The name used when parsing and printing the distribution.
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Even => "even",
            Distribution::Enforced => "enforced",
            Distribution::Predefined => "predefined",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Distribution::ALL
            .into_iter()
            .find(|d| d.name() == lower)
            .ok_or_else(|| format!("unknown shade distribution: {s}"))
    }
}

/// Configuration for building a [`ShadeList`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadeOptions {
    /// Number of shades to generate.
    pub count: i32,
    /// How the lightness values are spread.
    pub distribution: Distribution,
    /// Lowest lightness of the window, `1/(N+1)` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Component>,
    /// Highest lightness of the window, `N/(N+1)` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Component>,
}

impl ShadeOptions {
    /// The lightness window the shades are spread over.
    pub fn window(&self) -> (Component, Component) {
        let (min, max) = default_window(self.count);
        (self.min.unwrap_or(min), self.max.unwrap_or(max))
    }
}

impl Default for ShadeOptions {
    fn default() -> Self {
        Self {
            count: 10,
            distribution: Distribution::Enforced,
            min: None,
            max: None,
        }
    }
}

/// The window `[1/(N+1), N/(N+1)]`, which leaves out pure black and white.
pub fn default_window(count: i32) -> (Component, Component) {
    let n = Component::from(count.max(0));
    (1.0 / (n + 1.0), n / (n + 1.0))
}

/// `count` values evenly spaced over `[min, max]`, both ends included.
///
/// No values for a count of 0 or less, the midpoint for a count of 1.
pub fn spaced(min: Component, max: Component, count: i32) -> Vec<Component> {
    match count {
        i32::MIN..=0 => vec![],
        1 => vec![(min + max) / 2.0],
        _ => {
            let last = count - 1;
            let step = (max - min) / last as Component;
            (0..count)
                .map(|i| if i == last { max } else { min + i as Component * step })
                .collect()
        }
    }
}

/// `count` values spread over `[min, max]`, one of which is exactly
/// `target`.
///
/// Starts from [`spaced`] and, unless a value already hits `target`,
/// replaces the closest value with `target` and re-spaces both sides of it.
/// The window grows to include `target` if it lies outside.
pub fn enforced(min: Component, max: Component, count: i32, target: Component) -> Vec<Component> {
    if count <= 1 {
        return spaced(min, max, count);
    }

    let candidates = spaced(min, max, count);

    let Some(closest) = closest_index(&candidates, target) else {
        return candidates;
    };

    if (candidates[closest] - target).abs() < SAME_LIGHTNESS {
        return candidates;
    }

    // Both halves include the target, the upper one drops it again below.
    let below = closest as i32 + 1;
    let above = count - closest as i32;

    let mut result = half(min, target, below, target);
    result.extend(half(target, max, above, target).into_iter().skip(1));
    result
}

/// One side of an [`enforced`] split, a single value is the target itself.
fn half(min: Component, max: Component, count: i32, target: Component) -> Vec<Component> {
    if count == 1 {
        vec![target]
    } else {
        enforced(min, max, count, target)
    }
}

fn closest_index(values: &[Component], target: Component) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()))
        .map(|(i, _)| i)
}

/// Lightness tables for [`Distribution::Predefined`], darkest first.
#[rustfmt::skip]
const PREDEFINED: [&[Component]; 11] = [
    &[0.15, 0.3, 0.5, 0.7, 0.85],
    &[0.12, 0.25, 0.4, 0.6, 0.75, 0.88],
    &[0.1, 0.2, 0.35, 0.5, 0.65, 0.8, 0.9],
    &[0.08, 0.18, 0.3, 0.43, 0.57, 0.7, 0.82, 0.92],
    &[0.07, 0.15, 0.25, 0.37, 0.5, 0.63, 0.75, 0.85, 0.93],
    &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95],
    &[0.05, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95],
    &[0.04, 0.08, 0.15, 0.25, 0.35, 0.45, 0.55, 0.65, 0.75, 0.85, 0.92, 0.96],
    &[0.03, 0.07, 0.12, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.88, 0.93, 0.97],
    &[0.03, 0.06, 0.1, 0.16, 0.24, 0.33, 0.43, 0.57, 0.67, 0.76, 0.84, 0.9, 0.94, 0.97],
    &[0.02, 0.05, 0.09, 0.14, 0.2, 0.28, 0.38, 0.5, 0.62, 0.72, 0.8, 0.86, 0.91, 0.95, 0.98],
];

const PREDEFINED_COUNTS: RangeInclusive<i32> = 5..=15;

fn predefined(count: i32) -> Result<Vec<Component>> {
    if !PREDEFINED_COUNTS.contains(&count) {
        log::debug!("no predefined shade table for {count} shades");
        return Err(Error::UnsupportedShadeCount(count));
    }

    Ok(PREDEFINED[(count - PREDEFINED_COUNTS.start()) as usize].to_vec())
}

/// A single entry of a [`ShadeList`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shade {
    /// The color of the shade.
    pub color: Color,
    /// HSLuv lightness in [0, 1].
    pub lightness: Component,
    /// `1 - lightness`, how dark the shade is.
    pub shade: Component,
    /// `shade` scaled to [0, 1000] and rounded, a stable name for the shade
    /// such as 500 for the middle one.
    pub weight: u32,
}

impl Shade {
    fn new(color: Color, lightness: Component) -> Self {
        let shade = 1.0 - lightness;
        Self {
            color,
            lightness,
            shade,
            weight: (shade * 1000.0).round() as u32,
        }
    }
}

/// Shades of one base color, sorted from darkest to lightest.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShadeList {
    base: Color,
    shades: Vec<Shade>,
}

impl ShadeList {
    /// Build `count` shades of `base` over the [`default_window`].
    ///
    /// Only [`Distribution::Predefined`] can fail here, for counts that have
    /// no table.
    pub fn new(base: Color, count: i32, distribution: Distribution) -> Result<Self> {
        Self::with_window(base, count, distribution, default_window(count))
    }

    /// Build `count` shades of `base` with lightnesses in `window`.
    ///
    /// For two or more shades the window must satisfy `0 <= min < max <= 1`,
    /// otherwise [`Error::InvalidWindow`] is returned. Predefined tables do
    /// not use it.
    pub fn with_window(
        base: Color,
        count: i32,
        distribution: Distribution,
        window: (Component, Component),
    ) -> Result<Self> {
        let (min, max) = window;
        let spread = count > 1 && distribution != Distribution::Predefined;
        if spread && !(min >= 0.0 && min < max && max <= 1.0) {
            log::debug!("rejecting lightness window [{min}, {max}] for {count} shades");
            return Err(Error::InvalidWindow(min, max));
        }

        let base_hsluv = base.hsluv();

        let lightnesses = match distribution {
            Distribution::Even => spaced(min, max, count),
            Distribution::Enforced => enforced(min, max, count, base_hsluv.lightness),
            Distribution::Predefined => predefined(count)?,
        };

        log::trace!(
            "{count} {distribution} shades of {base} (lightness {}): {lightnesses:?}",
            base_hsluv.lightness
        );

        let shades = lightnesses
            .into_iter()
            .map(|lightness| {
                let color = if (lightness - base_hsluv.lightness).abs() < SAME_LIGHTNESS {
                    base
                } else {
                    Color::from_hsluv(Hsluv::new(
                        base_hsluv.hue,
                        base_hsluv.saturation,
                        lightness,
                    ))
                };
                Shade::new(color, lightness)
            })
            .collect();

        Ok(Self { base, shades })
    }

    /// Build shades of `base` as configured by `options`.
    pub fn with_options(base: Color, options: &ShadeOptions) -> Result<Self> {
        Self::with_window(base, options.count, options.distribution, options.window())
    }

    /// The counts [`Distribution::Predefined`] supports.
    pub fn predefined_counts() -> RangeInclusive<i32> {
        PREDEFINED_COUNTS
    }

    /// The color the shades were built from.
    pub fn base(&self) -> Color {
        self.base
    }

    /// All shades, darkest first.
    pub fn shades(&self) -> &[Shade] {
        &self.shades
    }

    /// Number of shades.
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Returns true if there are no shades.
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    /// Iterate over the shades, darkest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Shade> {
        self.shades.iter()
    }

    /// The shade with the lightness closest to the base color.
    pub fn closest_to_base(&self) -> Option<&Shade> {
        let lightness = self.base.hsluv().lightness;
        self.shades
            .iter()
            .min_by(|a, b| {
                (a.lightness - lightness)
                    .abs()
                    .total_cmp(&(b.lightness - lightness).abs())
            })
    }
}

impl<'a> IntoIterator for &'a ShadeList {
    type Item = &'a Shade;
    type IntoIter = std::slice::Iter<'a, Shade>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A [`ShadeList`] with a name, the unit the export formats work on.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamedShadeList {
    /// Display name of the list, e.g. "primary".
    pub name: String,
    /// The shades.
    pub list: ShadeList,
}

impl NamedShadeList {
    /// Pair `list` with `name`.
    pub fn new(name: impl Into<String>, list: ShadeList) -> Self {
        Self {
            name: name.into(),
            list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn assert_values_eq(actual: &[Component], expected: &[Component]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert_component_eq!(*a, *e, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn spaced_includes_both_ends() {
        assert!(spaced(0.1, 0.9, 0).is_empty());
        assert!(spaced(0.1, 0.9, -3).is_empty());
        assert_values_eq(&spaced(0.1, 0.9, 1), &[0.5]);
        assert_values_eq(&spaced(0.1, 0.9, 2), &[0.1, 0.9]);
        assert_values_eq(&spaced(0.1, 0.9, 5), &[0.1, 0.3, 0.5, 0.7, 0.9]);
        assert_eq!(spaced(0.1, 0.3, 7).last(), Some(&0.3));
    }

    #[test]
    fn enforced_keeps_matching_candidates() {
        assert_values_eq(&enforced(0.1, 0.9, 5, 0.5), &[0.1, 0.3, 0.5, 0.7, 0.9]);
    }

    #[test]
    fn enforced_splits_around_the_target() {
        // Closest candidate is 0.3 at index 1: two values over [0.1, 0.35],
        // four over [0.35, 0.9].
        let values = enforced(0.1, 0.9, 5, 0.35);
        assert_values_eq(&values, &[0.1, 0.35, 0.35 + 0.55 / 3.0, 0.35 + 1.1 / 3.0, 0.9]);
        assert_eq!(values[1], 0.35);
    }

    #[test]
    fn enforced_target_outside_the_window() {
        let values = enforced(0.1, 0.9, 3, 0.02);
        assert_values_eq(&values, &[0.02, 0.46, 0.9]);

        let values = enforced(0.1, 0.9, 3, 0.99);
        assert_values_eq(&values, &[0.1, 0.545, 0.99]);
    }

    #[test]
    fn enforced_degenerate_counts() {
        assert!(enforced(0.1, 0.9, 0, 0.3).is_empty());
        assert_values_eq(&enforced(0.1, 0.9, 1, 0.3), &[0.5]);
    }

    #[test]
    fn degenerate_lists() {
        let base = Color::from_hex("#3366cc").unwrap();

        for distribution in [Distribution::Even, Distribution::Enforced] {
            let list = ShadeList::new(base, 0, distribution).unwrap();
            assert!(list.is_empty());

            let list = ShadeList::new(base, 1, distribution).unwrap();
            assert_eq!(list.len(), 1);
            assert_component_eq!(list.shades()[0].lightness, 0.5, epsilon = 1.0e-12);
            assert_eq!(list.shades()[0].weight, 500);
        }
    }

    #[test]
    fn even_weights() {
        let base = Color::from_hex("#3366cc").unwrap();
        let list = ShadeList::new(base, 9, Distribution::Even).unwrap();
        let weights: Vec<u32> = list.iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![900, 800, 700, 600, 500, 400, 300, 200, 100]);
    }

    #[test]
    fn shades_keep_hue_and_saturation() {
        let base = Color::from_hex("#3366cc").unwrap();
        let base_hsluv = base.hsluv();
        let list = ShadeList::new(base, 9, Distribution::Even).unwrap();

        for shade in &list {
            let hsluv = shade.color.hsluv();
            assert_component_eq!(hsluv.hue, base_hsluv.hue, epsilon = 1.0e-3);
            assert_component_eq!(hsluv.saturation, base_hsluv.saturation, epsilon = 1.0e-3);
            assert_component_eq!(hsluv.lightness, shade.lightness, epsilon = 1.0e-5);
            assert_component_eq!(shade.shade, 1.0 - shade.lightness);
        }
    }

    #[test]
    fn enforced_list_contains_the_base() {
        let base = Color::from_hex("#3366cc").unwrap();
        let list = ShadeList::with_options(base, &ShadeOptions::default()).unwrap();
        assert_eq!(list.len(), 10);
        assert_eq!(list.base(), base);

        let closest = list.closest_to_base().unwrap();
        assert_eq!(closest.color, base);
        assert_eq!(closest.color.hex(), "#3366CC");
    }

    #[test]
    fn predefined_tables() {
        let base = Color::from_hex("#3366cc").unwrap();
        let list = ShadeList::new(base, 10, Distribution::Predefined).unwrap();
        let weights: Vec<u32> = list.iter().map(|s| s.weight).collect();
        assert_eq!(
            weights,
            vec![900, 800, 700, 600, 500, 400, 300, 200, 100, 50]
        );

        for count in ShadeList::predefined_counts() {
            let list = ShadeList::new(base, count, Distribution::Predefined).unwrap();
            assert_eq!(list.len(), count as usize);
            assert!(list
                .shades()
                .windows(2)
                .all(|w| w[0].lightness < w[1].lightness));
        }

        for count in [-1, 0, 4, 16, 100] {
            assert_eq!(
                ShadeList::new(base, count, Distribution::Predefined),
                Err(Error::UnsupportedShadeCount(count))
            );
        }
    }

    #[test]
    fn distributions_parse_by_name() {
        for d in Distribution::ALL {
            assert_eq!(d.name().parse::<Distribution>(), Ok(d));
        }
        assert_eq!("Even".parse::<Distribution>(), Ok(Distribution::Even));
        assert!("random".parse::<Distribution>().is_err());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ShadeOptions = serde_json::from_str(r#"{"count": 7}"#).unwrap();
        assert_eq!(
            options,
            ShadeOptions {
                count: 7,
                ..ShadeOptions::default()
            }
        );
        assert_values_eq(&[options.window().0, options.window().1], &[0.125, 0.875]);

        let options: ShadeOptions =
            serde_json::from_str(r#"{"distribution": "predefined"}"#).unwrap();
        assert_eq!(options.count, 10);
        assert_eq!(options.distribution, Distribution::Predefined);
    }

    #[test]
    fn custom_window() {
        let base = Color::from_hex("#3366cc").unwrap();
        let lightness = base.hsluv().lightness;

        let options: ShadeOptions =
            serde_json::from_str(r#"{"count": 5, "distribution": "even", "min": 0.2, "max": 0.6}"#)
                .unwrap();
        assert_eq!(options.window(), (0.2, 0.6));
        let list = ShadeList::with_options(base, &options).unwrap();
        let lightnesses: Vec<Component> = list.iter().map(|s| s.lightness).collect();
        assert_values_eq(&lightnesses, &[0.2, 0.3, 0.4, 0.5, 0.6]);

        // Only one end given, the other keeps its default.
        let options = ShadeOptions {
            count: 4,
            distribution: Distribution::Enforced,
            min: Some(0.05),
            max: None,
        };
        assert_eq!(options.window(), (0.05, 0.8));
        let list = ShadeList::with_options(base, &options).unwrap();
        assert_eq!(list.len(), 4);
        assert_component_eq!(list.shades()[0].lightness, 0.05, epsilon = 1.0e-12);
        assert_eq!(
            list.iter()
                .filter(|s| (s.lightness - lightness).abs() < 1.0e-9)
                .count(),
            1
        );
    }

    #[test]
    fn invalid_windows_are_rejected() {
        let base = Color::from_hex("#3366cc").unwrap();
        for window in [(0.6, 0.4), (0.5, 0.5), (-0.1, 0.5), (0.2, 1.5), (Component::NAN, 0.5)] {
            let result = ShadeList::with_window(base, 5, Distribution::Even, window);
            assert!(
                matches!(result, Err(Error::InvalidWindow(..))),
                "accepted {window:?}"
            );
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
            fn enforced_lists_hit_the_base_lightness(base in color(), count in 2_i32..=24) {
                let list = ShadeList::new(base, count, Distribution::Enforced).unwrap();
                let lightness = base.hsluv().lightness;

                prop_assert_eq!(list.len(), count as usize);

                let hits = list
                    .iter()
                    .filter(|s| (s.lightness - lightness).abs() < 1.0e-9)
                    .count();
                prop_assert_eq!(hits, 1);

                prop_assert!(
                    list.shades().windows(2).all(|w| w[0].lightness < w[1].lightness),
                    "not ascending: {:?}",
                    list.iter().map(|s| s.lightness).collect::<Vec<_>>()
                );
            }

            #[test]
            fn even_lists_are_ascending(base in color(), count in 0_i32..=24) {
                let list = ShadeList::new(base, count, Distribution::Even).unwrap();
                prop_assert_eq!(list.len(), count.max(0) as usize);
                prop_assert!(list.shades().windows(2).all(|w| w[0].lightness < w[1].lightness));
                prop_assert!(list.iter().all(|s| s.color.is_valid()));
            }
        }
    }
}
