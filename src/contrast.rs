//! WCAG 2.1 relative luminance and contrast ratio.

use crate::color::{Color, Component};

impl Color {
    /// The relative luminance of the color, 0 for black and 1 for white.
    ///
    ///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    #[must_use]
    pub fn relative_luminance(&self) -> Component {
        let linear = self.linear_rgb();
        0.2126f64.mul_add(
            linear.red,
            0.7152f64.mul_add(linear.green, 0.0722 * linear.blue),
        )
    }

    /// The contrast ratio against `other`, see [`contrast_ratio`].
    #[must_use]
    pub fn contrast_ratio(&self, other: &Color) -> Component {
        contrast_ratio(self, other)
    }
}

/// The WCAG contrast ratio between two colors, rounded to one decimal.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: &Color, b: &Color) -> Component {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    let ratio = (lighter + 0.05) / (darker + 0.05);
    (ratio * 10.0).round() / 10.0
}
