//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform from a 3x3 matrix. The values are given column by
/// column, the way euclid multiplies row vectors.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

/// Return the rows of the 3x3 matrix as they are written in the usual
/// column vector notation, i.e. `rows[i]` holds the coefficients of the
/// `i`th output component.
pub fn rows(transform: &Transform) -> [[Component; 3]; 3] {
    let t = transform;
    [
        [t.m11, t.m21, t.m31],
        [t.m12, t.m22, t.m32],
        [t.m13, t.m23, t.m33],
    ]
}

/// Wrap a hue in degrees into [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Interpolate between two hues along the shortest arc.
pub fn interp_angle(a0: Component, a1: Component, t: Component) -> Component {
    let delta = ((a1 - a0).rem_euclid(360.0) + 540.0).rem_euclid(360.0) - 180.0;
    normalize_hue(a0 + t * delta)
}

pub fn sq(value: Component) -> Component {
    value * value
}
