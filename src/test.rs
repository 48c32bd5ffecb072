/// Check for equality between two components allowing for 16-bit rounding
/// errors, or for the given `epsilon`.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr, $expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual,
            $expected,
            epsilon = 1.0 / i16::MAX as $crate::Component
        );
    }};
    ($actual:expr, $expected:expr, epsilon = $epsilon:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $epsilon);
    }};
}

/// Check that two colors match channel by channel within `epsilon`.
#[macro_export]
macro_rules! assert_color_eq {
    ($actual:expr, $expected:expr) => {{
        $crate::assert_color_eq!($actual, $expected, epsilon = 1.0e-9);
    }};
    ($actual:expr, $expected:expr, epsilon = $epsilon:expr) => {{
        let actual: $crate::Color = $actual;
        let expected: $crate::Color = $expected;
        approx::assert_abs_diff_eq!(actual.red, expected.red, epsilon = $epsilon);
        approx::assert_abs_diff_eq!(actual.green, expected.green, epsilon = $epsilon);
        approx::assert_abs_diff_eq!(actual.blue, expected.blue, epsilon = $epsilon);
    }};
}
