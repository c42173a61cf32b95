//! Assertion helpers for positions and radii.

use fabreveal_graphics::{Point, Rect};

/// Assert that `actual` is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{msg}: got {actual}, want {expected} within {tolerance} (off by {diff})"
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{msg}: x"));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{msg}: y"));
}

pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_point_approx_eq(actual.origin(), expected.origin(), tolerance, msg);
    let size = format!("{msg}: size");
    assert_approx_eq(actual.width, expected.width, tolerance, &size);
    assert_approx_eq(actual.height, expected.height, tolerance, &size);
}

/// Assert that every value is at least the one before it.
pub fn assert_non_decreasing(values: &[f32], msg: &str) {
    for (index, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] >= pair[0],
            "{msg}: {} at index {} dropped below {}",
            pair[1],
            index + 1,
            pair[0]
        );
    }
}

pub fn assert_non_increasing(values: &[f32], msg: &str) {
    for (index, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] <= pair[0],
            "{msg}: {} at index {} rose above {}",
            pair[1],
            index + 1,
            pair[0]
        );
    }
}
