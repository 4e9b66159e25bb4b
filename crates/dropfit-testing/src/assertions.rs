//! Assertion utilities for popper layout tests

use dropfit_popper::{Offset, Rect};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that an offset is approximately equal to another.
pub fn assert_offset_approx_eq(actual: Offset, expected: Offset, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - dx", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - dy", msg));
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that the right edge of `rect` stays at or left of `viewport_width - margin`.
pub fn assert_fits_viewport(rect: Rect, viewport_width: f32, margin: f32, msg: &str) {
    let limit = viewport_width - margin;
    assert!(
        rect.right() <= limit,
        "{}: right edge {} overflows limit {} (viewport {}, margin {})",
        msg,
        rect.right(),
        limit,
        viewport_width,
        margin
    );
}
