//! Testing utilities for dropfit
//!
//! Assertion helpers for offsets and popper rects, plus layout-state fixtures
//! shared by the workspace's integration tests.

pub mod assertions;
pub mod fixtures;

pub use assertions::{
    assert_approx_eq, assert_fits_viewport, assert_offset_approx_eq, assert_rect_approx_eq,
};
pub use fixtures::{layout_state_with_popper_width, trigger_rect, POPPER_HEIGHT};
