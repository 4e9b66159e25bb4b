//! Narrow-viewport offset correction for dropdown poppers.
//!
//! When the viewport is narrower than a threshold, [`compute_auto_offset_config`]
//! appends an `"offset"` modifier to a [`PopperConfig`]. At layout time that
//! modifier pulls the popper left by exactly the amount its right edge would
//! overflow `viewport_width - margin`.
//!
//! ```rust,ignore
//! use dropfit_offset::compute_auto_offset_config;
//! use dropfit_popper::PopperConfig;
//!
//! let mut config = PopperConfig::new();
//! compute_auto_offset_config(trigger_left, viewport_width, &mut config);
//! let popper_rect = config.place(&layout_state);
//! ```

mod anchor;
mod auto_offset;
mod settings;

pub use anchor::TriggerAnchor;
pub use auto_offset::{compute_auto_offset_config, right_overflow_offset, AutoOffset};
pub use settings::{
    AutoOffsetSettings, DEFAULT_RIGHT_MARGIN, DEFAULT_VIEWPORT_THRESHOLD, RIGHT_MARGIN_ENV,
    VIEWPORT_THRESHOLD_ENV,
};

pub use dropfit_popper::PopperConfig;

#[cfg(test)]
#[path = "tests/auto_offset_tests.rs"]
mod tests;
