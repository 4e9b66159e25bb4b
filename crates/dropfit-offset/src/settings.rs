//! Thresholds for the narrow-viewport correction.

/// Viewports narrower than this (in pixels) get the offset modifier.
pub const DEFAULT_VIEWPORT_THRESHOLD: f32 = 400.0;

/// Gap kept between the popper's right edge and the viewport edge.
pub const DEFAULT_RIGHT_MARGIN: f32 = 10.0;

/// Overrides [`DEFAULT_VIEWPORT_THRESHOLD`] in [`AutoOffsetSettings::from_env`].
pub const VIEWPORT_THRESHOLD_ENV: &str = "DROPFIT_VIEWPORT_THRESHOLD";

/// Overrides [`DEFAULT_RIGHT_MARGIN`] in [`AutoOffsetSettings::from_env`].
pub const RIGHT_MARGIN_ENV: &str = "DROPFIT_RIGHT_MARGIN";

/// Configuration for [`AutoOffset`](crate::AutoOffset).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoOffsetSettings {
    /// Strict upper bound on viewport width for the correction to apply.
    pub viewport_threshold: f32,
    /// Safety margin subtracted from the viewport width.
    pub right_margin: f32,
}

impl Default for AutoOffsetSettings {
    fn default() -> Self {
        Self {
            viewport_threshold: DEFAULT_VIEWPORT_THRESHOLD,
            right_margin: DEFAULT_RIGHT_MARGIN,
        }
    }
}

impl AutoOffsetSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport_threshold(mut self, threshold: f32) -> Self {
        self.viewport_threshold = threshold;
        self
    }

    pub fn with_right_margin(mut self, margin: f32) -> Self {
        self.right_margin = margin;
        self
    }

    /// Reads overrides from `DROPFIT_VIEWPORT_THRESHOLD` and `DROPFIT_RIGHT_MARGIN`.
    ///
    /// Values that are missing or not finite numbers keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injected variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(threshold) = read_dimension(&lookup, VIEWPORT_THRESHOLD_ENV) {
            settings.viewport_threshold = threshold;
        }
        if let Some(margin) = read_dimension(&lookup, RIGHT_MARGIN_ENV) {
            settings.right_margin = margin;
        }
        settings
    }
}

fn read_dimension(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<f32> {
    let raw = lookup(key)?;
    let parsed = parse_dimension(&raw);
    if parsed.is_none() {
        log::warn!(
            "{} is set to {:?}, which is not a pixel value; using the default.",
            key,
            raw
        );
    }
    parsed
}

fn parse_dimension(value: &str) -> Option<f32> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    number.parse::<f32>().ok().filter(|value| value.is_finite())
}
