//! Demo scenario read from the environment.

use anyhow::{ensure, Context, Result};

pub const VIEWPORT_WIDTH_ENV: &str = "DROPFIT_VIEWPORT_WIDTH";
pub const TRIGGER_LEFT_ENV: &str = "DROPFIT_TRIGGER_LEFT";
pub const POPPER_WIDTH_ENV: &str = "DROPFIT_POPPER_WIDTH";

/// Viewport and element measurements for one dropdown-open event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub viewport_width: f32,
    pub trigger_left: f32,
    pub popper_width: f32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            viewport_width: 300.0,
            trigger_left: 100.0,
            popper_width: 250.0,
        }
    }
}

impl Scenario {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads each measurement through `lookup`, keeping defaults for unset keys.
    ///
    /// The offset decorator does not validate its inputs, so the host rejects
    /// anything that is not a finite non-negative pixel value here.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut scenario = Self::default();
        if let Some(raw) = lookup(VIEWPORT_WIDTH_ENV) {
            scenario.viewport_width = parse_pixels(VIEWPORT_WIDTH_ENV, &raw)?;
        }
        if let Some(raw) = lookup(TRIGGER_LEFT_ENV) {
            scenario.trigger_left = parse_pixels(TRIGGER_LEFT_ENV, &raw)?;
        }
        if let Some(raw) = lookup(POPPER_WIDTH_ENV) {
            scenario.popper_width = parse_pixels(POPPER_WIDTH_ENV, &raw)?;
        }
        Ok(scenario)
    }
}

fn parse_pixels(key: &str, raw: &str) -> Result<f32> {
    let value: f32 = raw
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a pixel value, got {raw:?}"))?;
    ensure!(
        value.is_finite() && value >= 0.0,
        "{key} must be a finite non-negative number, got {value}"
    );
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_keys_keep_defaults() {
        let scenario = Scenario::from_lookup(|_| None).expect("defaults");
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn parses_each_key() {
        let scenario = Scenario::from_lookup(|key| match key {
            VIEWPORT_WIDTH_ENV => Some("360".into()),
            TRIGGER_LEFT_ENV => Some(" 12.5 ".into()),
            POPPER_WIDTH_ENV => Some("200".into()),
            _ => None,
        })
        .expect("valid scenario");
        assert_eq!(
            scenario,
            Scenario {
                viewport_width: 360.0,
                trigger_left: 12.5,
                popper_width: 200.0,
            }
        );
    }

    #[test]
    fn rejects_garbage_with_key_in_message() {
        let err = Scenario::from_lookup(|key| (key == TRIGGER_LEFT_ENV).then(|| "left".into()))
            .expect_err("non-numeric trigger offset");
        assert!(err.to_string().contains(TRIGGER_LEFT_ENV));
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        let negative = Scenario::from_lookup(|key| (key == POPPER_WIDTH_ENV).then(|| "-4".into()));
        assert!(negative.is_err());

        let not_a_number =
            Scenario::from_lookup(|key| (key == VIEWPORT_WIDTH_ENV).then(|| "NaN".into()));
        assert!(not_a_number.is_err());
    }
}
