//! Offset decorator that keeps dropdown poppers inside narrow viewports.

use std::cmp::Ordering;

use dropfit_popper::{ModifierEntry, Offset, PopperConfig};

use crate::anchor::TriggerAnchor;
use crate::settings::AutoOffsetSettings;

/// Horizontal correction for a popper of `popper_width` anchored at
/// `trigger_left_offset`.
///
/// Returns `[overflow, 0]` when the popper's right edge would pass
/// `viewport_width - right_margin`, `[0, 0]` otherwise. Inputs are not
/// validated: a `NaN` anywhere comes back as a `NaN` x-component.
pub fn right_overflow_offset(
    trigger_left_offset: f32,
    viewport_width: f32,
    right_margin: f32,
    popper_width: f32,
) -> Offset {
    let right_edge_of_popper = trigger_left_offset + popper_width;
    let available_right = viewport_width - right_margin;
    let right_overflow = available_right - right_edge_of_popper;

    if right_overflow >= 0.0 {
        Offset::ZERO
    } else {
        Offset::horizontal(right_overflow)
    }
}

/// Decorates popper configs with a right-overflow `"offset"` modifier on
/// narrow viewports.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AutoOffset {
    settings: AutoOffsetSettings,
}

impl AutoOffset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AutoOffsetSettings) -> Self {
        Self { settings }
    }

    /// Uses [`AutoOffsetSettings::from_env`].
    pub fn from_env() -> Self {
        Self::with_settings(AutoOffsetSettings::from_env())
    }

    pub fn settings(&self) -> AutoOffsetSettings {
        self.settings
    }

    /// True when `viewport_width` is strictly below the threshold.
    ///
    /// A `NaN` width is not `>=` the threshold and therefore counts as narrow.
    pub fn applies_to(&self, viewport_width: f32) -> bool {
        matches!(
            viewport_width.partial_cmp(&self.settings.viewport_threshold),
            Some(Ordering::Less) | None
        )
    }

    /// Builds the `"offset"` entry. Both arguments are captured now and never
    /// re-read at layout time.
    pub fn modifier(&self, trigger_left_offset: f32, viewport_width: f32) -> ModifierEntry {
        let right_margin = self.settings.right_margin;
        ModifierEntry::offset(move |state| {
            right_overflow_offset(
                trigger_left_offset,
                viewport_width,
                right_margin,
                state.popper.width,
            )
        })
        .with_inspector_property("viewportWidth", viewport_width)
        .with_inspector_property("triggerLeftOffset", trigger_left_offset)
        .with_inspector_property("rightMargin", right_margin)
    }

    /// Appends at most one `"offset"` modifier to `config` and returns it.
    ///
    /// Viewports at or above the threshold pass through untouched. Existing
    /// entries are never modified.
    pub fn apply<'a>(
        &self,
        trigger_left_offset: f32,
        viewport_width: f32,
        config: &'a mut PopperConfig,
    ) -> &'a mut PopperConfig {
        if !self.applies_to(viewport_width) {
            log::trace!(
                "viewport {}px >= {}px, popper config left as is",
                viewport_width,
                self.settings.viewport_threshold
            );
            return config;
        }

        log::debug!(
            "attaching offset modifier: viewport {}px < {}px, trigger at {}px, margin {}px",
            viewport_width,
            self.settings.viewport_threshold,
            trigger_left_offset,
            self.settings.right_margin
        );
        config.push_modifier(self.modifier(trigger_left_offset, viewport_width))
    }

    /// [`apply`](Self::apply) with the trigger offset read from `anchor`.
    pub fn apply_to_anchor<'a, A: TriggerAnchor + ?Sized>(
        &self,
        anchor: &A,
        viewport_width: f32,
        config: &'a mut PopperConfig,
    ) -> &'a mut PopperConfig {
        self.apply(anchor.left_offset(), viewport_width, config)
    }
}

/// Applies the correction with the default 400px threshold and 10px margin.
pub fn compute_auto_offset_config(
    trigger_left_offset: f32,
    viewport_width: f32,
    config: &mut PopperConfig,
) -> &mut PopperConfig {
    AutoOffset::default().apply(trigger_left_offset, viewport_width, config)
}
