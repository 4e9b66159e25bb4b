//! Dropdown host component.
//!
//! Each [`Dropdown::open`] builds a fresh [`PopperConfig`], lets
//! [`AutoOffset`] decorate it, then runs a single layout pass.

use dropfit_offset::AutoOffset;
use dropfit_popper::{LayoutState, Offset, Placement, PopperConfig, Rect};

/// Dropdown anchored below-left of a trigger element.
#[derive(Clone, Debug)]
pub struct Dropdown {
    trigger: Rect,
    popper_width: f32,
    popper_height: f32,
    auto_offset: AutoOffset,
}

/// Result of opening a dropdown: the decorated config and the placed popper.
#[derive(Debug)]
pub struct OpenDropdown {
    pub config: PopperConfig,
    pub popper: Rect,
    pub offset: Offset,
    pub viewport_width: f32,
}

impl Dropdown {
    pub fn new(trigger: Rect, popper_width: f32, popper_height: f32) -> Self {
        Self {
            trigger,
            popper_width,
            popper_height,
            auto_offset: AutoOffset::default(),
        }
    }

    pub fn with_auto_offset(mut self, auto_offset: AutoOffset) -> Self {
        self.auto_offset = auto_offset;
        self
    }

    pub fn trigger(&self) -> Rect {
        self.trigger
    }

    /// Popper rect before any offset modifiers run.
    pub fn unshifted_popper(&self) -> Rect {
        Rect::new(
            self.trigger.x,
            self.trigger.bottom(),
            self.popper_width,
            self.popper_height,
        )
    }

    pub fn open(&self, viewport_width: f32) -> OpenDropdown {
        let mut config = PopperConfig::new().with_placement(Placement::BottomStart);
        self.auto_offset
            .apply_to_anchor(&self.trigger, viewport_width, &mut config);

        let state = LayoutState::new(self.unshifted_popper(), self.trigger, config.placement());
        let offset = config.resolve_offset(&state);
        let popper = state.popper.translate(offset);

        OpenDropdown {
            config,
            popper,
            offset,
            viewport_width,
        }
    }
}

impl OpenDropdown {
    /// Whether the placed popper's right edge stays inside `viewport_width - margin`.
    pub fn fits(&self, margin: f32) -> bool {
        self.popper.right() <= self.viewport_width - margin
    }

    pub fn report(&self) -> String {
        format!(
            "viewport {}px: {} modifier(s), offset [{}, {}], popper x={} right={}",
            self.viewport_width,
            self.config.len(),
            self.offset.x,
            self.offset.y,
            self.popper.x,
            self.popper.right()
        )
    }
}
