//! Layout-state fixtures.

use dropfit_popper::{LayoutState, Placement, Rect};

/// Height used for fixture poppers; offset correction never reads it.
pub const POPPER_HEIGHT: f32 = 160.0;

/// Trigger element rect anchored `left` pixels from the viewport edge.
pub fn trigger_rect(left: f32, width: f32) -> Rect {
    Rect::new(left, 48.0, width, 32.0)
}

/// Layout state for a bottom-start popper of the given width, placed under a
/// trigger at the viewport origin.
pub fn layout_state_with_popper_width(width: f32) -> LayoutState {
    let reference = trigger_rect(0.0, 96.0);
    LayoutState::new(
        Rect::new(reference.x, reference.bottom(), width, POPPER_HEIGHT),
        reference,
        Placement::BottomStart,
    )
}
