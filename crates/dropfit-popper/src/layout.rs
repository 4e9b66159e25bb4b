//! Layout-time snapshot handed to modifier callbacks.

use std::fmt;

use crate::geometry::Rect;

/// Where the popper sits relative to its reference element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    Bottom,
    #[default]
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::TopStart => "top-start",
            Placement::TopEnd => "top-end",
            Placement::Bottom => "bottom",
            Placement::BottomStart => "bottom-start",
            Placement::BottomEnd => "bottom-end",
            Placement::Left => "left",
            Placement::LeftStart => "left-start",
            Placement::LeftEnd => "left-end",
            Placement::Right => "right",
            Placement::RightStart => "right-start",
            Placement::RightEnd => "right-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only state supplied to modifier callbacks during a layout pass.
///
/// `popper` is the overlay rect before any offset modifiers run and
/// `reference` is the anchoring element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutState {
    pub popper: Rect,
    pub reference: Rect,
    pub placement: Placement,
}

impl LayoutState {
    pub fn new(popper: Rect, reference: Rect, placement: Placement) -> Self {
        Self {
            popper,
            reference,
            placement,
        }
    }
}
