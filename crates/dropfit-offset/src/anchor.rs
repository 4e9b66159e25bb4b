use dropfit_popper::Rect;

/// Anything that can report the horizontal distance from the viewport's left
/// edge to the left edge of the element anchoring a dropdown.
pub trait TriggerAnchor {
    fn left_offset(&self) -> f32;
}

impl TriggerAnchor for f32 {
    fn left_offset(&self) -> f32 {
        *self
    }
}

impl TriggerAnchor for Rect {
    fn left_offset(&self) -> f32 {
        self.x
    }
}

impl<T: TriggerAnchor + ?Sized> TriggerAnchor for &T {
    fn left_offset(&self) -> f32 {
        (**self).left_offset()
    }
}
