//! Modifier entries consumed by the popper layout pass.
//!
//! A modifier is a named behavior unit. The positioning library treats most
//! entries as opaque descriptors; entries named [`OFFSET_MODIFIER_NAME`] carry a
//! [`LayoutOffsetFn`] that is evaluated once per layout pass.

use std::fmt;
use std::rc::Rc;

use crate::geometry::Offset;
use crate::layout::LayoutState;

/// Name of the built-in offset behavior.
pub const OFFSET_MODIFIER_NAME: &str = "offset";

/// Callback evaluated during each layout pass. Must be pure: the same
/// [`LayoutState`] always yields the same [`Offset`].
pub type LayoutOffsetFn = Rc<dyn Fn(&LayoutState) -> Offset>;

/// Options attached to a [`ModifierEntry`].
#[derive(Clone, Default)]
pub struct ModifierOptions {
    pub offset: Option<LayoutOffsetFn>,
}

impl ModifierOptions {
    pub fn with_offset(offset: impl Fn(&LayoutState) -> Offset + 'static) -> Self {
        Self {
            offset: Some(Rc::new(offset)),
        }
    }
}

impl fmt::Debug for ModifierOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierOptions")
            .field("offset", &self.offset.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// A single entry in a [`PopperConfig`](crate::PopperConfig) modifier list.
#[derive(Clone)]
pub struct ModifierEntry {
    name: &'static str,
    options: ModifierOptions,
    inspector: Vec<(&'static str, String)>,
}

impl ModifierEntry {
    pub fn new(name: &'static str, options: ModifierOptions) -> Self {
        Self {
            name,
            options,
            inspector: Vec::new(),
        }
    }

    /// Opaque entry with no options, e.g. `"flip"` or `"preventOverflow"`.
    pub fn named(name: &'static str) -> Self {
        Self::new(name, ModifierOptions::default())
    }

    /// Offset entry whose shift is computed lazily from the layout state.
    pub fn offset(offset: impl Fn(&LayoutState) -> Offset + 'static) -> Self {
        Self::new(OFFSET_MODIFIER_NAME, ModifierOptions::with_offset(offset))
    }

    /// Records an inspector property for tooling.
    pub fn with_inspector_property(mut self, name: &'static str, value: impl ToString) -> Self {
        self.inspector.push((name, value.to_string()));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn options(&self) -> &ModifierOptions {
        &self.options
    }

    /// Returns true when this entry contributes to the offset accumulation.
    pub fn is_offset(&self) -> bool {
        self.name == OFFSET_MODIFIER_NAME && self.options.offset.is_some()
    }

    /// Evaluates the offset callback, or `None` for entries without one.
    pub fn evaluate_offset(&self, state: &LayoutState) -> Option<Offset> {
        self.options.offset.as_ref().map(|offset| offset(state))
    }

    pub fn inspector_properties(&self) -> &[(&'static str, String)] {
        &self.inspector
    }
}

impl fmt::Debug for ModifierEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierEntry")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("inspector", &self.inspector)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn offset_entry_evaluates_lazily() {
        let entry = ModifierEntry::offset(|state| Offset::horizontal(-state.popper.width));
        assert!(entry.is_offset());
        assert_eq!(entry.name(), OFFSET_MODIFIER_NAME);

        let state = LayoutState {
            popper: Rect::new(0.0, 0.0, 42.0, 10.0),
            ..LayoutState::default()
        };
        assert_eq!(entry.evaluate_offset(&state), Some(Offset::new(-42.0, 0.0)));
    }

    #[test]
    fn named_entries_are_opaque() {
        let entry = ModifierEntry::named("flip");
        assert!(!entry.is_offset());
        assert_eq!(entry.evaluate_offset(&LayoutState::default()), None);
    }

    #[test]
    fn offset_name_without_callback_is_not_an_offset() {
        let entry = ModifierEntry::named(OFFSET_MODIFIER_NAME);
        assert!(!entry.is_offset());
    }

    #[test]
    fn inspector_properties_keep_insertion_order() {
        let entry = ModifierEntry::named("flip")
            .with_inspector_property("padding", 8.0)
            .with_inspector_property("enabled", true);
        assert_eq!(
            entry.inspector_properties(),
            &[("padding", "8".to_string()), ("enabled", "true".to_string())]
        );
    }
}
