//! Popper configuration: placement plus an ordered modifier list.

use smallvec::SmallVec;

use crate::geometry::{Offset, Rect};
use crate::layout::{LayoutState, Placement};
use crate::modifier::ModifierEntry;

/// Positioning configuration built per dropdown-open event.
///
/// Modifiers are kept in insertion order. Decorators append to the list and
/// never touch entries that are already present.
#[derive(Clone, Debug, Default)]
pub struct PopperConfig {
    placement: Placement,
    modifiers: SmallVec<[ModifierEntry; 4]>,
}

impl PopperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_modifier(mut self, entry: ModifierEntry) -> Self {
        self.modifiers.push(entry);
        self
    }

    /// Appends `entry` and returns the same config for chaining.
    pub fn push_modifier(&mut self, entry: ModifierEntry) -> &mut Self {
        self.modifiers.push(entry);
        self
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn modifiers(&self) -> &[ModifierEntry] {
        &self.modifiers
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// First entry with the given name.
    pub fn find(&self, name: &str) -> Option<&ModifierEntry> {
        self.modifiers.iter().find(|entry| entry.name() == name)
    }

    pub fn offset_modifiers(&self) -> impl Iterator<Item = &ModifierEntry> {
        self.modifiers.iter().filter(|entry| entry.is_offset())
    }

    /// Runs one layout pass over the offset modifiers and returns their sum.
    ///
    /// Entries are evaluated in insertion order; an empty list yields
    /// [`Offset::ZERO`].
    pub fn resolve_offset(&self, state: &LayoutState) -> Offset {
        self.offset_modifiers()
            .filter_map(|entry| entry.evaluate_offset(state))
            .fold(Offset::ZERO, |total, offset| total + offset)
    }

    /// Final popper rect after applying [`resolve_offset`](Self::resolve_offset).
    pub fn place(&self, state: &LayoutState) -> Rect {
        let offset = self.resolve_offset(state);
        log::trace!(
            "popper placed at {:?} with offset ({}, {})",
            state.placement,
            offset.x,
            offset.y
        );
        state.popper.translate(offset)
    }
}
