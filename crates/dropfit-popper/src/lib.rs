//! Positioning-library surface for dropfit: the popper configuration, its
//! modifier entries and the layout pass that evaluates them.

pub mod config;
pub mod debug;
pub mod geometry;
pub mod layout;
pub mod modifier;

// Re-export commonly used items
pub use config::PopperConfig;
pub use debug::{describe_config, log_config};
pub use geometry::{Offset, Rect};
pub use layout::{LayoutState, Placement};
pub use modifier::{LayoutOffsetFn, ModifierEntry, ModifierOptions, OFFSET_MODIFIER_NAME};

pub mod prelude {
    pub use crate::config::PopperConfig;
    pub use crate::geometry::{Offset, Rect};
    pub use crate::layout::{LayoutState, Placement};
    pub use crate::modifier::{LayoutOffsetFn, ModifierEntry, ModifierOptions};
}
