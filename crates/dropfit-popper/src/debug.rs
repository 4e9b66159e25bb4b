//! Debug utilities for inspecting a popper configuration.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dropfit_popper::{describe_config, log_config};
//!
//! log_config(&config);
//! println!("{}", describe_config(&config));
//! ```

use std::fmt::Write;

use crate::config::PopperConfig;

/// Formats the placement and modifier list, one entry per line.
pub fn describe_config(config: &PopperConfig) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "PopperConfig placement={} modifiers={}",
        config.placement(),
        config.len()
    );
    for (idx, entry) in config.modifiers().iter().enumerate() {
        let _ = write!(output, "  [{}] {}", idx, entry.name());
        if entry.options().offset.is_some() {
            output.push_str(" (offset fn)");
        }
        for (name, value) in entry.inspector_properties() {
            let _ = write!(output, " {}={}", name, value);
        }
        output.push('\n');
    }
    output
}

/// Emits [`describe_config`] at debug level.
pub fn log_config(config: &PopperConfig) {
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("{}", describe_config(config).trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Offset;
    use crate::layout::Placement;
    use crate::modifier::ModifierEntry;

    #[test]
    fn describes_each_modifier_with_properties() {
        let config = PopperConfig::new()
            .with_placement(Placement::BottomEnd)
            .with_modifier(ModifierEntry::named("flip"))
            .with_modifier(
                ModifierEntry::offset(|_| Offset::ZERO).with_inspector_property("viewportWidth", 300),
            );

        let text = describe_config(&config);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "PopperConfig placement=bottom-end modifiers=2");
        assert_eq!(lines[1], "  [0] flip");
        assert_eq!(lines[2], "  [1] offset (offset fn) viewportWidth=300");
    }
}
