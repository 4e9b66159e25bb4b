pub mod dropdown;
pub mod scenario;

use anyhow::Result;
use dropfit_offset::AutoOffset;
use dropfit_popper::{log_config, Rect};

use crate::dropdown::Dropdown;
use crate::scenario::Scenario;

// Demo trigger button and menu geometry, in pixels.
const TRIGGER_WIDTH: f32 = 96.0;
const TRIGGER_HEIGHT: f32 = 32.0;
const TRIGGER_TOP: f32 = 16.0;
const POPPER_HEIGHT: f32 = 180.0;

/// Builds the demo dropdown for `scenario`.
pub fn dropdown_for(scenario: &Scenario, auto_offset: AutoOffset) -> Dropdown {
    Dropdown::new(
        Rect::new(scenario.trigger_left, TRIGGER_TOP, TRIGGER_WIDTH, TRIGGER_HEIGHT),
        scenario.popper_width,
        POPPER_HEIGHT,
    )
    .with_auto_offset(auto_offset)
}

/// Shared entry point for the demo binary.
pub fn entry_point() -> Result<()> {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();

    let scenario = Scenario::from_env()?;
    let auto_offset = AutoOffset::from_env();
    log::info!(
        "opening dropdown for {:?} with {:?}",
        scenario,
        auto_offset.settings()
    );

    let opened = dropdown_for(&scenario, auto_offset).open(scenario.viewport_width);
    log_config(&opened.config);
    println!("{}", opened.report());
    Ok(())
}
