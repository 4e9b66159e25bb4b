use dropfit_demo::dropdown_for;
use dropfit_demo::scenario::Scenario;
use dropfit_offset::{AutoOffset, AutoOffsetSettings, DEFAULT_RIGHT_MARGIN};
use dropfit_testing::{assert_fits_viewport, assert_rect_approx_eq};

#[test]
fn narrow_viewport_dropdown_is_pulled_inside_the_margin() {
    let scenario = Scenario::default();
    let dropdown = dropdown_for(&scenario, AutoOffset::default());

    let opened = dropdown.open(scenario.viewport_width);

    let mut expected = dropdown.unshifted_popper();
    expected.x = 40.0;
    assert_rect_approx_eq(opened.popper, expected, 0.0, "shifted popper");
    assert_fits_viewport(
        opened.popper,
        scenario.viewport_width,
        DEFAULT_RIGHT_MARGIN,
        "shifted popper",
    );
}

#[test]
fn desktop_viewport_leaves_overflowing_dropdown_alone() {
    let scenario = Scenario {
        viewport_width: 1024.0,
        trigger_left: 900.0,
        popper_width: 250.0,
    };
    let dropdown = dropdown_for(&scenario, AutoOffset::default());

    let opened = dropdown.open(scenario.viewport_width);

    assert!(opened.config.is_empty());
    assert_eq!(opened.popper, dropdown.unshifted_popper());
    assert!(!opened.fits(DEFAULT_RIGHT_MARGIN));
}

#[test]
fn same_dropdown_reopened_after_resize() {
    let scenario = Scenario::default();
    let dropdown = dropdown_for(&scenario, AutoOffset::default());

    let wide = dropdown.open(800.0);
    let narrow = dropdown.open(320.0);

    assert_eq!(wide.config.len(), 0);
    assert_eq!(narrow.config.len(), 1);
    // (320 - 10) - (100 + 250)
    assert_eq!(narrow.offset.to_array(), [-40.0, 0.0]);
}

#[test]
fn configured_threshold_is_honored_by_the_host() {
    let scenario = Scenario {
        viewport_width: 500.0,
        trigger_left: 300.0,
        popper_width: 250.0,
    };
    let auto_offset =
        AutoOffset::with_settings(AutoOffsetSettings::new().with_viewport_threshold(640.0));

    let opened = dropdown_for(&scenario, auto_offset).open(scenario.viewport_width);

    assert_eq!(opened.config.len(), 1);
    // (500 - 10) - (300 + 250)
    assert_eq!(opened.offset.x, -60.0);
    assert!(opened.fits(DEFAULT_RIGHT_MARGIN));
}
