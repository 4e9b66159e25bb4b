use dropfit_popper::prelude::*;
use dropfit_testing::{assert_offset_approx_eq, layout_state_with_popper_width};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn layout_pass_reevaluates_callbacks_every_time() {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let config = PopperConfig::new().with_modifier(ModifierEntry::offset(move |state| {
        seen.set(seen.get() + 1);
        Offset::horizontal(-state.popper.width)
    }));

    let narrow = layout_state_with_popper_width(50.0);
    let wide = layout_state_with_popper_width(150.0);

    assert_offset_approx_eq(config.resolve_offset(&narrow), Offset::new(-50.0, 0.0), 0.0, "narrow");
    assert_offset_approx_eq(config.resolve_offset(&wide), Offset::new(-150.0, 0.0), 0.0, "wide");
    assert_eq!(calls.get(), 2, "one evaluation per layout pass");
}

#[test]
fn cloned_config_shares_callbacks() {
    let config = PopperConfig::new()
        .with_modifier(ModifierEntry::named("preventOverflow"))
        .with_modifier(ModifierEntry::offset(|_| Offset::new(3.0, -2.0)));
    let copy = config.clone();

    let state = layout_state_with_popper_width(80.0);
    assert_eq!(copy.len(), config.len());
    assert_eq!(copy.resolve_offset(&state), config.resolve_offset(&state));
    assert_eq!(copy.place(&state), state.popper.translate(Offset::new(3.0, -2.0)));
}
