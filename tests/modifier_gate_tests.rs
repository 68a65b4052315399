use chart_zoom::interaction::{
    ModifierKey, Modifiers, modifier_blocked, modifier_pressed,
};

#[test]
fn absent_requirement_always_passes() {
    assert!(modifier_pressed(None, Modifiers::NONE));
    assert!(modifier_pressed(None, Modifiers::only(ModifierKey::Ctrl)));
}

#[test]
fn required_key_must_be_held() {
    let required = Some(ModifierKey::Ctrl);
    assert!(!modifier_pressed(required, Modifiers::NONE));
    assert!(modifier_pressed(required, Modifiers::only(ModifierKey::Ctrl)));
    assert!(!modifier_pressed(required, Modifiers::only(ModifierKey::Alt)));
}

#[test]
fn each_modifier_maps_to_its_flag() {
    for key in [
        ModifierKey::Ctrl,
        ModifierKey::Alt,
        ModifierKey::Shift,
        ModifierKey::Meta,
    ] {
        assert!(modifier_pressed(Some(key), Modifiers::only(key)));
    }
}

#[test]
fn blocked_is_the_negation_of_pressed() {
    let required = Some(ModifierKey::Shift);
    assert!(modifier_blocked(required, Modifiers::NONE));
    assert!(!modifier_blocked(required, Modifiers::only(ModifierKey::Shift)));
    assert!(!modifier_blocked(None, Modifiers::NONE));
}

#[test]
fn combined_modifiers_still_satisfy_a_single_requirement() {
    let modifiers = Modifiers {
        ctrl: true,
        alt: true,
        shift: false,
        meta: false,
    };
    assert!(modifier_pressed(Some(ModifierKey::Ctrl), modifiers));
    assert!(modifier_pressed(Some(ModifierKey::Alt), modifiers));
    assert!(modifier_blocked(Some(ModifierKey::Meta), modifiers));
}
