use chart_zoom::interaction::{EventKind, ListenerRegistry, OneShot};

#[test]
fn attach_is_idempotent() {
    let mut registry = ListenerRegistry::new();
    assert!(registry.attach(EventKind::Wheel));
    assert!(!registry.attach(EventKind::Wheel));
    assert_eq!(registry.len(), 1);
    assert!(registry.is_attached(EventKind::Wheel));
}

#[test]
fn detach_is_idempotent() {
    let mut registry = ListenerRegistry::new();
    registry.attach(EventKind::PointerDown);
    assert!(registry.detach(EventKind::PointerDown));
    assert!(!registry.detach(EventKind::PointerDown));
    assert!(registry.is_empty());
}

#[test]
fn sync_matches_wanted_state() {
    let mut registry = ListenerRegistry::new();
    registry.sync(EventKind::PointerMove, true);
    registry.sync(EventKind::PointerMove, true);
    assert_eq!(registry.len(), 1);
    registry.sync(EventKind::PointerMove, false);
    assert!(!registry.is_attached(EventKind::PointerMove));
}

#[test]
fn clear_removes_everything() {
    let mut registry = ListenerRegistry::new();
    registry.attach(EventKind::PointerDown);
    registry.attach(EventKind::KeyDown);
    registry.clear();
    assert!(registry.is_empty());
}

#[test]
fn one_shot_fires_exactly_once_at_deadline() {
    let mut timer = OneShot::new();
    timer.arm(1_000, 500);
    assert!(timer.is_armed());
    assert!(!timer.fire_due(1_499));
    assert!(timer.fire_due(1_500));
    assert!(!timer.fire_due(2_000));
    assert!(!timer.is_armed());
}

#[test]
fn rearming_replaces_the_pending_deadline() {
    let mut timer = OneShot::new();
    timer.arm(0, 250);
    timer.arm(100, 250);
    assert!(!timer.fire_due(250));
    assert!(timer.fire_due(350));
}

#[test]
fn cancel_disarms_without_firing() {
    let mut timer = OneShot::new();
    timer.arm(0, 100);
    timer.cancel();
    assert!(!timer.fire_due(1_000));
}
