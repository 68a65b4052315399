mod common;

use chart_zoom::api::{WheelOptions, ZoomOptions};
use chart_zoom::core::DirectionMode;
use chart_zoom::interaction::{EventOutcome, ModifierKey, Modifiers};

use common::{controller_with, wheel, wheel_with};

fn wheel_options() -> ZoomOptions {
    ZoomOptions::default()
        .with_mode(DirectionMode::X)
        .with_wheel(WheelOptions {
            enabled: true,
            speed: 0.1,
            modifier_key: None,
        })
}

#[test]
fn positive_delta_zooms_out_by_one_minus_speed() {
    let (mut controller, record) = controller_with(wheel_options());

    let outcome = controller.handle_event(wheel(200.0, 150.0, Some(120.0)), 0);
    assert_eq!(outcome, EventOutcome::Consumed);

    // factor 0.9 anchored at pixel 200 (value 200 on the identity scale).
    let (min, max) = controller.view().scale("x").expect("x scale").range();
    assert!((min - (200.0 - 200.0 / 0.9)).abs() <= 1e-9);
    assert!((max - (200.0 + 200.0 / 0.9)).abs() <= 1e-9);
    assert_eq!(record.borrow().zooms, 1);
}

#[test]
fn negative_delta_zooms_in_by_one_plus_speed() {
    let (mut controller, _record) = controller_with(wheel_options());

    controller.handle_event(wheel(200.0, 150.0, Some(-120.0)), 0);

    let (min, max) = controller.view().scale("x").expect("x scale").range();
    assert!((min - (200.0 - 200.0 / 1.1)).abs() <= 1e-9);
    assert!((max - (200.0 + 200.0 / 1.1)).abs() <= 1e-9);
}

#[test]
fn zero_delta_counts_as_scrolled_away() {
    let (mut controller, _record) = controller_with(wheel_options());

    // deltaY >= 0 zooms out even at exactly zero.
    controller.handle_event(wheel(200.0, 150.0, Some(0.0)), 0);
    let (min, max) = controller.view().scale("x").expect("x scale").range();
    assert!(max - min > 400.0);
}

#[test]
fn focal_point_value_stays_fixed() {
    let (mut controller, _record) = controller_with(wheel_options());

    controller.handle_event(wheel(100.0, 150.0, Some(-120.0)), 0);

    let view = controller.view();
    let scale = view.scale("x").expect("x scale");
    let anchored = scale.pixel_to_value(100.0, view.area());
    assert!((anchored - 100.0).abs() <= 1e-9);
}

#[test]
fn degenerate_delta_is_swallowed_without_side_effects() {
    let (mut controller, record) = controller_with(wheel_options());

    let outcome = controller.handle_event(wheel(200.0, 150.0, None), 0);
    assert_eq!(outcome, EventOutcome::Passthrough);

    let (min, max) = controller.view().scale("x").expect("x scale").range();
    assert_eq!((min, max), (0.0, 400.0));
    let record = record.borrow();
    assert_eq!(record.zooms, 0);
    assert_eq!(record.zoom_rejections, 0);
}

#[test]
fn missing_modifier_rejects_each_wheel_event() {
    let mut options = wheel_options();
    options.wheel.modifier_key = Some(ModifierKey::Ctrl);
    let (mut controller, record) = controller_with(options);

    let outcome = controller.handle_event(wheel(200.0, 150.0, Some(120.0)), 0);
    assert_eq!(outcome, EventOutcome::Passthrough);
    assert_eq!(record.borrow().zoom_rejections, 1);

    let outcome = controller.handle_event(
        wheel_with(200.0, 150.0, Some(120.0), Modifiers::only(ModifierKey::Ctrl)),
        16,
    );
    assert_eq!(outcome, EventOutcome::Consumed);
}

#[test]
fn start_veto_is_consulted_on_every_wheel_event() {
    let (mut controller, record) = controller_with(wheel_options());
    record.borrow_mut().veto_zoom_start = true;

    assert_eq!(
        controller.handle_event(wheel(200.0, 150.0, Some(-120.0)), 0),
        EventOutcome::Passthrough
    );
    assert_eq!(
        controller.handle_event(wheel(200.0, 150.0, Some(-120.0)), 100),
        EventOutcome::Passthrough
    );

    {
        let record = record.borrow();
        assert_eq!(record.zoom_starts, 2);
        assert_eq!(record.zoom_rejections, 2);
        assert_eq!(record.zooms, 0);
    }
    assert!(!controller.is_zoomed_or_panned());

    // Lifting the veto lets the very next event through.
    record.borrow_mut().veto_zoom_start = false;
    assert_eq!(
        controller.handle_event(wheel(200.0, 150.0, Some(-120.0)), 200),
        EventOutcome::Consumed
    );
    assert_eq!(record.borrow().zooms, 1);
}

#[test]
fn completion_fires_once_per_burst_after_the_debounce_window() {
    let (mut controller, record) = controller_with(wheel_options());

    controller.handle_event(wheel(200.0, 150.0, Some(-120.0)), 0);
    controller.handle_event(wheel(200.0, 150.0, Some(-120.0)), 100);
    controller.handle_event(wheel(200.0, 150.0, Some(-120.0)), 200);

    // Still inside the window measured from the last event.
    controller.poll_timers(400);
    assert_eq!(record.borrow().zoom_completes, 0);

    controller.poll_timers(450);
    let snapshot = {
        let record = record.borrow();
        (record.zoom_completes, record.zooms)
    };
    assert_eq!(snapshot, (1, 3));

    // Polling again does not re-fire.
    controller.poll_timers(1_000);
    assert_eq!(record.borrow().zoom_completes, 1);
}

#[test]
fn new_burst_restarts_the_debounce() {
    let (mut controller, record) = controller_with(wheel_options());

    controller.handle_event(wheel(200.0, 150.0, Some(-120.0)), 0);
    controller.poll_timers(250);
    assert_eq!(record.borrow().zoom_completes, 1);

    controller.handle_event(wheel(200.0, 150.0, Some(-120.0)), 1_000);
    controller.poll_timers(1_250);
    assert_eq!(record.borrow().zoom_completes, 2);
}

#[test]
fn wheel_against_a_hard_limit_fires_no_completion() {
    use chart_zoom::core::{LimitBound, ScaleLimits, ZoomLimits};

    let mut limits = ZoomLimits::default();
    limits.insert(
        "x".to_owned(),
        ScaleLimits {
            min: LimitBound::Original,
            max: LimitBound::Original,
            min_range: None,
        },
    );
    let options = wheel_options().with_limits(limits);
    let (mut controller, record) = controller_with(options);

    // Zooming out past the original bounds clamps back to them: no change.
    controller.handle_event(wheel(200.0, 150.0, Some(120.0)), 0);
    controller.poll_timers(300);

    let record = record.borrow();
    assert_eq!(record.zooms, 0);
    assert_eq!(record.zoom_completes, 0);
    assert_eq!(
        controller.view().scale("x").expect("x scale").range(),
        (0.0, 400.0)
    );
}
