// Native tests for the section navigator and input normalization.

use special_day::nav::{
    Direction, Navigator, SECTIONS, WHEEL_COOLDOWN_MS, WHEEL_THRESHOLD, WheelGate,
    key_direction, swipe_direction,
};

#[test]
fn navigator_starts_at_the_first_section() {
    let nav = Navigator::new(SECTIONS.len());
    assert_eq!(nav.current(), 0);
    assert!(!nav.is_transitioning());
}

#[test]
fn go_to_rejects_self_out_of_range_and_locked_requests() {
    let mut nav = Navigator::new(6);
    assert!(nav.go_to(0).is_none(), "navigating to the current index is a no-op");
    assert!(nav.go_to(6).is_none(), "out of range");
    assert!(nav.go_to(99).is_none());
    assert_eq!(nav.current(), 0);

    let tr = nav.go_to(2).expect("valid request");
    assert_eq!((tr.from, tr.to, tr.direction), (0, 2, 1));
    assert!(nav.is_transitioning());

    // Locked: everything is dropped until the transition commits.
    assert!(nav.go_to(4).is_none());
    assert!(nav.next().is_none());
    assert!(nav.prev().is_none());

    nav.complete();
    assert_eq!(nav.current(), 2);
    assert!(!nav.is_transitioning());
}

#[test]
fn transitions_report_backward_direction() {
    let mut nav = Navigator::new(6);
    nav.go_to(3).unwrap();
    nav.complete();
    let tr = nav.go_to(1).unwrap();
    assert_eq!(tr.direction, -1);
}

#[test]
fn next_and_prev_respect_the_bounds() {
    let mut nav = Navigator::new(3);
    assert!(nav.prev().is_none(), "no section before the first");

    nav.next().unwrap();
    nav.complete();
    nav.next().unwrap();
    nav.complete();
    assert_eq!(nav.current(), 2);
    assert!(nav.next().is_none(), "no section after the last");

    assert!(nav.advance(Direction::Backward).is_some());
    nav.complete();
    assert_eq!(nav.current(), 1);
}

#[test]
fn complete_without_a_pending_transition_is_a_no_op() {
    let mut nav = Navigator::new(6);
    nav.complete();
    assert_eq!(nav.current(), 0);
}

#[test]
fn wheel_gate_applies_threshold_and_cooldown() {
    let mut gate = WheelGate::default();
    assert_eq!(gate.accept(WHEEL_THRESHOLD - 1.0, 0.0), None, "below threshold");
    assert_eq!(gate.accept(80.0, 0.0), Some(Direction::Forward));
    // Inertial ticks inside the cooldown window are dropped.
    assert_eq!(gate.accept(120.0, WHEEL_COOLDOWN_MS - 1.0), None);
    assert_eq!(gate.accept(-80.0, WHEEL_COOLDOWN_MS), Some(Direction::Backward));
}

#[test]
fn wheel_gate_weak_ticks_do_not_consume_the_cooldown() {
    let mut gate = WheelGate::new(24.0, 900.0);
    assert_eq!(gate.accept(10.0, 0.0), None);
    // A strong tick right after still passes: the weak one never armed the window.
    assert_eq!(gate.accept(40.0, 1.0), Some(Direction::Forward));
}

#[test]
fn swipes_classify_by_dominant_axis() {
    assert_eq!(swipe_direction(-80.0, 10.0), Some(Direction::Forward));
    assert_eq!(swipe_direction(80.0, -10.0), Some(Direction::Backward));
    assert_eq!(swipe_direction(10.0, -90.0), Some(Direction::Forward));
    assert_eq!(swipe_direction(-10.0, 90.0), Some(Direction::Backward));
    assert_eq!(swipe_direction(30.0, 30.0), None, "too short to count");
}

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(key_direction("ArrowRight"), Some(Direction::Forward));
    assert_eq!(key_direction("ArrowDown"), Some(Direction::Forward));
    assert_eq!(key_direction("ArrowLeft"), Some(Direction::Backward));
    assert_eq!(key_direction("ArrowUp"), Some(Direction::Backward));
    assert_eq!(key_direction("Enter"), None);
    assert_eq!(key_direction(" "), None);
}
