// Native tests for the curtain-pull gate model. The physics are pure, so the
// whole gesture lifecycle can be replayed deterministically here.

use special_day::curtain::{
    self, AUTO_COMPLETE_THRESHOLD, CurtainPull, DRAG_RESISTANCE, GatePhase, Release,
    TOTAL_PULL_NEEDED_RATIO, apply_resistance, phase_at, recognizes_name,
};

const VIEWPORT_W: f64 = 1000.0;

/// Pixels of raw drag that commit exactly `progress` at this viewport width.
fn pixels_for(progress: f64) -> f64 {
    progress * VIEWPORT_W * TOTAL_PULL_NEEDED_RATIO / DRAG_RESISTANCE
}

/// One full drag session ending with a stationary sample, so no momentum is
/// added at release.
fn drag_session(pull: &mut CurtainPull, dx: f64, t0: f64) -> Release {
    pull.drag_start(0.0, t0);
    pull.drag_move(dx, t0 + 100.0, VIEWPORT_W);
    pull.drag_move(dx, t0 + 300.0, VIEWPORT_W);
    pull.drag_end()
}

#[test]
fn display_progress_is_clamped_to_unit_range() {
    let mut pull = CurtainPull::new();
    pull.drag_start(0.0, 0.0);
    let display = pull.drag_move(50_000.0, 16.0, VIEWPORT_W).unwrap();
    assert!(display <= 1.0, "display progress {display} exceeded 1.0");
    assert!(display >= 0.0);
}

#[test]
fn progress_accumulates_across_sessions() {
    let mut pull = CurtainPull::new();

    match drag_session(&mut pull, pixels_for(0.3), 0.0) {
        Release::Snap(p) => assert!((p - 0.3).abs() < 1e-9, "committed {p}, expected 0.3"),
        other => panic!("expected snap, got {other:?}"),
    }

    match drag_session(&mut pull, pixels_for(0.3), 1_000.0) {
        Release::Snap(p) => assert!((p - 0.6).abs() < 1e-9, "committed {p}, expected 0.6"),
        other => panic!("expected snap, got {other:?}"),
    }
    assert!((pull.progress() - 0.6).abs() < 1e-9);
}

#[test]
fn snap_never_resets_to_zero() {
    let mut pull = CurtainPull::new();
    drag_session(&mut pull, pixels_for(0.4), 0.0);
    // A tiny follow-up drag still snaps back to at least the prior progress.
    match drag_session(&mut pull, 1.0, 1_000.0) {
        Release::Snap(p) => assert!(p >= 0.4),
        other => panic!("expected snap, got {other:?}"),
    }
}

#[test]
fn crossing_the_threshold_completes_exactly_once() {
    let mut pull = CurtainPull::new();
    let release = drag_session(&mut pull, pixels_for(AUTO_COMPLETE_THRESHOLD + 0.01), 0.0);
    assert_eq!(release, Release::Complete);
    assert!(pull.dismissed());

    // Every further gesture is ignored.
    pull.drag_start(0.0, 2_000.0);
    assert!(!pull.is_dragging());
    assert_eq!(pull.drag_move(300.0, 2_100.0, VIEWPORT_W), None);
    assert_eq!(pull.drag_end(), Release::Ignored);
    assert!((pull.progress() - (AUTO_COMPLETE_THRESHOLD + 0.01)).abs() < 1e-9);
}

#[test]
fn zero_distance_drag_commits_nothing() {
    let mut pull = CurtainPull::new();
    pull.drag_start(200.0, 0.0);
    pull.drag_move(200.0, 100.0, VIEWPORT_W);
    match pull.drag_end() {
        Release::Snap(p) => assert_eq!(p, 0.0),
        other => panic!("expected snap at zero, got {other:?}"),
    }
}

#[test]
fn release_momentum_is_direction_agnostic() {
    // Leftward and rightward drags of the same speed commit the same boost.
    let mut right = CurtainPull::new();
    right.drag_start(0.0, 0.0);
    right.drag_move(300.0, 100.0, VIEWPORT_W);
    let Release::Snap(p_right) = right.drag_end() else { panic!("expected snap") };

    let mut left = CurtainPull::new();
    left.drag_start(300.0, 0.0);
    left.drag_move(0.0, 100.0, VIEWPORT_W);
    let Release::Snap(p_left) = left.drag_end() else { panic!("expected snap") };

    assert!((p_right - p_left).abs() < 1e-9);
    // Momentum added something on top of the session delta.
    let session = 300.0 * DRAG_RESISTANCE / (VIEWPORT_W * TOTAL_PULL_NEEDED_RATIO);
    assert!(p_right > session);
}

#[test]
fn resistance_curve_is_identity_then_compressive() {
    for p in [0.0, 0.2, 0.5, 0.65] {
        assert!((apply_resistance(p) - p).abs() < 1e-12);
    }
    // Above the knee the curve stays below or at identity but keeps rising.
    let mut prev = apply_resistance(0.65);
    for i in 1..=20 {
        let p = 0.65 + 0.35 * (i as f64 / 20.0);
        let out = apply_resistance(p);
        assert!(out <= p + 1e-12);
        assert!(out >= prev - 1e-12, "resistance curve must be monotone");
        prev = out;
    }
    assert!((apply_resistance(1.0) - 1.0).abs() < 1e-12);
}

#[test]
fn gate_phases_follow_the_mount_timeline() {
    assert_eq!(phase_at(0.0), GatePhase::Dark);
    assert_eq!(phase_at(999.0), GatePhase::Dark);
    assert_eq!(phase_at(1_000.0), GatePhase::Spotlight);
    assert_eq!(phase_at(4_599.0), GatePhase::Spotlight);
    assert_eq!(phase_at(4_600.0), GatePhase::Lights);
    assert_eq!(phase_at(6_400.0), GatePhase::Pulling);
    assert_eq!(phase_at(1.0e9), GatePhase::Pulling);
}

#[test]
fn name_bypass_is_forgiving_about_case_and_whitespace() {
    assert!(recognizes_name(curtain::RECIPIENT_NAME));
    assert!(recognizes_name("  Popy "));
    assert!(recognizes_name("ADMIN"));
    assert!(!recognizes_name("someone else"));
    assert!(!recognizes_name(""));
}
