// Integration tests (native) for the `special-day` crate. These exercise the
// pure animation, audio and game-flow models without any browser APIs.

use special_day::audio::{MUSIC_VOLUME, VolumeRamp};
use special_day::cursor::RingGlide;
use special_day::particles::{
    AMBIENT_COUNT, BURST_COUNT, POOL_SIZE, ParticlePool, SPAWN_COUNT,
};
use special_day::scenes::hero::{MAX_TILT_DEG, tilt_for};
use special_day::scenes::letter::Typewriter;
use special_day::scenes::quiz::{QUESTIONS, QuizFlow, QuizPhase, SelectOutcome};
use special_day::tween::{Ease, Tween};

// ── Tween ──────────────────────────────────────────────────────────────────

#[test]
fn all_eases_hit_their_endpoints() {
    let eases = [
        Ease::Linear,
        Ease::QuadIn,
        Ease::QuadOut,
        Ease::QuadInOut,
        Ease::CubicIn,
        Ease::CubicInOut,
        Ease::ExpoOut,
        Ease::ExpoInOut,
        Ease::BackOut { overshoot: 1.70158 },
        Ease::ElasticOut { amplitude: 1.0, period: 0.6 },
    ];
    for ease in eases {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} at t=0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at t=1");
    }
}

#[test]
fn back_out_overshoots_past_the_target() {
    let ease = Ease::BackOut { overshoot: 1.70158 };
    let max = (0..=100)
        .map(|i| ease.apply(i as f64 / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(max > 1.0, "back-out should overshoot, max was {max}");
}

#[test]
fn tween_samples_clamp_outside_the_window() {
    let tw = Tween::new(10.0, 20.0, 1_000.0, 500.0, Ease::Linear);
    assert_eq!(tw.sample(0.0), 10.0, "before start");
    assert_eq!(tw.sample(1_250.0), 15.0, "midpoint");
    assert_eq!(tw.sample(9_999.0), 20.0, "after end");
    assert!(!tw.finished(1_499.0));
    assert!(tw.finished(1_500.0));
}

#[test]
fn zero_duration_tween_is_instantly_done() {
    let tw = Tween::new(0.0, 5.0, 100.0, 0.0, Ease::CubicInOut);
    assert_eq!(tw.sample(100.0), 5.0);
    assert!(tw.finished(100.0));
}

// ── Volume ramps ───────────────────────────────────────────────────────────

#[test]
fn fade_in_ramps_from_silence_to_the_bed_volume() {
    let ramp = VolumeRamp::new(0.0, MUSIC_VOLUME, 0.0, 800.0);
    assert_eq!(ramp.sample(0.0), (0.0, false));
    let (mid, done) = ramp.sample(400.0);
    assert!((mid - MUSIC_VOLUME / 2.0).abs() < 1e-9);
    assert!(!done);
    assert_eq!(ramp.sample(800.0), (MUSIC_VOLUME, true));
    assert!(!ramp.fades_out());
}

#[test]
fn fade_out_finishes_at_exact_silence() {
    let ramp = VolumeRamp::new(MUSIC_VOLUME, 0.0, 1_000.0, 800.0);
    let (v, done) = ramp.sample(2_500.0);
    assert_eq!(v, 0.0);
    assert!(done, "sampling past the end completes the ramp");
    assert!(ramp.fades_out());
}

// ── Quiz flow ──────────────────────────────────────────────────────────────

#[test]
fn quiz_runs_title_to_stamps_collecting_every_answer() {
    let mut flow = QuizFlow::new();
    assert_eq!(flow.phase(), QuizPhase::Title);
    assert_eq!(flow.select(0), SelectOutcome::Ignored, "no picks on the title");

    flow.begin();
    assert_eq!(flow.phase(), QuizPhase::Quiz);

    for (i, _q) in QUESTIONS.iter().enumerate() {
        let last = i + 1 == QUESTIONS.len();
        assert_eq!(flow.select(0), SelectOutcome::Picked { finished: last });
        flow.advance();
    }
    assert_eq!(flow.phase(), QuizPhase::Stamps);
    assert_eq!(flow.answers().len(), QUESTIONS.len());
    for (i, answer) in flow.answers().iter().enumerate() {
        assert_eq!(*answer, QUESTIONS[i].options[0]);
    }
}

#[test]
fn double_select_is_ignored_until_advance() {
    let mut flow = QuizFlow::new();
    flow.begin();
    assert!(matches!(flow.select(1), SelectOutcome::Picked { .. }));
    assert_eq!(flow.select(0), SelectOutcome::Ignored, "input locked during dwell");
    assert_eq!(flow.answers().len(), 1);

    flow.advance();
    assert_eq!(flow.current_question(), 1);
    assert_eq!(flow.selected(), None);
    assert!(matches!(flow.select(0), SelectOutcome::Picked { .. }));
}

#[test]
fn out_of_range_option_is_ignored() {
    let mut flow = QuizFlow::new();
    flow.begin();
    assert_eq!(flow.select(99), SelectOutcome::Ignored);
    assert!(flow.answers().is_empty());
}

#[test]
fn advance_without_a_selection_does_nothing() {
    let mut flow = QuizFlow::new();
    flow.begin();
    flow.advance();
    assert_eq!(flow.current_question(), 0);
}

#[test]
fn restart_resets_the_whole_flow() {
    let mut flow = QuizFlow::new();
    flow.begin();
    flow.select(0);
    flow.advance();
    flow.restart();
    assert_eq!(flow.phase(), QuizPhase::Title);
    assert_eq!(flow.current_question(), 0);
    assert!(flow.answers().is_empty());
}

// ── Typewriter ─────────────────────────────────────────────────────────────

#[test]
fn typewriter_reveals_nothing_before_the_start_delay() {
    let mut tw = Typewriter::new("hello", 0.0);
    assert!(!tw.tick(400.0, 0.0));
    assert_eq!(tw.visible(), "");
    assert!(!tw.is_done());
}

#[test]
fn typewriter_reveals_the_full_text_in_order() {
    let text = Typewriter::full_text();
    let mut tw = Typewriter::new(&text, 0.0);
    let mut last_len = 0;
    let mut t = 0.0;
    while !tw.is_done() {
        t += 16.0;
        if tw.tick(t, 0.5) {
            let visible = tw.visible();
            assert!(visible.len() >= last_len, "text only grows");
            assert!(text.starts_with(&visible), "reveals a prefix of the message");
            last_len = visible.len();
        }
        assert!(t < 120_000.0, "typewriter never finished");
    }
    assert_eq!(tw.visible(), text);
}

// ── Cursor layer ───────────────────────────────────────────────────────────

#[test]
fn cursor_ring_snaps_first_then_glides_toward_the_pointer() {
    let mut glide = RingGlide::new();
    assert_eq!(glide.step(100.0, 50.0), (100.0, 50.0), "first sample snaps");

    let mut prev = f64::INFINITY;
    for _ in 0..120 {
        let (x, y) = glide.step(300.0, 250.0);
        let dist = (300.0 - x).hypot(250.0 - y);
        assert!(dist < prev, "ring must close in on the pointer every frame");
        prev = dist;
    }
    assert!(prev < 1.0, "ring should settle on the pointer, still {prev} px away");
    let (x, y) = glide.position();
    assert!((x - 300.0).abs() < 1.0 && (y - 250.0).abs() < 1.0);
}

#[test]
fn hero_tilt_is_zero_at_center_and_bounded_at_the_edges() {
    assert_eq!(tilt_for(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));

    // Top-right corner: content tilts up and to the right at full strength.
    let (rx, ry) = tilt_for(800.0, 0.0, 800.0, 600.0);
    assert!((rx - MAX_TILT_DEG).abs() < 1e-9);
    assert!((ry - MAX_TILT_DEG).abs() < 1e-9);

    // Off-viewport positions clamp to the edge tilt.
    let (rx, ry) = tilt_for(-500.0, 10_000.0, 800.0, 600.0);
    assert!(rx.abs() <= MAX_TILT_DEG + 1e-9);
    assert!(ry.abs() <= MAX_TILT_DEG + 1e-9);

    // A degenerate viewport never tilts.
    assert_eq!(tilt_for(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
}

// ── Particle pool ──────────────────────────────────────────────────────────

#[test]
fn trail_and_burst_spawns_claim_the_expected_slots() {
    let mut pool = ParticlePool::new(42);
    pool.spawn_trail(100.0, 100.0);
    assert_eq!(pool.active_count(), SPAWN_COUNT);
    pool.spawn_burst(200.0, 200.0);
    assert_eq!(pool.active_count(), SPAWN_COUNT + BURST_COUNT);
}

#[test]
fn pool_never_exceeds_its_capacity() {
    let mut pool = ParticlePool::new(7);
    for _ in 0..200 {
        pool.spawn_trail(50.0, 50.0);
    }
    assert!(pool.active_count() <= POOL_SIZE);
    assert_eq!(pool.particles().len(), POOL_SIZE);
}

#[test]
fn burst_particles_die_out_while_ambient_hearts_persist() {
    let mut pool = ParticlePool::new(9);
    pool.spawn_ambient(800.0, 600.0);
    assert_eq!(pool.active_count(), AMBIENT_COUNT);
    pool.spawn_burst(400.0, 300.0);

    // Bursts live 0.8s plus a short fade; simulate ten seconds.
    for _ in 0..200 {
        pool.step(0.05, 800.0, 600.0);
    }
    assert_eq!(pool.active_count(), AMBIENT_COUNT, "only the ambient hearts remain");
}

#[test]
fn floor_bounce_keeps_particles_inside_the_viewport() {
    let mut pool = ParticlePool::new(3);
    pool.spawn_trail(400.0, 10.0);
    let floor = 600.0 - special_day::particles::FLOOR_MARGIN;
    for _ in 0..120 {
        pool.step(0.016, 800.0, 600.0);
        for p in pool.particles().iter().filter(|p| p.active && !p.ambient) {
            assert!(p.y <= floor + 1e-6, "particle sank through the floor: y={}", p.y);
        }
    }
}
