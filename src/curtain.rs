//! Curtain-pull gate physics.
//!
//! The gate in front of the journey is a pair of velvet curtain panels the
//! visitor drags apart. Dragging fights resistance: raw pointer travel is
//! dampened by a fixed coefficient against a configured total pull distance,
//! and the last stretch eases against a cubic friction curve. Progress
//! accumulates across drag sessions — a release below the completion
//! threshold snaps the curtains back to the committed progress, never to
//! zero. Crossing the threshold completes the gate exactly once.
//!
//! The model here is pure (no DOM); `app` wires it to pointer/touch events
//! and renders offsets through the tween utility.

/// Total drag distance needed to fully open, as a fraction of viewport width.
pub const TOTAL_PULL_NEEDED_RATIO: f64 = 0.55;
/// Each dragged pixel only contributes this fraction of itself.
pub const DRAG_RESISTANCE: f64 = 0.35;
/// Cumulative progress at which release auto-completes the opening.
pub const AUTO_COMPLETE_THRESHOLD: f64 = 0.85;
/// How far each curtain panel travels at full progress (fraction of vw).
pub const CURTAIN_TRAVEL_RATIO: f64 = 0.52;
/// Weight of the release-velocity momentum boost.
pub const MOMENTUM_WEIGHT: f64 = 0.15;
/// Progress beyond which the secondary friction curve kicks in.
const RESISTANCE_START: f64 = 0.65;

/// Secondary non-linear resistance: identity up to [`RESISTANCE_START`], then
/// the remaining range eases in with a cubic ease-out so the gesture feels
/// like it is fighting increasing friction near full open.
pub fn apply_resistance(progress: f64) -> f64 {
    if progress <= RESISTANCE_START {
        return progress;
    }
    let range = 1.0 - RESISTANCE_START;
    let normalized = (progress - RESISTANCE_START) / range;
    let eased = 1.0 - (1.0 - normalized).powi(3);
    RESISTANCE_START + eased * range
}

/// Outcome of releasing a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// Not dragging, or the gate is already dismissed.
    Ignored,
    /// Below threshold: animate back to this committed cumulative progress.
    Snap(f64),
    /// Threshold reached: run the terminal opening. Fires at most once.
    Complete,
}

/// Gesture-driven progress model. Cumulative progress only advances through
/// committed session deltas at release; during a drag the session delta is
/// layered on top for live feedback without double-counting.
#[derive(Debug)]
pub struct CurtainPull {
    total_progress: f64,
    session_delta: f64,
    drag_start_x: f64,
    last_x: f64,
    last_time_ms: f64,
    velocity: f64,
    dragging: bool,
    dismissed: bool,
}

impl Default for CurtainPull {
    fn default() -> Self {
        Self::new()
    }
}

impl CurtainPull {
    pub fn new() -> Self {
        Self {
            total_progress: 0.0,
            session_delta: 0.0,
            drag_start_x: 0.0,
            last_x: 0.0,
            last_time_ms: 0.0,
            velocity: 0.0,
            dragging: false,
            dismissed: false,
        }
    }

    /// Committed cumulative progress in [0,1].
    pub fn progress(&self) -> f64 {
        self.total_progress
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn drag_start(&mut self, x: f64, now_ms: f64) {
        if self.dismissed || self.dragging {
            return;
        }
        self.dragging = true;
        self.drag_start_x = x;
        self.last_x = x;
        self.last_time_ms = now_ms;
        self.session_delta = 0.0;
        self.velocity = 0.0;
    }

    /// Advance the live drag. Returns the display progress (after the
    /// friction curve) to render, or `None` when the move is ignored.
    pub fn drag_move(&mut self, x: f64, now_ms: f64, viewport_w: f64) -> Option<f64> {
        if !self.dragging || self.dismissed {
            return None;
        }
        let dt = now_ms - self.last_time_ms;
        if dt > 0.0 {
            // Average speed over the last sampled interval, px/ms.
            self.velocity = (x - self.last_x) / dt;
            self.last_time_ms = now_ms;
        }
        self.last_x = x;

        let total_needed = (viewport_w * TOTAL_PULL_NEEDED_RATIO).max(1.0);
        let abs_dx = (x - self.drag_start_x).abs();
        self.session_delta = (abs_dx * DRAG_RESISTANCE) / total_needed;

        let raw = (self.total_progress + self.session_delta).clamp(0.0, 1.0);
        Some(apply_resistance(raw))
    }

    pub fn drag_end(&mut self) -> Release {
        if !self.dragging || self.dismissed {
            return Release::Ignored;
        }
        self.dragging = false;

        let momentum = self.velocity.abs() * MOMENTUM_WEIGHT;
        self.total_progress =
            (self.total_progress + self.session_delta + momentum).clamp(0.0, 1.0);
        self.session_delta = 0.0;
        self.velocity = 0.0;

        if self.total_progress >= AUTO_COMPLETE_THRESHOLD {
            self.dismissed = true;
            Release::Complete
        } else {
            Release::Snap(self.total_progress)
        }
    }
}

// -----------------------------------------------------------------------------
// Gate presentation phases
// -----------------------------------------------------------------------------

/// Theatrical phase sequence, timed from gate mount:
/// dark → spotlight line → lights on (curtains revealed) → pulling enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum GatePhase {
    Dark,
    Spotlight,
    Lights,
    Pulling,
}

const SPOTLIGHT_AT_MS: f64 = 1_000.0;
const LIGHTS_AT_MS: f64 = 4_600.0;
const PULLING_AT_MS: f64 = 6_400.0;

pub fn phase_at(elapsed_ms: f64) -> GatePhase {
    if elapsed_ms < SPOTLIGHT_AT_MS {
        GatePhase::Dark
    } else if elapsed_ms < LIGHTS_AT_MS {
        GatePhase::Spotlight
    } else if elapsed_ms < PULLING_AT_MS {
        GatePhase::Lights
    } else {
        GatePhase::Pulling
    }
}

// -----------------------------------------------------------------------------
// Toy name bypass
// -----------------------------------------------------------------------------

/// Who this page is for. Typing her name on the gate opens it straight away.
pub const RECIPIENT_NAME: &str = "popy";

/// Trivial client-side check, intentionally not a security boundary: the
/// recipient's name or "admin" skips the pull.
pub fn recognizes_name(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.eq_ignore_ascii_case(RECIPIENT_NAME) || trimmed.eq_ignore_ascii_case("admin")
}
