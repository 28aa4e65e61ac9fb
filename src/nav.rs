//! Section navigation state machine and input normalization.
//!
//! The journey is six fixed full-screen sections on a horizontal track.
//! Exactly one transition is ever in flight: requests arriving while the
//! machine is locked, out of bounds, or targeting the current index are
//! dropped silently. Wheel ticks, swipes and arrow keys are normalized into
//! advance/retreat signals before they reach the machine.

/// Static descriptor for one section of the journey.
#[derive(Clone, Copy, Debug)]
pub struct SectionDesc {
    pub id: &'static str,
    /// Short glyph shown in the dot rail tooltip area.
    pub label: &'static str,
    /// Bengali display name.
    pub name: &'static str,
}

pub static SECTIONS: [SectionDesc; 6] = [
    SectionDesc { id: "hero", label: "♡", name: "স্বাগতম" },
    SectionDesc { id: "letter", label: "✉", name: "চিঠি" },
    SectionDesc { id: "stars", label: "★", name: "স্মৃতি" },
    SectionDesc { id: "quiz", label: "🧩", name: "খেলা" },
    SectionDesc { id: "card", label: "❤", name: "কার্ড" },
    SectionDesc { id: "footer", label: "💕", name: "চিরদিন" },
];

/// Index of the dark starfield section; the chrome recolors there.
pub const STARS_SECTION: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// An accepted navigation request. `direction` is +1 when moving right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: i8,
}

/// Current index plus the single-transition lock. Index changes only through
/// the `go_to` → `complete` path.
#[derive(Debug)]
pub struct Navigator {
    current: usize,
    pending: Option<usize>,
    count: usize,
}

impl Navigator {
    pub fn new(count: usize) -> Self {
        assert!(count > 0);
        Self { current: 0, pending: None, count }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Request a transition. Returns `None` (state unchanged) when the index
    /// is out of range, equal to the current one, or a transition is already
    /// in flight.
    pub fn go_to(&mut self, index: usize) -> Option<Transition> {
        if self.pending.is_some() || index >= self.count || index == self.current {
            return None;
        }
        self.pending = Some(index);
        Some(Transition {
            from: self.current,
            to: index,
            direction: if index > self.current { 1 } else { -1 },
        })
    }

    pub fn next(&mut self) -> Option<Transition> {
        if self.is_transitioning() {
            return None;
        }
        self.go_to(self.current + 1)
    }

    pub fn prev(&mut self) -> Option<Transition> {
        if self.is_transitioning() || self.current == 0 {
            return None;
        }
        self.go_to(self.current - 1)
    }

    pub fn advance(&mut self, dir: Direction) -> Option<Transition> {
        match dir {
            Direction::Forward => self.next(),
            Direction::Backward => self.prev(),
        }
    }

    /// Commit the in-flight transition and unlock. No-op when idle.
    pub fn complete(&mut self) {
        if let Some(target) = self.pending.take() {
            self.current = target;
        }
    }
}

// -----------------------------------------------------------------------------
// Input normalization
// -----------------------------------------------------------------------------

/// Minimum wheel delta magnitude treated as an intentional scroll.
pub const WHEEL_THRESHOLD: f64 = 24.0;
/// Quiet window after an accepted wheel event; inertial ticks from the same
/// physical gesture land here and are dropped.
pub const WHEEL_COOLDOWN_MS: f64 = 900.0;
/// Minimum touch travel (px, dominant axis) recognized as a swipe.
pub const SWIPE_MIN_TRAVEL: f64 = 50.0;

/// Debounces raw wheel deltas into at most one advance/retreat signal per
/// cooldown window.
#[derive(Debug)]
pub struct WheelGate {
    threshold: f64,
    cooldown_ms: f64,
    last_accept_ms: f64,
}

impl Default for WheelGate {
    fn default() -> Self {
        Self::new(WHEEL_THRESHOLD, WHEEL_COOLDOWN_MS)
    }
}

impl WheelGate {
    pub fn new(threshold: f64, cooldown_ms: f64) -> Self {
        Self { threshold, cooldown_ms, last_accept_ms: f64::NEG_INFINITY }
    }

    pub fn accept(&mut self, delta: f64, now_ms: f64) -> Option<Direction> {
        if delta.abs() < self.threshold {
            return None;
        }
        if now_ms - self.last_accept_ms < self.cooldown_ms {
            return None;
        }
        self.last_accept_ms = now_ms;
        Some(if delta > 0.0 { Direction::Forward } else { Direction::Backward })
    }
}

/// Classify a completed touch gesture by its dominant axis. Leftward and
/// upward swipes advance (natural scroll feel); short gestures are ignored.
pub fn swipe_direction(dx: f64, dy: f64) -> Option<Direction> {
    let (abs_dx, abs_dy) = (dx.abs(), dy.abs());
    if abs_dx.max(abs_dy) < SWIPE_MIN_TRAVEL {
        return None;
    }
    let dominant = if abs_dx > abs_dy { dx } else { dy };
    Some(if dominant < 0.0 { Direction::Forward } else { Direction::Backward })
}

/// Arrow-key mapping; other keys are ignored.
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowRight" | "ArrowDown" => Some(Direction::Forward),
        "ArrowLeft" | "ArrowUp" => Some(Direction::Backward),
        _ => None,
    }
}
