//! Time-based interpolation utility.
//!
//! Every animated value in the experience — curtain offsets, the section
//! track, content fades, the gate's terminal fly-off — is a [`Tween`] sampled
//! from the single animation-frame loop. Easings mirror the curves the visual
//! design was authored against (power2/power3/expo/back/elastic families).

/// Easing functions over normalized time `t` in [0,1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-in ("power2.in").
    QuadIn,
    /// Quadratic ease-out ("power2.out").
    QuadOut,
    QuadInOut,
    /// Cubic ease-in-out ("power3.inOut") — the main track slide.
    CubicInOut,
    /// Cubic ease-in ("power3.in") — the terminal curtain fly-off.
    CubicIn,
    ExpoOut,
    ExpoInOut,
    /// Overshooting ease-out; `overshoot` is the gsap-style back constant.
    BackOut { overshoot: f64 },
    /// Springy settle used by the curtain snap.
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Ease::CubicIn => t * t * t,
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - 4.0 * (1.0 - t).powi(3)
                }
            }
            Ease::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
            Ease::ExpoInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Ease::BackOut { overshoot } => {
                let u = t - 1.0;
                1.0 + u * u * ((overshoot + 1.0) * u + overshoot)
            }
            Ease::ElasticOut { amplitude, period } => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    let a = amplitude.max(1.0);
                    let p = period.max(0.1);
                    let s = p / std::f64::consts::TAU * (1.0 / a).asin();
                    a * 2.0_f64.powf(-10.0 * t)
                        * ((t - s) * std::f64::consts::TAU / p).sin()
                        + 1.0
                }
            }
        }
    }
}

/// A value animated from `from` to `to` over wall-clock milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self { from, to, start_ms, duration_ms, ease }
    }

    /// Normalized progress in [0,1]; a zero-duration tween is instantly done.
    pub fn fraction(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: f64) -> f64 {
        let eased = self.ease.apply(self.fraction(now_ms));
        self.from + (self.to - self.from) * eased
    }

    pub fn finished(&self, now_ms: f64) -> bool {
        self.fraction(now_ms) >= 1.0
    }
}
