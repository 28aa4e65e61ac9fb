//! Decorative canvas effects: cursor drop shapes, click bursts, ambient
//! drifting hearts.
//!
//! Everything renders on one fixed full-screen canvas. Particles live in a
//! fixed-size pool so steady cursor movement never allocates; the physics
//! step is pure and runs the same on native (for tests) and wasm.

use web_sys::CanvasRenderingContext2d;

pub const POOL_SIZE: usize = 100;
/// Minimum cursor travel before a trail spawn.
pub const SPAWN_DISTANCE: f64 = 16.0;
/// Particles per trail spawn.
pub const SPAWN_COUNT: usize = 3;
/// Heart count in a click burst.
pub const BURST_COUNT: usize = 8;
/// Distance from the bottom of the viewport acting as the floor.
pub const FLOOR_MARGIN: f64 = 30.0;
/// Energy retained after a floor bounce.
pub const BOUNCE_DAMPING: f64 = 0.45;
/// Horizontal friction applied on floor contact.
pub const FLOOR_FRICTION: f64 = 0.92;
/// Bounces after which a particle starts to fade out.
pub const MAX_BOUNCES: u32 = 3;
/// Ambient background hearts drifting upward.
pub const AMBIENT_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Heart,
    Star,
    Circle,
    Diamond,
}

const SHAPES: [ShapeKind; 4] = [
    ShapeKind::Heart,
    ShapeKind::Star,
    ShapeKind::Circle,
    ShapeKind::Diamond,
];

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub size: f64,
    pub opacity: f64,
    pub life: f64,
    pub max_life: f64,
    pub shape: ShapeKind,
    pub color_idx: usize,
    pub gravity: f64,
    pub bounce_count: u32,
    pub active: bool,
    /// Ambient hearts ignore gravity and wrap at the top instead of dying.
    pub ambient: bool,
}

impl Particle {
    fn idle() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            size: 0.0,
            opacity: 0.0,
            life: 0.0,
            max_life: 0.0,
            shape: ShapeKind::Heart,
            color_idx: 0,
            gravity: 0.0,
            bounce_count: 0,
            active: false,
            ambient: false,
        }
    }
}

/// Fixed pool of particles plus a tiny deterministic RNG for spawn variety.
pub struct ParticlePool {
    particles: Vec<Particle>,
    rng_state: u64,
}

impl ParticlePool {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: vec![Particle::idle(); POOL_SIZE],
            rng_state: seed | 1,
        }
    }

    /// LCG in [0,1); deterministic per pool so tests can replay spawns.
    fn next_unit(&mut self) -> f64 {
        self.rng_state = self
            .rng_state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.rng_state >> 33) % 10_000) as f64 / 10_000.0
    }

    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.active).count()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn claim(&mut self) -> Option<usize> {
        self.particles.iter().position(|p| !p.active)
    }

    /// Seed the slow ambient hearts drifting up the page.
    pub fn spawn_ambient(&mut self, width: f64, height: f64) {
        for _ in 0..AMBIENT_COUNT {
            let (x, y) = (self.next_unit() * width, self.next_unit() * height);
            let (size, vy) = (12.0 + self.next_unit() * 24.0, -(8.0 + self.next_unit() * 14.0));
            let (drift, opacity) = (self.next_unit() * 12.0 - 6.0, 0.15 + self.next_unit() * 0.25);
            let color = (self.next_unit() * 6.0) as usize;
            if let Some(i) = self.claim() {
                self.particles[i] = Particle {
                    x,
                    y,
                    vx: drift,
                    vy,
                    rotation: 0.0,
                    rotation_speed: 0.0,
                    size,
                    opacity,
                    life: 0.0,
                    max_life: f64::INFINITY,
                    shape: ShapeKind::Heart,
                    color_idx: color.min(5),
                    gravity: 0.0,
                    bounce_count: 0,
                    active: true,
                    ambient: true,
                };
            }
        }
    }

    /// Trail spawn at the cursor: a few shapes tossed upward that then fall
    /// and bounce on the floor.
    pub fn spawn_trail(&mut self, x: f64, y: f64) {
        for _ in 0..SPAWN_COUNT {
            let shape = SHAPES[(self.next_unit() * 4.0) as usize % 4];
            let vx = self.next_unit() * 160.0 - 80.0;
            let vy = -(self.next_unit() * 120.0 + 40.0);
            let size = 8.0 + self.next_unit() * 10.0;
            let rot_speed = self.next_unit() * 6.0 - 3.0;
            let max_life = 2.2 + self.next_unit() * 1.4;
            let color = (self.next_unit() * 6.0) as usize;
            if let Some(i) = self.claim() {
                self.particles[i] = Particle {
                    x,
                    y,
                    vx,
                    vy,
                    rotation: 0.0,
                    rotation_speed: rot_speed,
                    size,
                    opacity: 0.9,
                    life: 0.0,
                    max_life,
                    shape,
                    color_idx: color.min(5),
                    gravity: 560.0,
                    bounce_count: 0,
                    active: true,
                    ambient: false,
                };
            }
        }
    }

    /// Radial burst of hearts from a click/tap.
    pub fn spawn_burst(&mut self, x: f64, y: f64) {
        for i in 0..BURST_COUNT {
            let angle = (i as f64 / BURST_COUNT as f64) * std::f64::consts::TAU;
            let dist = 90.0 + self.next_unit() * 120.0;
            let color = (self.next_unit() * 6.0) as usize;
            if let Some(slot) = self.claim() {
                self.particles[slot] = Particle {
                    x,
                    y,
                    vx: angle.cos() * dist,
                    vy: angle.sin() * dist,
                    rotation: angle,
                    rotation_speed: 0.0,
                    size: 10.0 + self.next_unit() * 6.0,
                    opacity: 0.9,
                    life: 0.0,
                    max_life: 0.8,
                    shape: ShapeKind::Heart,
                    color_idx: color.min(5),
                    gravity: 0.0,
                    bounce_count: 0,
                    active: true,
                    ambient: false,
                };
            }
        }
    }

    /// Advance physics by `dt` seconds inside a `width` × `height` viewport.
    pub fn step(&mut self, dt: f64, width: f64, height: f64) {
        let floor = height - FLOOR_MARGIN;
        for p in &mut self.particles {
            if !p.active {
                continue;
            }
            if p.ambient {
                p.x += p.vx * dt;
                p.y += p.vy * dt;
                // Gentle sway and wrap back to the bottom.
                if p.y < -p.size {
                    p.y = height + p.size;
                }
                if p.x < -p.size {
                    p.x = width + p.size;
                } else if p.x > width + p.size {
                    p.x = -p.size;
                }
                continue;
            }

            p.life += dt;
            p.vy += p.gravity * dt;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.rotation += p.rotation_speed * dt;

            if p.gravity > 0.0 && p.y >= floor && p.vy > 0.0 {
                p.y = floor;
                p.vy = -p.vy * BOUNCE_DAMPING;
                p.vx *= FLOOR_FRICTION;
                p.bounce_count += 1;
            }

            let fading = p.life >= p.max_life || p.bounce_count > MAX_BOUNCES;
            if fading {
                p.opacity -= 2.4 * dt;
            }
            if p.opacity <= 0.0 || p.x < -60.0 || p.x > width + 60.0 {
                p.active = false;
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Canvas drawing
// -----------------------------------------------------------------------------

fn trace_heart(ctx: &CanvasRenderingContext2d, size: f64) {
    let s = size * 0.5;
    ctx.begin_path();
    ctx.move_to(0.0, s * 0.3);
    ctx.bezier_curve_to(-s, -s * 0.5, -s, s * 0.6, 0.0, s);
    ctx.bezier_curve_to(s, s * 0.6, s, -s * 0.5, 0.0, s * 0.3);
    ctx.close_path();
    ctx.fill();
}

fn trace_star(ctx: &CanvasRenderingContext2d, size: f64) {
    let spikes = 5;
    let outer = size * 0.5;
    let inner = outer * 0.4;
    ctx.begin_path();
    for i in 0..(spikes * 2) {
        let r = if i % 2 == 0 { outer } else { inner };
        let angle = (i as f64 * std::f64::consts::PI) / spikes as f64
            - std::f64::consts::FRAC_PI_2;
        let (x, y) = (angle.cos() * r, angle.sin() * r);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
    ctx.fill();
}

fn trace_circle(ctx: &CanvasRenderingContext2d, size: f64) {
    ctx.begin_path();
    ctx.arc(0.0, 0.0, size * 0.35, 0.0, std::f64::consts::TAU).ok();
    ctx.fill();
}

fn trace_diamond(ctx: &CanvasRenderingContext2d, size: f64) {
    let s = size * 0.45;
    ctx.begin_path();
    ctx.move_to(0.0, -s);
    ctx.line_to(s * 0.6, 0.0);
    ctx.line_to(0.0, s);
    ctx.line_to(-s * 0.6, 0.0);
    ctx.close_path();
    ctx.fill();
}

/// Draw every live particle. The caller clears the canvas first.
pub fn render(ctx: &CanvasRenderingContext2d, pool: &ParticlePool) {
    for p in pool.particles() {
        if !p.active {
            continue;
        }
        ctx.save();
        let _ = ctx.translate(p.x, p.y);
        let _ = ctx.rotate(p.rotation);
        ctx.set_global_alpha(p.opacity.clamp(0.0, 1.0));
        let color = crate::ACCENT_COLORS[p.color_idx % crate::ACCENT_COLORS.len()];
        ctx.set_fill_style_str(color);
        match p.shape {
            ShapeKind::Heart => trace_heart(ctx, p.size),
            ShapeKind::Star => trace_star(ctx, p.size),
            ShapeKind::Circle => trace_circle(ctx, p.size),
            ShapeKind::Diamond => trace_diamond(ctx, p.size),
        }
        ctx.restore();
    }
    ctx.set_global_alpha(1.0);
}
