//! Special Day core crate.
//!
//! A single-page Valentine's greeting rendered entirely from Rust/WASM: a
//! theatrical curtain-pull gate in front of six full-screen scenes navigated
//! by wheel, swipe or keyboard, with canvas cursor effects and background
//! music. `start_experience()` is the host page's single entry point; all
//! time-based behavior runs off one animation-frame loop.

use wasm_bindgen::prelude::*;

mod app;
pub mod audio;
pub mod cursor;
pub mod curtain;
pub mod nav;
pub mod particles;
pub mod scenes;
pub mod tween;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Palette (shared by DOM styling and canvas drawing)
// -----------------------------------------------------------------------------

pub const ROSE_DEEP: &str = "#D7263D";
pub const PINK_SOFT: &str = "#FFB7C5";
pub const GOLD: &str = "#FFD166";
pub const CHARCOAL: &str = "#222228";

/// Particle / accent colors cycled by the effects layer.
pub const ACCENT_COLORS: &[&str] = &[
    "#D7263D", "#FFB7C5", "#FFD166", "#ff6b8a", "#ff9eb5", "#ffc2d1",
];

// -----------------------------------------------------------------------------
// Bengali text helpers
// -----------------------------------------------------------------------------

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Replace ASCII digits with their Bengali counterparts; everything else is
/// passed through untouched.
pub fn to_bengali_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => BENGALI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Two-digit Bengali counter like "০৩ / ০৬" used by the section chrome.
pub fn bengali_counter(current: usize, total: usize) -> String {
    to_bengali_digits(&format!("{:02} / {:02}", current, total))
}

fn is_bengali_combining(c: char) -> bool {
    matches!(c,
        '\u{0981}'..='\u{0983}'   // candrabindu, anusvara, visarga
        | '\u{09BC}'              // nukta
        | '\u{09BE}'..='\u{09C4}' // vowel signs
        | '\u{09C7}'..='\u{09C8}'
        | '\u{09CB}'..='\u{09CD}' // incl. virama
        | '\u{09D7}'              // au length mark
        | '\u{200C}' | '\u{200D}')
}

/// Split text into display clusters so the per-character stagger animation
/// never tears a Bengali conjunct apart. Combining signs stick to the
/// preceding cluster, and a virama glues the following consonant on as well.
pub fn split_graphemes(text: &str) -> Vec<String> {
    let mut clusters: Vec<String> = Vec::new();
    let mut join_next = false;
    for c in text.chars() {
        let attach = join_next || (is_bengali_combining(c) && !clusters.is_empty());
        if attach {
            match clusters.last_mut() {
                Some(last) => last.push(c),
                None => clusters.push(c.to_string()),
            }
        } else {
            clusters.push(c.to_string());
        }
        join_next = c == '\u{09CD}' || c == '\u{200D}';
    }
    clusters
}

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Mount the whole experience onto `document.body` and start the frame loop.
#[wasm_bindgen]
pub fn start_experience() -> Result<(), JsValue> {
    app::start()
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Cheap decorative randomness (not crypto secure): LCG step seeded from the
/// high-resolution clock, same idiom the canvas effects use per frame.
pub(crate) fn rand_unit(salt: u64) -> f64 {
    let now = performance_now() as u64;
    let mixed = now
        .wrapping_add(salt.wrapping_mul(0x9E37_79B9))
        .wrapping_mul(1664525)
        .wrapping_add(1013904223);
    (mixed % 10_000) as f64 / 10_000.0
}
