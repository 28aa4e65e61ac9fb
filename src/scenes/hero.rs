//! Hero scene: heartbeat emblem, staggered Bengali title, scroll hint.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{child, replay_chars, split_text_spans};

pub const RECIPIENT_DISPLAY: &str = "Popy";
pub const TITLE_WORDS: [&str; 3] = ["একটা", "গল্প", "চলছে…"];
pub const SUBTITLE: &str = "আজ তার আরেকটা অধ্যায়।";
pub const SCROLL_HINT: &str = "স্ক্রল করো";

/// Strongest parallax tilt, reached with the cursor at a viewport edge.
pub const MAX_TILT_DEG: f64 = 7.0;

/// Parallax tilt `(rotate_x, rotate_y)` in degrees for a cursor at `(x, y)`
/// inside a `w` × `h` viewport. Zero at the center; off-viewport positions
/// clamp to the edge tilt.
pub fn tilt_for(x: f64, y: f64, w: f64, h: f64) -> (f64, f64) {
    if w <= 0.0 || h <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = (x / w - 0.5).clamp(-0.5, 0.5);
    let ny = (y / h - 0.5).clamp(-0.5, 0.5);
    (-ny * 2.0 * MAX_TILT_DEG, nx * 2.0 * MAX_TILT_DEG)
}

/// Deterministic decorative particle placement; same formulae every mount so
/// the backdrop is stable across visits.
pub fn deco_particles() -> Vec<(f64, f64, f64, usize, f64, f64, f64)> {
    (0..50)
        .map(|i| {
            let i = i as f64;
            let size = 4.0 + ((i * 3.0 + 2.0) % 10.0);
            let left = (i * 37.0 + 7.0) % 100.0;
            let top = (i * 47.0 + 11.0) % 100.0;
            let color_idx = (i as usize) % 3;
            let opacity = 0.12 + ((i * 7.0) % 5.0) * 0.04;
            let duration_s = 3.0 + ((i * 11.0) % 5.0);
            let delay_s = (i * 0.6) % 3.0;
            (size, left, top, color_idx, opacity, duration_s, delay_s)
        })
        .collect()
}

pub(crate) fn build(doc: &Document, content: &Element) -> Result<(), JsValue> {
    for (size, left, top, color_idx, opacity, duration_s, delay_s) in deco_particles() {
        let deco = child(doc, content, "div", "deco-float")?;
        let color = [crate::ROSE_DEEP, crate::PINK_SOFT, crate::GOLD][color_idx];
        if let Some(el) = deco.dyn_ref::<HtmlElement>() {
            let style = el.style();
            style.set_property("width", &format!("{size}px"))?;
            style.set_property("height", &format!("{size}px"))?;
            style.set_property("left", &format!("{left}%"))?;
            style.set_property("top", &format!("{top}%"))?;
            style.set_property("background", color)?;
            style.set_property("opacity", &opacity.to_string())?;
            style.set_property("animation-duration", &format!("{duration_s}s"))?;
            style.set_property("animation-delay", &format!("{delay_s}s"))?;
        }
    }

    let emblem = child(doc, content, "div", "hero-emblem heartbeat")?;
    emblem.set_text_content(Some("💕"));

    let name = child(doc, content, "div", "hero-name")?;
    split_text_spans(doc, &name, RECIPIENT_DISPLAY, 200.0, 30.0)?;

    let title = child(doc, content, "h1", "hero-title")?;
    let mut delay = 350.0;
    for word in TITLE_WORDS {
        split_text_spans(doc, &title, word, delay, 30.0)?;
        let gap = child(doc, &title, "span", "")?;
        gap.set_text_content(Some(" "));
        delay += word.chars().count() as f64 * 30.0 + 120.0;
    }

    let subtitle = child(doc, content, "p", "hero-subtitle")?;
    subtitle.set_id("hero-subtitle");
    subtitle.set_text_content(Some(SUBTITLE));

    let hint = child(doc, &subtitle, "div", "scroll-hint")?;
    child(doc, &hint, "div", "rule")?;
    let label = child(doc, &hint, "span", "")?;
    label.set_text_content(Some(SCROLL_HINT));
    child(doc, &hint, "div", "rule")?;
    Ok(())
}

pub(crate) fn activate(doc: &Document) {
    if let Ok(Some(panel)) = doc.query_selector(".panel-hero .section-content") {
        replay_chars(&panel);
    }
    if let Some(subtitle) = doc.get_element_by_id("hero-subtitle") {
        let _ = subtitle.class_list().add_1("lit");
    }
}
