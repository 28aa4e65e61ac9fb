//! Custom cursor layer: the native cursor is hidden and replaced by a dot
//! pinned to the pointer plus a ring that glides after it, growing over
//! interactive elements. The layer opts out entirely on coarse pointers
//! (touch devices) and when the visitor prefers reduced motion.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

/// Elements the ring grows over.
pub const INTERACTIVE_SELECTOR: &str = "button, a, [role='button']";
/// Fraction of the remaining distance the ring covers per frame.
pub const RING_FOLLOW: f64 = 0.18;

/// Pure trailing-ring motion: exponential approach toward the pointer, one
/// step per frame. The first sample snaps so the ring never sweeps in from
/// the origin.
#[derive(Debug)]
pub struct RingGlide {
    x: f64,
    y: f64,
    placed: bool,
}

impl Default for RingGlide {
    fn default() -> Self {
        Self::new()
    }
}

impl RingGlide {
    pub fn new() -> Self {
        Self { x: 0.0, y: 0.0, placed: false }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Advance one frame toward `(tx, ty)` and return the new position.
    pub fn step(&mut self, tx: f64, ty: f64) -> (f64, f64) {
        if self.placed {
            self.x += (tx - self.x) * RING_FOLLOW;
            self.y += (ty - self.y) * RING_FOLLOW;
        } else {
            self.placed = true;
            self.x = tx;
            self.y = ty;
        }
        (self.x, self.y)
    }
}

/// The mounted dot/ring pair. `None` from [`CursorLayer::mount`] means the
/// device opted out and the native cursor stays.
pub(crate) struct CursorLayer {
    dot: HtmlElement,
    ring: HtmlElement,
    glide: RingGlide,
    grown: bool,
}

impl CursorLayer {
    pub(crate) fn mount(doc: &Document, body: &HtmlElement) -> Result<Option<Self>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        if opts_out(&window) {
            return Ok(None);
        }
        let dot: HtmlElement = doc.create_element("div")?.dyn_into()?;
        dot.set_class_name("cursor-dot");
        body.append_child(&dot)?;
        let ring: HtmlElement = doc.create_element("div")?.dyn_into()?;
        ring.set_class_name("cursor-ring");
        body.append_child(&ring)?;
        body.class_list().add_1("custom-cursor")?;
        Ok(Some(Self { dot, ring, glide: RingGlide::new(), grown: false }))
    }

    /// Pin the dot to the pointer; grow the ring over interactive targets.
    pub(crate) fn pointer_moved(&mut self, x: f64, y: f64, interactive: bool) {
        let _ = self
            .dot
            .style()
            .set_property("transform", &format!("translate({x}px, {y}px)"));
        if interactive != self.grown {
            self.grown = interactive;
            let list = self.ring.class_list();
            let _ = if interactive { list.add_1("grow") } else { list.remove_1("grow") };
        }
    }

    /// Per-frame ring glide toward the last pointer position.
    pub(crate) fn frame(&mut self, target_x: f64, target_y: f64) {
        let (x, y) = self.glide.step(target_x, target_y);
        let _ = self
            .ring
            .style()
            .set_property("transform", &format!("translate({x}px, {y}px)"));
    }
}

/// Coarse pointers get their native cursor; reduced-motion visitors skip the
/// trailing ring animation entirely.
fn opts_out(window: &Window) -> bool {
    for query in ["(pointer: coarse)", "(prefers-reduced-motion: reduce)"] {
        if let Ok(Some(mq)) = window.match_media(query) {
            if mq.matches() {
                return true;
            }
        }
    }
    false
}
