//! Secret letter scene: an envelope button opens a modal where the message
//! types itself out character by character.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{child, replay_chars, split_text_spans};

pub const MESSAGE_LINES: [&str; 5] = [
    "ভালোবাসাবাসির জন্য অনন্তকালের প্রয়োজন নেই,",
    "একটি মুহূর্তই যথেষ্ট।",
    "সেই মুহূর্তটা আমি তোমাকেই দিতে চাই।",
    "",
    "সারাটা জীবন আমার পাশে থেকো।",
];

pub const LETTER_TITLE: &str = "তোমার জন্য চিঠি";
pub const LETTER_LEAD: &str = "কিছু কথা ধীরে পড়লেই সবচেয়ে বেশি ছুঁয়ে যায়";
pub const LETTER_SIGNOFF: &str = "— ভালোবাসা রইলো, সবসময় 💕";

/// Base typing cadence; each character adds a jitter on top so the rhythm
/// feels hand-typed.
pub const TYPE_BASE_MS: f64 = 55.0;
pub const TYPE_JITTER_MS: f64 = 25.0;
const TYPE_START_DELAY_MS: f64 = 500.0;

/// Pure typewriter: reveals one grapheme cluster at a time on a jittered
/// schedule. Drives the modal body from the frame loop.
#[derive(Debug)]
pub struct Typewriter {
    clusters: Vec<String>,
    shown: usize,
    next_at_ms: f64,
}

impl Typewriter {
    pub fn new(text: &str, now_ms: f64) -> Self {
        Self {
            clusters: crate::split_graphemes(text),
            shown: 0,
            next_at_ms: now_ms + TYPE_START_DELAY_MS,
        }
    }

    pub fn full_text() -> String {
        MESSAGE_LINES.join("\n")
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.clusters.len()
    }

    pub fn visible(&self) -> String {
        self.clusters[..self.shown].concat()
    }

    /// Advance to `now_ms`; returns true when the visible text changed.
    /// `jitter` in [0,1) scales the per-character delay spread.
    pub fn tick(&mut self, now_ms: f64, jitter: f64) -> bool {
        let mut changed = false;
        while !self.is_done() && now_ms >= self.next_at_ms {
            self.shown += 1;
            self.next_at_ms += TYPE_BASE_MS + jitter.clamp(0.0, 1.0) * TYPE_JITTER_MS;
            changed = true;
        }
        changed
    }
}

pub(crate) fn build(doc: &Document, content: &Element) -> Result<(), JsValue> {
    let emblem = child(doc, content, "div", "letter-emblem heartbeat")?;
    emblem.set_text_content(Some("💌"));

    let title = child(doc, content, "h2", "letter-title")?;
    split_text_spans(doc, &title, LETTER_TITLE, 200.0, 20.0)?;

    let lead = child(doc, content, "p", "letter-lead")?;
    lead.set_text_content(Some(LETTER_LEAD));

    let open = child(doc, content, "button", "letter-open-btn")?;
    open.set_id("letter-open");
    open.set_text_content(Some("চিঠিটা খুলে দেখো"));

    let open_click = Closure::wrap(Box::new(move || {
        crate::app::with(|app| app.open_letter());
    }) as Box<dyn FnMut()>);
    open.add_event_listener_with_callback("click", open_click.as_ref().unchecked_ref())?;
    open_click.forget();
    Ok(())
}

/// Build the modal lazily on first open; returns the body element the
/// typewriter writes into.
pub(crate) fn open_modal(doc: &Document) -> Result<Element, JsValue> {
    close_modal(doc);
    let body_el = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let backdrop = doc.create_element("div")?;
    backdrop.set_class_name("letter-backdrop");
    backdrop.set_id("letter-backdrop");
    body_el.append_child(&backdrop)?;

    let modal = doc.create_element("div")?;
    modal.set_class_name("letter-modal");
    modal.set_id("letter-modal");
    body_el.append_child(&modal)?;

    let heading = child(doc, &modal, "h3", "")?;
    heading.set_text_content(Some("শুধু তোমার জন্য"));

    let text = child(doc, &modal, "div", "letter-body")?;
    text.set_id("letter-body");
    let sign = child(doc, &modal, "div", "letter-sign")?;
    sign.set_text_content(Some(LETTER_SIGNOFF));

    let close = child(doc, &modal, "button", "letter-close")?;
    close.set_text_content(Some("✕"));

    for target in [&backdrop, &close] {
        let cb = Closure::wrap(Box::new(move || {
            crate::app::with(|app| app.close_letter());
        }) as Box<dyn FnMut()>);
        target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(text)
}

/// Write the currently revealed text plus a blinking caret.
pub(crate) fn render_typed(doc: &Document, text: &str) {
    if let Some(body) = doc.get_element_by_id("letter-body") {
        body.set_text_content(Some(text));
        if let Ok(caret) = doc.create_element("span") {
            caret.set_class_name("typewriter-cursor");
            let _ = body.append_child(&caret);
        }
    }
}

pub(crate) fn close_modal(doc: &Document) {
    for id in ["letter-modal", "letter-backdrop"] {
        if let Some(el) = doc.get_element_by_id(id) {
            el.remove();
        }
    }
}

pub(crate) fn activate(doc: &Document) {
    if let Ok(Some(panel)) = doc.query_selector(".panel-letter .section-content") {
        replay_chars(&panel);
    }
    // keep type hint subtle: nothing else to start until the envelope opens
    let _ = doc
        .query_selector(".letter-open-btn")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.focus());
}
