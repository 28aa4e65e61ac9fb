//! Footer scene: a pulsing heart and the closing line.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::{child, replay_chars, split_text_spans};

pub const CLOSING_LINE: &str = "এই গল্পটা এখানেই শেষ না।";
pub const ELLIPSIS: &str = "• • •";

pub(crate) fn build(doc: &Document, content: &Element) -> Result<(), JsValue> {
    let emblem = child(doc, content, "div", "hero-emblem heartbeat")?;
    emblem.set_text_content(Some("❤️"));

    let line = child(doc, content, "p", "footer-line")?;
    split_text_spans(doc, &line, CLOSING_LINE, 300.0, 45.0)?;

    let dots = child(doc, content, "div", "footer-dots")?;
    dots.set_text_content(Some(ELLIPSIS));
    Ok(())
}

pub(crate) fn activate(doc: &Document) {
    if let Ok(Some(panel)) = doc.query_selector(".panel-footer .section-content") {
        replay_chars(&panel);
    }
}
