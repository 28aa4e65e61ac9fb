//! Card scene: a keepsake card rendered with canvas primitives (gradient,
//! hearts, the collected quiz answers) and offered as a PNG download.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlAnchorElement, HtmlCanvasElement,
};

use super::{child, replay_chars, split_text_spans};

pub const CARD_TITLE: &str = "Our Valentine Card";
pub const CARD_LEAD: &str = "Take a piece of this moment with you";
const CARD_HEADLINE: &str = "Popy 💕";
const CARD_FOOTNOTE: &str = "ভালোবাসা রইলো, সবসময়";

// Rendered at 2x for a crisp download.
const CARD_W: u32 = 640;
const CARD_H: u32 = 880;

pub(crate) fn build(doc: &Document, content: &Element) -> Result<(), JsValue> {
    let title = child(doc, content, "h2", "card-title")?;
    split_text_spans(doc, &title, CARD_TITLE, 200.0, 40.0)?;
    let lead = child(doc, content, "p", "card-lead")?;
    lead.set_text_content(Some(CARD_LEAD));

    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    canvas.set_id("keepsake-canvas");
    canvas.set_class_name("card-canvas");
    canvas.set_width(CARD_W);
    canvas.set_height(CARD_H);
    content.append_child(&canvas)?;

    let download = child(doc, content, "button", "card-download")?;
    download.set_text_content(Some("কার্ডটা রেখে দাও 💾"));
    let cb = Closure::wrap(Box::new(move || {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = trigger_download(&doc);
        }
    }) as Box<dyn FnMut()>);
    download.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();

    draw_card(doc, &[])?;
    Ok(())
}

/// Paint the keepsake onto the canvas. Called again whenever the quiz hands
/// over a fresh answer set.
pub(crate) fn draw_card(doc: &Document, answers: &[&str]) -> Result<(), JsValue> {
    let Some(el) = doc.get_element_by_id("keepsake-canvas") else {
        return Ok(());
    };
    let canvas: HtmlCanvasElement = el.dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    let (w, h) = (CARD_W as f64, CARD_H as f64);

    let bg = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    bg.add_color_stop(0.0, "#FFF8F0")?;
    bg.add_color_stop(0.55, "#FFE4EA")?;
    bg.add_color_stop(1.0, "#FFD3DE")?;
    ctx.set_fill_style_canvas_gradient(&bg);
    ctx.fill_rect(0.0, 0.0, w, h);

    // Soft border frame
    ctx.set_stroke_style_str("rgba(215,38,61,0.35)");
    ctx.set_line_width(4.0);
    ctx.stroke_rect(24.0, 24.0, w - 48.0, h - 48.0);

    ctx.set_text_align("center");
    ctx.set_fill_style_str(crate::ROSE_DEEP);
    ctx.set_font("bold 64px 'Hind Siliguri', serif");
    ctx.fill_text("💕", w / 2.0, 150.0).ok();
    ctx.set_font("bold 52px 'Hind Siliguri', serif");
    ctx.fill_text(CARD_HEADLINE, w / 2.0, 240.0).ok();

    ctx.set_fill_style_str("rgba(34,34,40,0.55)");
    ctx.set_font("italic 26px 'Hind Siliguri', serif");
    ctx.fill_text("১৪ ফেব্রুয়ারি", w / 2.0, 295.0).ok();

    // Collected quiz answers as the card body
    ctx.set_font("24px 'Hind Siliguri', serif");
    let mut y = 390.0;
    if answers.is_empty() {
        ctx.set_fill_style_str("rgba(34,34,40,0.4)");
        ctx.fill_text("আগে খেলাটা খেলে এসো…", w / 2.0, y).ok();
    } else {
        for (i, answer) in answers.iter().enumerate() {
            let color = if i % 2 == 0 { crate::ROSE_DEEP } else { "rgba(34,34,40,0.7)" };
            ctx.set_fill_style_str(color);
            for line in wrap_text(answer, 26) {
                ctx.fill_text(&format!("❝ {line} ❞"), w / 2.0, y).ok();
                y += 40.0;
            }
            y += 18.0;
        }
    }

    ctx.set_fill_style_str("rgba(215,38,61,0.5)");
    ctx.set_font("italic 24px 'Hind Siliguri', serif");
    ctx.fill_text(CARD_FOOTNOTE, w / 2.0, h - 70.0).ok();
    Ok(())
}

/// Greedy line wrap on spaces; canvas has no text layout of its own.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate_len = current.chars().count() + 1 + word.chars().count();
        if !current.is_empty() && candidate_len > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn trigger_download(doc: &Document) -> Result<(), JsValue> {
    let Some(el) = doc.get_element_by_id("keepsake-canvas") else {
        return Ok(());
    };
    let canvas: HtmlCanvasElement = el.dyn_into()?;
    let url = canvas.to_data_url_with_type("image/png")?;
    let link: HtmlAnchorElement = doc.create_element("a")?.dyn_into()?;
    link.set_download("valentine-card.png");
    link.set_href(&url);
    link.click();
    Ok(())
}

pub(crate) fn activate(doc: &Document) {
    if let Ok(Some(panel)) = doc.query_selector(".panel-card .section-content") {
        replay_chars(&panel);
    }
}
