//! Memory starfield: nine moments pinned as stars on a night sky, with
//! shooting stars streaking behind them. Clicking a star lights up its
//! caption card.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{child, replay_chars, split_text_spans};

/// One remembered moment. Coordinates are percentages of the panel, with a
/// separate layout for narrow screens.
#[derive(Clone, Copy, Debug)]
pub struct Memory {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub mobile_x: f64,
    pub mobile_y: f64,
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static MEMORIES: [Memory; 9] = [
    Memory {
        id: 1, x: 18.0, y: 32.0, mobile_x: 20.0, mobile_y: 25.0,
        title: "বাসের সেই দিন", date: "২৮ আগস্ট",
        description: "একটা বাস। দুজন মানুষ। ভাগ্য চুপচাপ লিখছিল।", icon: "🚌",
    },
    Memory {
        id: 2, x: 40.0, y: 30.0, mobile_x: 75.0, mobile_y: 32.0,
        title: "তোমার কণ্ঠ", date: "২৩ সেপ্টেম্বর",
        description: "তোমার কণ্ঠ। প্রথমবার। তারপর আর নীরবতা ছিল না।", icon: "🎵",
    },
    Memory {
        id: 3, x: 65.0, y: 36.0, mobile_x: 25.0, mobile_y: 39.0,
        title: "Love you", date: "১৮ ডিসেম্বর",
        description: "আমি বলেছিলাম — \"Love you.\" শব্দের চেয়ে অনুভূতি ভারী ছিল।", icon: "💜",
    },
    Memory {
        id: 4, x: 82.0, y: 38.0, mobile_x: 80.0, mobile_y: 46.0,
        title: "ছয়বার বলেছিলাম", date: "২৬ ডিসেম্বর",
        description: "ছয়বার বলেছিলাম। কারণ একবারে বিশ্বাস হচ্ছিল না কতটা সত্যি।", icon: "💫",
    },
    Memory {
        id: 5, x: 25.0, y: 58.0, mobile_x: 20.0, mobile_y: 53.0,
        title: "আটবার ভালোবাসি", date: "৭ জানুয়ারি",
        description: "তুমি আটবার \"ভালোবাসি\" বলেছিলে। প্রতিটা শব্দ আমার ভিতরে জায়গা করে নিয়েছিল।", icon: "❤️",
    },
    Memory {
        id: 6, x: 52.0, y: 52.0, mobile_x: 75.0, mobile_y: 60.0,
        title: "সময় থেমেছিল", date: "১২ জানুয়ারি",
        description: "সময় থেমেছিল। শুধু আমরা চলছিলাম।", icon: "⏳",
    },
    Memory {
        id: 7, x: 75.0, y: 64.0, mobile_x: 25.0, mobile_y: 67.0,
        title: "তোমার চোখের জল", date: "২১ জানুয়ারি",
        description: "তোমার চোখের জল। আমার ভয় — আমি যেন কখনো কারণ না হই।", icon: "🥺",
    },
    Memory {
        id: 8, x: 38.0, y: 76.0, mobile_x: 80.0, mobile_y: 74.0,
        title: "সাত ঘণ্টা", date: "১ ফেব্রুয়ারি",
        description: "সাত ঘণ্টা। দূরত্ব ছিল। কিন্তু আলাদা ছিলাম না।", icon: "🌉",
    },
    Memory {
        id: 9, x: 62.0, y: 82.0, mobile_x: 50.0, mobile_y: 81.0,
        title: "তুমি আমার নক্ষত্র", date: "১৩ ফেব্রুয়ারি",
        description: "এই আকাশ বানাচ্ছি। কারণ তুমি আমার নক্ষত্র।", icon: "✨",
    },
];

pub const HEADING: &str = "আমাদের আকাশ";

/// Viewport width below which the mobile star layout applies.
const MOBILE_BREAKPOINT: f64 = 640.0;
const SHOOTING_STARS: usize = 4;

pub(crate) fn build(doc: &Document, content: &Element) -> Result<(), JsValue> {
    let narrow = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w < MOBILE_BREAKPOINT)
        .unwrap_or(false);

    let heading = child(doc, content, "h2", "memories-heading")?;
    split_text_spans(doc, &heading, HEADING, 200.0, 25.0)?;

    let field = child(doc, content, "div", "star-field")?;

    for i in 0..SHOOTING_STARS {
        let star = child(doc, &field, "div", "shooting-star")?;
        let sx = crate::rand_unit(i as u64 * 3 + 1) * 60.0;
        let sy = crate::rand_unit(i as u64 * 3 + 2) * 30.0;
        let cycle = 9.2 + crate::rand_unit(i as u64 * 3 + 3) * 12.0;
        if let Some(el) = star.dyn_ref::<HtmlElement>() {
            let style = el.style();
            style.set_property("left", &format!("{sx}%"))?;
            style.set_property("top", &format!("{sy}%"))?;
            style.set_property("animation-duration", &format!("{cycle}s"))?;
            style.set_property("animation-delay", &format!("{}s", i as f64 * 2.3))?;
        }
        child(doc, &star, "div", "tail")?;
    }

    let detail = child(doc, content, "div", "memory-detail")?;
    detail.set_id("memory-detail");
    let date = child(doc, &detail, "div", "date")?;
    date.set_id("memory-detail-date");
    let title = child(doc, &detail, "div", "title")?;
    title.set_id("memory-detail-title");
    let desc = child(doc, &detail, "div", "desc")?;
    desc.set_id("memory-detail-desc");

    for memory in MEMORIES.iter() {
        let star = child(doc, &field, "button", "memory-star")?;
        star.set_attribute("title", memory.title)?;
        let (x, y) = if narrow {
            (memory.mobile_x, memory.mobile_y)
        } else {
            (memory.x, memory.y)
        };
        if let Some(el) = star.dyn_ref::<HtmlElement>() {
            el.style().set_property("left", &format!("{x}%"))?;
            el.style().set_property("top", &format!("{y}%"))?;
        }
        child(doc, &star, "span", "dot-core")?;
        let icon = child(doc, &star, "span", "icon")?;
        icon.set_text_content(Some(memory.icon));

        let m = *memory;
        let cb = Closure::wrap(Box::new(move || {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                show_detail(&doc, &m);
            }
        }) as Box<dyn FnMut()>);
        star.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

fn show_detail(doc: &Document, memory: &Memory) {
    let set = |id: &str, text: &str| {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    };
    set("memory-detail-date", memory.date);
    set("memory-detail-title", memory.title);
    set("memory-detail-desc", memory.description);
    if let Some(card) = doc.get_element_by_id("memory-detail") {
        let _ = card.class_list().add_1("lit");
    }
}

pub(crate) fn activate(doc: &Document) {
    if let Ok(Some(panel)) = doc.query_selector(".panel-stars .section-content") {
        replay_chars(&panel);
    }
    // Start with the first memory's caption so the section reads immediately.
    show_detail(doc, &MEMORIES[0]);
}
