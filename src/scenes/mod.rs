//! The six journey scenes, composed by the navigation controller.
//!
//! Each scene builds its panel content once at mount and animates through a
//! uniform `activate` / `deactivate` lifecycle when the navigator lands on or
//! leaves it. Presentation that does not need per-frame logic (char staggers,
//! heartbeat, floating decorations, shooting stars) is expressed as CSS
//! keyframes injected from [`STYLE_SHEET`]; everything time-critical runs in
//! the app frame loop.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

pub mod card;
pub mod footer;
pub mod hero;
pub mod letter;
pub mod memories;
pub mod quiz;

/// The fixed scene sum type; index order matches `nav::SECTIONS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    Hero,
    Letter,
    Memories,
    Quiz,
    Card,
    Footer,
}

impl SceneKind {
    pub fn from_index(index: usize) -> Option<SceneKind> {
        match index {
            0 => Some(SceneKind::Hero),
            1 => Some(SceneKind::Letter),
            2 => Some(SceneKind::Memories),
            3 => Some(SceneKind::Quiz),
            4 => Some(SceneKind::Card),
            5 => Some(SceneKind::Footer),
            _ => None,
        }
    }
}

/// Build all six panels inside the horizontal track.
pub(crate) fn build_panels(doc: &Document, track: &Element) -> Result<(), JsValue> {
    for (i, section) in crate::nav::SECTIONS.iter().enumerate() {
        let panel = doc.create_element("section")?;
        panel.set_class_name(&format!("panel panel-{}", section.id));
        let content = doc.create_element("div")?;
        content.set_class_name("section-content");
        panel.append_child(&content)?;
        track.append_child(&panel)?;

        match SceneKind::from_index(i) {
            Some(SceneKind::Hero) => hero::build(doc, &content)?,
            Some(SceneKind::Letter) => letter::build(doc, &content)?,
            Some(SceneKind::Memories) => memories::build(doc, &content)?,
            Some(SceneKind::Quiz) => quiz::build(doc, &content)?,
            Some(SceneKind::Card) => card::build(doc, &content)?,
            Some(SceneKind::Footer) => footer::build(doc, &content)?,
            None => {}
        }
    }
    Ok(())
}

/// Scene entered: replay its entrance animations.
pub(crate) fn activate(doc: &Document, kind: SceneKind) {
    match kind {
        SceneKind::Hero => hero::activate(doc),
        SceneKind::Letter => letter::activate(doc),
        SceneKind::Memories => memories::activate(doc),
        SceneKind::Quiz => quiz::activate(doc),
        SceneKind::Card => card::activate(doc),
        SceneKind::Footer => footer::activate(doc),
    }
}

/// Scene left: tear down anything that should not keep running off-screen.
pub(crate) fn deactivate(doc: &Document, kind: SceneKind) {
    if kind == SceneKind::Letter {
        letter::close_modal(doc);
    }
}

// -----------------------------------------------------------------------------
// Shared DOM helpers
// -----------------------------------------------------------------------------

/// Create an element with a class, appended to `parent`.
pub(crate) fn child(
    doc: &Document,
    parent: &Element,
    tag: &str,
    class: &str,
) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    parent.append_child(&el)?;
    Ok(el)
}

/// Wrap text into per-grapheme `.char` spans with staggered animation delays,
/// so Bengali conjuncts animate as single units.
pub(crate) fn split_text_spans(
    doc: &Document,
    parent: &Element,
    text: &str,
    base_delay_ms: f64,
    step_ms: f64,
) -> Result<(), JsValue> {
    let wrapper = child(doc, parent, "span", "split-text")?;
    wrapper.set_attribute("aria-label", text)?;
    for (i, cluster) in crate::split_graphemes(text).iter().enumerate() {
        let span = child(doc, &wrapper, "span", "char")?;
        span.set_text_content(Some(if cluster == " " { "\u{00A0}" } else { cluster }));
        let delay = base_delay_ms + i as f64 * step_ms;
        if let Some(html) = span.dyn_ref::<HtmlElement>() {
            html.style().set_property("animation-delay", &format!("{delay}ms"))?;
        }
    }
    Ok(())
}

/// Restart the char-rise animation on every `.char` under `root`.
/// Forces a reflow between class toggles so the animation replays.
pub(crate) fn replay_chars(root: &Element) {
    if let Ok(chars) = root.query_selector_all(".char") {
        for i in 0..chars.length() {
            if let Some(node) = chars.item(i) {
                if let Ok(el) = node.dyn_into::<HtmlElement>() {
                    let _ = el.class_list().remove_1("run");
                    let _ = el.offset_width(); // reflow
                    let _ = el.class_list().add_1("run");
                }
            }
        }
    }
}

/// Stylesheet for everything declarative: layout, panel palettes, keyframes.
pub(crate) fn inject_styles(doc: &Document) -> Result<(), JsValue> {
    let style = doc.create_element("style")?;
    style.set_text_content(Some(STYLE_SHEET));
    doc.head()
        .ok_or_else(|| JsValue::from_str("no head"))?
        .append_child(&style)?;
    Ok(())
}

const STYLE_SHEET: &str = r#"
html, body { margin: 0; padding: 0; overflow: hidden; height: 100%;
  background: #FFF8F0; color: #222228;
  font-family: 'Hind Siliguri', 'Noto Serif Bengali', serif; }
* { box-sizing: border-box; -webkit-tap-highlight-color: transparent; }

.journey-viewport { position: fixed; inset: 0; overflow: hidden; }
.journey-track { display: flex; height: 100vh; will-change: transform; }
.panel { width: 100vw; height: 100vh; flex: 0 0 100vw; position: relative;
  display: flex; align-items: center; justify-content: center; overflow: hidden; }
.section-content { width: 100%; height: 100%; display: flex; flex-direction: column;
  align-items: center; justify-content: center; text-align: center;
  position: relative; padding: 0 1rem; will-change: transform, opacity; }

.panel-hero   { background: radial-gradient(circle at 50% 35%, #FFF8F0, #FFECEF); }
.panel-letter { background: linear-gradient(160deg, #FFF8F0 0%, #FFE9EE 100%); }
.panel-stars  { background: radial-gradient(ellipse at 50% 120%, #1A1A33 0%, #0B0B1A 70%); color: #fff; }
.panel-quiz   { background: linear-gradient(200deg, #FFF8F0 0%, #FFF0E0 100%); }
.panel-card   { background: linear-gradient(180deg, #FFF8F0 0%, #FFE4EA 100%); }
.panel-footer { background: radial-gradient(circle at 50% 60%, #FFF4F0, #FFE9EE); }

/* ── Character stagger ── */
.char { display: inline-block; opacity: 0; }
.char.run { animation: char-rise 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) forwards; }
@keyframes char-rise {
  from { opacity: 0; transform: translateY(50px) rotateX(-90deg); }
  to   { opacity: 1; transform: translateY(0) rotateX(0); } }

/* ── Ambient decorations ── */
.heartbeat { animation: heartbeat 1.5s ease-in-out infinite; display: inline-block; }
@keyframes heartbeat {
  0%, 100% { transform: scale(1); } 25% { transform: scale(1.15); }
  50% { transform: scale(1); } 70% { transform: scale(1.08); } }
.deco-float { position: absolute; border-radius: 9999px; pointer-events: none;
  animation: deco-drift linear infinite alternate; }
@keyframes deco-drift {
  from { transform: translateY(0) } to { transform: translateY(-26px) } }

/* ── Gate ── */
.gate { position: fixed; inset: 0; z-index: 200; background: #000;
  touch-action: none; user-select: none; overflow: hidden; }
.curtain { position: absolute; top: 0; height: 100%; width: 51%;
  will-change: transform; backface-visibility: hidden; }
.curtain-left  { left: 0;
  background: linear-gradient(135deg, #8B1A2B 0%, #B02040 30%, #9E1B3C 60%, #7A1428 100%);
  box-shadow: 4px 0 30px rgba(0,0,0,0.5); }
.curtain-right { right: 0;
  background: linear-gradient(225deg, #8B1A2B 0%, #B02040 30%, #9E1B3C 60%, #7A1428 100%);
  box-shadow: -4px 0 30px rgba(0,0,0,0.5); }
.curtain .folds { position: absolute; inset: 0; pointer-events: none; }
.curtain-left .folds { background-image: repeating-linear-gradient(90deg,
  rgba(0,0,0,0.08) 0px, transparent 3px, transparent 40px,
  rgba(0,0,0,0.05) 42px, transparent 44px, transparent 80px); }
.curtain-right .folds { background-image: repeating-linear-gradient(90deg,
  transparent 0px, rgba(0,0,0,0.05) 38px, transparent 40px,
  transparent 42px, rgba(0,0,0,0.08) 80px); }
.curtain .sheen { position: absolute; inset: 0; pointer-events: none;
  background: linear-gradient(180deg, rgba(255,255,255,0.06) 0%,
  transparent 20%, transparent 80%, rgba(0,0,0,0.15) 100%); }
.curtain .trim { position: absolute; bottom: 0; left: 0; right: 0; height: 14px; opacity: 0.6;
  background: linear-gradient(90deg, #8B6914, #D4A94A, #F0D68A, #D4A94A, #8B6914); }
.gate-darkness { position: absolute; inset: 0; background: #000; z-index: 25;
  pointer-events: none; transition: opacity 1.2s ease-in-out; }
.gate-spotlight { position: absolute; left: 50%; top: 50%; z-index: 30;
  transform: translate(-50%, -50%); text-align: center; pointer-events: none;
  opacity: 0; transition: opacity 1.2s ease, transform 1.2s ease; }
.gate-spotlight.lit { opacity: 1; }
.gate-spotlight .glow { position: absolute; left: 50%; top: 50%; width: 350px; height: 350px;
  transform: translate(-50%, -50%); border-radius: 9999px;
  background: radial-gradient(circle, rgba(255,245,238,0.18) 0%,
  rgba(255,183,197,0.08) 40%, transparent 70%); }
.gate-spotlight .line { font-size: clamp(2rem, 6vw, 3.8rem); font-style: italic;
  font-weight: 700; color: rgba(255,255,255,0.9);
  text-shadow: 0 0 40px rgba(255,183,197,0.4), 0 0 80px rgba(215,38,61,0.2); }
.gate-hint { position: absolute; left: 50%; top: 50%; z-index: 30;
  transform: translate(-50%, -50%); display: flex; flex-direction: column;
  align-items: center; gap: 0.75rem; pointer-events: none; opacity: 0;
  transition: opacity 0.6s ease; color: rgba(255,255,255,0.5);
  letter-spacing: 0.25em; font-size: 0.95rem; }
.gate-hint.lit { opacity: 1; }
.gate-hint .sub { font-size: 0.7rem; color: rgba(255,255,255,0.25); }

/* ── Chrome ── */
.chrome { transition: opacity 0.7s ease; }
.chrome.hidden { opacity: 0; pointer-events: none; }
.progress-rail { position: fixed; top: 0; left: 0; right: 0; height: 3px;
  z-index: 101; background: rgba(34,34,40,0.05); }
.progress-fill { height: 100%; width: 0; border-radius: 0 9999px 9999px 0;
  background: linear-gradient(90deg, #D7263D, #FFB7C5, #FFD166);
  transition: width 0.7s ease-in-out; }
.counter { position: fixed; top: 1.4rem; left: 1.6rem; z-index: 101;
  font-size: 0.85rem; letter-spacing: 0.2em; color: rgba(34,34,40,0.3); }
.counter b { font-size: 1.1rem; color: #D7263D; }
.panel-dark-chrome .counter b { color: #FFD166; }
.dot-rail { position: fixed; right: 1.2rem; top: 50%; transform: translateY(-50%);
  z-index: 101; display: flex; flex-direction: column; gap: 1.25rem; }
.dot { width: 8px; height: 8px; border-radius: 9999px; border: 0; padding: 0;
  background: rgba(34,34,40,0.2); cursor: pointer;
  transition: all 0.3s ease; }
.dot.active { width: 14px; height: 14px; background: #D7263D;
  box-shadow: 0 0 14px rgba(215,38,61,0.7); }
.dot.active.gold { background: #FFD166; box-shadow: 0 0 14px rgba(255,209,102,0.7); }
.nav-buttons { position: fixed; bottom: 1.8rem; left: 50%; transform: translateX(-50%);
  z-index: 101; display: flex; align-items: center; gap: 1.2rem; }
.nav-btn { border: 1px solid rgba(255,183,197,0.3); border-radius: 9999px;
  padding: 0.8rem 1.6rem; font-size: 0.95rem; cursor: pointer;
  background: rgba(255,255,255,0.7); color: rgba(34,34,40,0.8);
  backdrop-filter: blur(4px); transition: all 0.3s ease; }
.nav-btn:hover { background: #fff; }
.nav-btn.primary { border: 0; color: #fff;
  background: linear-gradient(90deg, #D7263D, #FFB7C5);
  box-shadow: 0 8px 24px rgba(215,38,61,0.2); }
.nav-btn:disabled { opacity: 0; pointer-events: none; }
.section-tag { padding: 0.45rem 1rem; border-radius: 9999px; font-size: 0.8rem;
  color: rgba(215,38,61,0.7); background: rgba(215,38,61,0.1);
  border: 1px solid rgba(215,38,61,0.15); }
.music-btn { position: fixed; bottom: 1.4rem; right: 1.4rem; z-index: 101;
  width: 3.2rem; height: 3.2rem; border-radius: 9999px; cursor: pointer;
  border: 1px solid rgba(255,183,197,0.5); background: rgba(255,255,255,0.75);
  backdrop-filter: blur(6px); font-size: 1.1rem; color: #D7263D;
  display: flex; align-items: center; justify-content: center; }

/* ── Hero ── */
.hero-emblem { font-size: clamp(3.5rem, 8vw, 6rem); margin-bottom: 2rem; }
.hero-name { font-size: clamp(1.8rem, 5vw, 3.6rem); font-weight: 800;
  color: #D7263D; letter-spacing: 0.05em; }
.hero-title { font-size: clamp(2.2rem, 7vw, 5.5rem); font-weight: 700;
  font-style: italic; margin: 0.4rem 0 1.2rem; }
.hero-subtitle { font-size: clamp(1.05rem, 2.5vw, 1.4rem); color: rgba(34,34,40,0.5);
  opacity: 0; transition: opacity 1s ease 1.2s, transform 1s ease 1.2s;
  transform: translateY(20px); }
.hero-subtitle.lit { opacity: 1; transform: translateY(0); }
.scroll-hint { display: flex; align-items: center; gap: 0.8rem; margin-top: 3rem;
  color: rgba(34,34,40,0.3); font-size: 0.85rem; letter-spacing: 0.3em; }
.scroll-hint .rule { height: 1px; width: 3rem; background: rgba(34,34,40,0.15); }

/* ── Letter ── */
.letter-emblem { font-size: clamp(3.5rem, 8vw, 6rem); margin-bottom: 2.5rem; }
.letter-title { font-size: clamp(1.9rem, 5vw, 3.6rem); font-weight: 700; font-style: italic; }
.letter-lead { color: rgba(34,34,40,0.5); margin: 1.2rem auto 2.8rem; max-width: 28rem; }
.letter-open-btn { border: 0; border-radius: 9999px; cursor: pointer; color: #fff;
  padding: 1.2rem 3rem; font-size: 1.15rem; font-weight: 600;
  background: linear-gradient(135deg, #D7263D, #FFB7C5);
  box-shadow: 0 16px 40px rgba(215,38,61,0.25); transition: transform 0.3s ease; }
.letter-open-btn:hover { transform: scale(1.05); }
.letter-backdrop { position: fixed; inset: 0; z-index: 140;
  background: rgba(34,34,40,0.4); backdrop-filter: blur(8px); }
.letter-modal { position: fixed; left: 50%; top: 50%; z-index: 150;
  transform: translate(-50%, -50%); width: min(92vw, 42rem);
  border-radius: 1.5rem; background: rgba(255,248,240,0.96);
  padding: 2.2rem 1.8rem; box-shadow: 0 30px 80px rgba(0,0,0,0.25); }
.letter-modal h3 { text-align: center; font-style: italic; font-size: 1.6rem; margin: 0 0 2rem; }
.letter-body { text-align: center; font-size: clamp(1.2rem, 3vw, 1.7rem); font-style: italic;
  white-space: pre-line; line-height: 1.9; color: rgba(34,34,40,0.85); min-height: 12rem; }
.letter-sign { text-align: center; margin-top: 2rem; color: rgba(215,38,61,0.4); font-style: italic; }
.letter-close { position: absolute; top: 1rem; right: 1rem; width: 2.4rem; height: 2.4rem;
  border: 0; border-radius: 9999px; cursor: pointer; font-size: 1rem;
  background: rgba(34,34,40,0.1); color: rgba(34,34,40,0.6); }
.typewriter-cursor { display: inline-block; width: 2px; height: 1.2em;
  background: #D7263D; vertical-align: text-bottom; margin-left: 2px;
  animation: blink 0.8s step-end infinite; }
@keyframes blink { 50% { opacity: 0; } }

/* ── Memories ── */
.star-field { position: absolute; inset: 0; }
.memory-star { position: absolute; transform: translate(-50%, -50%);
  border: 0; background: transparent; cursor: pointer; color: #fff;
  display: flex; flex-direction: column; align-items: center; gap: 0.2rem; }
.memory-star .dot-core { width: 10px; height: 10px; border-radius: 9999px;
  background: #fff; box-shadow: 0 0 12px rgba(255,255,255,0.9),
  0 0 30px rgba(255,209,102,0.5); animation: star-twinkle 3s ease-in-out infinite; }
@keyframes star-twinkle { 50% { opacity: 0.45; transform: scale(0.8); } }
.memory-star .icon { font-size: 1.1rem; }
.memory-detail { position: absolute; left: 50%; bottom: 8%; z-index: 30;
  transform: translateX(-50%); width: min(88vw, 26rem);
  border-radius: 1rem; padding: 1.2rem 1.4rem; text-align: center;
  background: rgba(255,255,255,0.08); backdrop-filter: blur(10px);
  border: 1px solid rgba(255,255,255,0.12); color: rgba(255,255,255,0.9);
  opacity: 0; transition: opacity 0.4s ease; pointer-events: none; }
.memory-detail.lit { opacity: 1; }
.memory-detail .date { color: #FFD166; font-size: 0.8rem; letter-spacing: 0.2em; }
.memory-detail .title { font-weight: 700; font-size: 1.15rem; margin: 0.3rem 0; }
.memory-detail .desc { color: rgba(255,255,255,0.65); font-size: 0.95rem; }
.memories-heading { position: absolute; top: 9%; left: 0; right: 0; text-align: center;
  font-style: italic; font-weight: 700; font-size: clamp(1.6rem, 4vw, 2.6rem);
  color: rgba(255,255,255,0.92); }
.shooting-star { position: absolute; width: 2px; height: 2px; border-radius: 9999px;
  background: #fff; opacity: 0; animation: shoot linear infinite; }
.shooting-star .tail { position: absolute; top: 0; right: 0; width: 60px; height: 1px;
  background: linear-gradient(to left, #fff, transparent);
  transform-origin: right center; transform: rotate(-35deg); }
@keyframes shoot {
  0% { opacity: 0; transform: translate(0, 0); }
  3% { opacity: 1; }
  12% { opacity: 0; transform: translate(-220px, 150px); }
  100% { opacity: 0; transform: translate(-220px, 150px); } }

/* ── Quiz ── */
.quiz-wrap { width: min(92vw, 34rem); display: flex; flex-direction: column;
  align-items: center; }
.quiz-emblem { font-size: clamp(3rem, 7vw, 5rem); margin-bottom: 1.6rem; }
.quiz-title { font-size: clamp(1.5rem, 4vw, 2.6rem); font-weight: 700;
  font-style: italic; margin-bottom: 1rem; }
.quiz-lead { color: rgba(34,34,40,0.5); margin-bottom: 2.4rem; }
.quiz-start { border: 0; border-radius: 9999px; cursor: pointer; color: #fff;
  padding: 1.1rem 3rem; font-size: 1.15rem; font-weight: 600;
  background: linear-gradient(90deg, #D7263D, #FFB7C5);
  box-shadow: 0 16px 40px rgba(215,38,61,0.25); }
.quiz-progress { display: flex; gap: 0.5rem; margin-bottom: 1.4rem; }
.quiz-progress span { height: 8px; width: 8px; border-radius: 9999px;
  background: rgba(215,38,61,0.2); transition: all 0.3s ease; }
.quiz-progress span.done, .quiz-progress span.now { background: #D7263D; }
.quiz-progress span.now { width: 28px; }
.quiz-question { font-size: clamp(1.15rem, 3vw, 1.7rem); font-weight: 600;
  margin-bottom: 2rem; line-height: 1.6; }
.quiz-option { width: 100%; text-align: left; padding: 1.1rem 1.4rem;
  margin-bottom: 0.8rem; border-radius: 1rem; cursor: pointer;
  border: 2px solid rgba(255,183,197,0.4); background: rgba(255,255,255,0.5);
  font-size: 1.05rem; color: rgba(34,34,40,0.8); display: flex;
  align-items: center; gap: 0.9rem; transition: all 0.3s ease; }
.quiz-option:hover { border-color: rgba(215,38,61,0.6); background: rgba(255,255,255,0.8); }
.quiz-option.selected { border-color: #D7263D; background: rgba(215,38,61,0.1);
  color: #D7263D; }
.quiz-option .letter { flex-shrink: 0; width: 2.2rem; height: 2.2rem;
  border-radius: 9999px; display: flex; align-items: center; justify-content: center;
  font-weight: 700; font-size: 0.85rem; background: rgba(255,183,197,0.3);
  color: rgba(34,34,40,0.6); }
.quiz-option.selected .letter { background: #D7263D; color: #fff; }
.stamp { display: inline-block; margin: 0.5rem; padding: 0.9rem 1.2rem;
  border-radius: 0.8rem; border: 2px dashed rgba(215,38,61,0.6);
  background: rgba(215,38,61,0.08); color: #D7263D; max-width: 13rem;
  font-size: 0.92rem; animation: stamp-pop 0.5s cubic-bezier(0.34, 1.8, 0.64, 1) backwards; }
.stamp.alt { border-color: #FFB7C5; background: rgba(255,183,197,0.2);
  color: rgba(34,34,40,0.8); }
@keyframes stamp-pop { from { transform: scale(0); opacity: 0; } }
.quiz-restart { border: 0; background: transparent; cursor: pointer; margin-top: 1rem;
  color: rgba(34,34,40,0.4); text-decoration: underline; text-underline-offset: 4px; }

/* ── Card ── */
.card-title { font-size: clamp(1.9rem, 5vw, 3.4rem); font-weight: 700;
  font-style: italic; margin-bottom: 0.8rem; }
.card-lead { color: rgba(34,34,40,0.5); margin-bottom: 2rem; }
.card-canvas { border-radius: 1.2rem; box-shadow: 0 24px 60px rgba(215,38,61,0.18);
  max-width: min(86vw, 21rem); height: auto; }
.card-download { margin-top: 1.8rem; border: 0; border-radius: 9999px; cursor: pointer;
  color: #fff; padding: 1rem 2.6rem; font-size: 1.05rem; font-weight: 600;
  background: linear-gradient(90deg, #D7263D, #FFB7C5);
  box-shadow: 0 14px 36px rgba(215,38,61,0.25); }

/* ── Footer ── */
.footer-line { font-style: italic; font-size: clamp(1.2rem, 3vw, 1.6rem);
  color: rgba(34,34,40,0.4); max-width: 26rem; }
.footer-dots { margin-top: 1.5rem; color: rgba(34,34,40,0.25);
  letter-spacing: 0.4em; font-size: 0.85rem; }

/* ── Effects canvas ── */
.fx-canvas { position: fixed; inset: 0; z-index: 120; pointer-events: none; }

/* ── Custom cursor ── */
body.custom-cursor, body.custom-cursor button, body.custom-cursor a { cursor: none; }
.cursor-dot { position: fixed; left: 0; top: 0; width: 8px; height: 8px;
  margin: -4px 0 0 -4px; border-radius: 9999px; background: #D7263D;
  z-index: 210; pointer-events: none; }
.cursor-ring { position: fixed; left: 0; top: 0; width: 34px; height: 34px;
  margin: -17px 0 0 -17px; border-radius: 9999px;
  border: 1.5px solid rgba(215,38,61,0.5); z-index: 210; pointer-events: none;
  transition: width 0.25s ease, height 0.25s ease, margin 0.25s ease,
    border-color 0.25s ease; }
.cursor-ring.grow { width: 52px; height: 52px; margin: -26px 0 0 -26px;
  border-color: rgba(255,209,102,0.85); }
"#;
