//! Application shell: owns every stateful piece (gate, navigator, scenes,
//! music, effects) behind one thread-local cell and drives all of it from a
//! single `requestAnimationFrame` loop. Event listeners only translate DOM
//! events into calls on [`App`]; nothing else holds state.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement,
    KeyboardEvent, MouseEvent, PointerEvent, TouchEvent, WheelEvent, Window,
};

use crate::audio::MusicPlayer;
use crate::cursor::CursorLayer;
use crate::curtain::{self, CurtainPull, GatePhase, Release};
use crate::nav::{self, Direction, Navigator, Transition, WheelGate};
use crate::particles::{self, ParticlePool};
use crate::scenes::{self, SceneKind, letter::Typewriter, quiz::QuizFlow};
use crate::tween::{Ease, Tween};

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Run `f` against the live app, if mounted.
pub(crate) fn with<F: FnOnce(&mut App)>(f: F) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            f(app);
        }
    });
}

// Scene transition choreography, all offsets from the accepted request.
const FADE_OUT_MS: f64 = 400.0;
const SLIDE_DELAY_MS: f64 = 100.0;
const SLIDE_MS: f64 = 1_000.0;
const FADE_IN_DELAY_MS: f64 = 600.0;
const FADE_IN_MS: f64 = 550.0;
const TRANSITION_TOTAL_MS: f64 = FADE_IN_DELAY_MS + FADE_IN_MS;

// Gate exit: curtains fly offscreen, then the whole gate fades away.
const EXIT_SLIDE_MS: f64 = 700.0;
const EXIT_FADE_DELAY_MS: f64 = 500.0;
const EXIT_FADE_MS: f64 = 400.0;
const SNAP_MS: f64 = 400.0;

const SPOTLIGHT_LINE: &str = "তোমার জন্য একটা গল্প…";
const GATE_HINT: &str = "পর্দা টেনে খোলো";
const GATE_HINT_SUB: &str = "ধরে দুই পাশে টানো";
const MUSIC_FILE: &str = "music.mp3";

/// The curtain gate while it is still on screen.
struct Gate {
    root: Element,
    left: HtmlElement,
    right: HtmlElement,
    spotlight: Element,
    hint: HtmlElement,
    darkness: HtmlElement,
    pull: CurtainPull,
    mounted_at: f64,
    phase: GatePhase,
    name_buffer: String,
    /// Last rendered display progress (after the friction curve).
    display: f64,
    snap: Option<Tween>,
    exit: Option<(Tween, Tween)>, // (slide in vw, gate opacity)
}

struct NavAnim {
    transition: Transition,
    started_at: f64,
}

pub(crate) struct App {
    document: Document,
    navigator: Navigator,
    wheel: WheelGate,
    touch_start: Option<(f64, f64)>,
    nav_anim: Option<NavAnim>,
    gate: Option<Gate>,
    track: HtmlElement,
    panel_contents: Vec<HtmlElement>,
    chrome: Element,
    progress_fill: HtmlElement,
    counter: Element,
    dots: Vec<Element>,
    section_tag: Element,
    prev_btn: Element,
    next_btn: Element,
    music_btn: Element,
    music: MusicPlayer,
    fx_ctx: CanvasRenderingContext2d,
    fx_canvas: HtmlCanvasElement,
    pool: ParticlePool,
    cursor: Option<CursorLayer>,
    /// Latest raw pointer position; the ring glides toward it every frame.
    pointer_pos: Option<(f64, f64)>,
    last_cursor: Option<(f64, f64)>,
    letter: Option<Typewriter>,
    quiz: QuizFlow,
    quiz_advance_at: Option<f64>,
    last_frame_ms: f64,
}

pub(crate) fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let app = App::mount(&window, &document)?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    install_listeners(&window, &document)?;
    start_frame_loop(&window)?;
    Ok(())
}

impl App {
    fn mount(window: &Window, doc: &Document) -> Result<Self, JsValue> {
        scenes::inject_styles(doc)?;
        let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let viewport = doc.create_element("div")?;
        viewport.set_class_name("journey-viewport");
        body.append_child(&viewport)?;

        let track: HtmlElement = doc.create_element("div")?.dyn_into()?;
        track.set_class_name("journey-track");
        viewport.append_child(&track)?;
        scenes::build_panels(doc, &track)?;

        let mut panel_contents = Vec::with_capacity(nav::SECTIONS.len());
        let nodes = doc.query_selector_all(".section-content")?;
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                panel_contents.push(node.dyn_into::<HtmlElement>()?);
            }
        }

        let (chrome, progress_fill, counter, dots, section_tag, prev_btn, next_btn, music_btn) =
            build_chrome(doc, &body)?;

        let fx_canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        fx_canvas.set_class_name("fx-canvas");
        body.append_child(&fx_canvas)?;
        let fx_ctx: CanvasRenderingContext2d = fx_canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let music = MusicPlayer::mount(doc, MUSIC_FILE)?;
        let gate = mount_gate(doc, &body)?;
        let now = crate::performance_now();

        let mut app = Self {
            document: doc.clone(),
            navigator: Navigator::new(nav::SECTIONS.len()),
            wheel: WheelGate::default(),
            touch_start: None,
            nav_anim: None,
            gate: Some(Gate {
                root: gate.0,
                left: gate.1,
                right: gate.2,
                spotlight: gate.3,
                hint: gate.4,
                darkness: gate.5,
                pull: CurtainPull::new(),
                mounted_at: now,
                phase: GatePhase::Dark,
                name_buffer: String::new(),
                display: 0.0,
                snap: None,
                exit: None,
            }),
            track,
            panel_contents,
            chrome,
            progress_fill,
            counter,
            dots,
            section_tag,
            prev_btn,
            next_btn,
            music_btn,
            music,
            fx_ctx,
            fx_canvas,
            pool: ParticlePool::new(now as u64 | 1),
            cursor: CursorLayer::mount(doc, &body)?,
            pointer_pos: None,
            last_cursor: None,
            letter: None,
            quiz: QuizFlow::new(),
            quiz_advance_at: None,
            last_frame_ms: now,
        };
        app.resize(window);
        let (w, h) = app.viewport_size();
        app.pool.spawn_ambient(w, h);
        Ok(app)
    }

    fn viewport_size(&self) -> (f64, f64) {
        (self.fx_canvas.width() as f64, self.fx_canvas.height() as f64)
    }

    pub(crate) fn resize(&mut self, window: &Window) {
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1280.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(720.0);
        self.fx_canvas.set_width(w as u32);
        self.fx_canvas.set_height(h as u32);
    }

    // ── Frame loop ──────────────────────────────────────────────────────

    pub(crate) fn frame(&mut self, now: f64) {
        let dt = ((now - self.last_frame_ms) / 1_000.0).clamp(0.0, 0.05);
        self.last_frame_ms = now;

        self.gate_frame(now);
        self.nav_frame(now);
        self.letter_frame(now);
        self.quiz_frame(now);
        self.music.tick(now);

        if let (Some(cursor), Some((px, py))) = (&mut self.cursor, self.pointer_pos) {
            cursor.frame(px, py);
        }

        let (w, h) = self.viewport_size();
        self.pool.step(dt, w, h);
        self.fx_ctx.clear_rect(0.0, 0.0, w, h);
        particles::render(&self.fx_ctx, &self.pool);
    }

    fn letter_frame(&mut self, now: f64) {
        if let Some(tw) = &mut self.letter {
            let jitter = crate::rand_unit(7);
            if tw.tick(now, jitter) {
                scenes::letter::render_typed(&self.document, &tw.visible());
            }
        }
    }

    fn quiz_frame(&mut self, now: f64) {
        if let Some(at) = self.quiz_advance_at {
            if now >= at {
                self.quiz_advance_at = None;
                self.quiz.advance();
                let _ = scenes::quiz::render(&self.document, &self.quiz);
            }
        }
    }

    // ── Gate ────────────────────────────────────────────────────────────

    fn gate_frame(&mut self, now: f64) {
        let Some(gate) = &mut self.gate else { return };

        let phase = curtain::phase_at(now - gate.mounted_at);
        if phase != gate.phase {
            match phase {
                GatePhase::Dark => {}
                GatePhase::Spotlight => {
                    let _ = gate.spotlight.class_list().add_1("lit");
                }
                GatePhase::Lights => {
                    let _ = gate.spotlight.class_list().remove_1("lit");
                    let _ = gate.darkness.style().set_property("opacity", "0");
                }
                GatePhase::Pulling => {
                    let _ = gate.hint.class_list().add_1("lit");
                }
            }
            gate.phase = phase;
        }

        if let Some(snap) = gate.snap {
            gate.display = snap.sample(now);
            if snap.finished(now) {
                gate.snap = None;
            }
            Self::position_curtains(gate);
        }

        if let Some((slide, fade)) = gate.exit {
            let offset = slide.sample(now);
            let _ = gate
                .left
                .style()
                .set_property("transform", &format!("translateX({}vw)", -offset));
            let _ = gate
                .right
                .style()
                .set_property("transform", &format!("translateX({offset}vw)"));
            if let Some(root) = gate.root.dyn_ref::<HtmlElement>() {
                let _ = root.style().set_property("opacity", &fade.sample(now).to_string());
            }
            if slide.finished(now) && fade.finished(now) {
                gate.root.remove();
                self.gate = None;
                self.reveal_journey();
            }
        }
    }

    /// The gate is gone: show the chrome and light up the hero.
    fn reveal_journey(&mut self) {
        let _ = self.chrome.class_list().remove_1("hidden");
        self.update_chrome(0);
        scenes::activate(&self.document, SceneKind::Hero);
    }

    fn position_curtains(gate: &Gate) {
        let offset = gate.display * curtain::CURTAIN_TRAVEL_RATIO * 100.0;
        let _ = gate
            .left
            .style()
            .set_property("transform", &format!("translateX({}vw)", -offset));
        let _ = gate
            .right
            .style()
            .set_property("transform", &format!("translateX({offset}vw)"));
        let hint_opacity = (1.0 - gate.display * 2.0).clamp(0.0, 1.0);
        let _ = gate.hint.style().set_property("opacity", &hint_opacity.to_string());
    }

    pub(crate) fn gate_pointer_down(&mut self, x: f64, now: f64) {
        self.music.retry_if_blocked(now);
        if let Some(gate) = &mut self.gate {
            if gate.phase == GatePhase::Pulling && gate.exit.is_none() {
                gate.snap = None;
                gate.pull.drag_start(x, now);
            }
        }
    }

    pub(crate) fn gate_pointer_move(&mut self, x: f64, now: f64, viewport_w: f64) {
        if let Some(gate) = &mut self.gate {
            if let Some(display) = gate.pull.drag_move(x, now, viewport_w) {
                gate.display = display;
                Self::position_curtains(gate);
            }
        }
    }

    pub(crate) fn gate_pointer_up(&mut self, now: f64) {
        let Some(gate) = &mut self.gate else { return };
        match gate.pull.drag_end() {
            Release::Ignored => {}
            Release::Snap(progress) => {
                let resting = curtain::apply_resistance(progress);
                gate.snap = Some(Tween::new(
                    gate.display,
                    resting,
                    now,
                    SNAP_MS,
                    Ease::ElasticOut { amplitude: 1.0, period: 0.6 },
                ));
            }
            Release::Complete => self.gate_begin_exit(now),
        }
    }

    fn gate_begin_exit(&mut self, now: f64) {
        if let Some(gate) = &mut self.gate {
            if gate.exit.is_some() {
                return;
            }
            gate.snap = None;
            let from = gate.display * curtain::CURTAIN_TRAVEL_RATIO * 100.0;
            let slide = Tween::new(from, 60.0, now, EXIT_SLIDE_MS, Ease::CubicIn);
            let fade = Tween::new(1.0, 0.0, now + EXIT_FADE_DELAY_MS, EXIT_FADE_MS, Ease::QuadOut);
            gate.exit = Some((slide, fade));
            let _ = gate.hint.style().set_property("opacity", "0");
        }
    }

    // ── Input ───────────────────────────────────────────────────────────

    pub(crate) fn key_down(&mut self, key: &str, now: f64) {
        if let Some(gate) = &mut self.gate {
            // Typing her name on the gate opens it without pulling.
            match key {
                "Enter" => {
                    if curtain::recognizes_name(&gate.name_buffer) {
                        self.gate_begin_exit(now);
                    } else {
                        gate.name_buffer.clear();
                    }
                }
                "Backspace" => {
                    gate.name_buffer.pop();
                }
                k if k.chars().count() == 1 => gate.name_buffer.push_str(k),
                _ => {}
            }
            return;
        }
        if let Some(dir) = nav::key_direction(key) {
            self.advance(dir, now);
        }
    }

    pub(crate) fn wheel_input(&mut self, delta: f64, now: f64) {
        if self.gate.is_some() {
            return;
        }
        if let Some(dir) = self.wheel.accept(delta, now) {
            self.advance(dir, now);
        }
    }

    pub(crate) fn touch_began(&mut self, x: f64, y: f64) {
        self.touch_start = Some((x, y));
    }

    pub(crate) fn touch_ended(&mut self, x: f64, y: f64, now: f64) {
        let Some((sx, sy)) = self.touch_start.take() else { return };
        if self.gate.is_some() {
            return;
        }
        if let Some(dir) = nav::swipe_direction(x - sx, y - sy) {
            self.advance(dir, now);
        }
    }

    pub(crate) fn cursor_moved(&mut self, x: f64, y: f64, interactive: bool) {
        self.pointer_pos = Some((x, y));
        if let Some(cursor) = &mut self.cursor {
            cursor.pointer_moved(x, y, interactive);
        }
        if self.gate.is_some() {
            return;
        }
        let spawn = match self.last_cursor {
            Some((lx, ly)) => (x - lx).hypot(y - ly) >= particles::SPAWN_DISTANCE,
            None => true,
        };
        if spawn {
            self.last_cursor = Some((x, y));
            self.pool.spawn_trail(x, y);
        }
        self.hero_tilt(x, y);
    }

    /// Parallax tilt on the hero content while it is the settled section.
    fn hero_tilt(&mut self, x: f64, y: f64) {
        if self.nav_anim.is_some() || self.navigator.current() != 0 {
            return;
        }
        let (w, h) = self.viewport_size();
        let (rx, ry) = scenes::hero::tilt_for(x, y, w, h);
        if let Some(content) = self.panel_contents.first() {
            let _ = content.style().set_property(
                "transform",
                &format!("perspective(900px) rotateX({rx}deg) rotateY({ry}deg)"),
            );
        }
    }

    pub(crate) fn clicked(&mut self, x: f64, y: f64, now: f64) {
        self.music.retry_if_blocked(now);
        if self.gate.is_none() {
            self.pool.spawn_burst(x, y);
        }
    }

    // ── Navigation ──────────────────────────────────────────────────────

    fn advance(&mut self, dir: Direction, now: f64) {
        if let Some(tr) = self.navigator.advance(dir) {
            self.start_transition(tr, now);
        }
    }

    pub(crate) fn go_to(&mut self, index: usize, now: f64) {
        if self.gate.is_some() {
            return;
        }
        if let Some(tr) = self.navigator.go_to(index) {
            self.start_transition(tr, now);
        }
    }

    fn start_transition(&mut self, tr: Transition, now: f64) {
        if let Some(kind) = SceneKind::from_index(tr.from) {
            scenes::deactivate(&self.document, kind);
        }
        self.nav_anim = Some(NavAnim { transition: tr, started_at: now });
    }

    fn nav_frame(&mut self, now: f64) {
        let Some(anim) = &self.nav_anim else { return };
        let tr = anim.transition;
        let t0 = anim.started_at;

        let fade_out = Tween::new(1.0, 0.0, t0, FADE_OUT_MS, Ease::QuadIn);
        let slide = Tween::new(
            -(tr.from as f64) * 100.0,
            -(tr.to as f64) * 100.0,
            t0 + SLIDE_DELAY_MS,
            SLIDE_MS,
            Ease::CubicInOut,
        );
        let fade_in = Tween::new(0.0, 1.0, t0 + FADE_IN_DELAY_MS, FADE_IN_MS, Ease::QuadOut);

        // Content drifts slightly against the travel direction while fading.
        let dir = tr.direction as f64;
        if let Some(content) = self.panel_contents.get(tr.from) {
            let out = fade_out.sample(now);
            let style = content.style();
            let _ = style.set_property("opacity", &out.to_string());
            let _ = style
                .set_property("transform", &format!("translateX({}px)", -dir * 40.0 * (1.0 - out)));
        }
        let _ = self
            .track
            .style()
            .set_property("transform", &format!("translateX({}vw)", slide.sample(now)));
        if let Some(content) = self.panel_contents.get(tr.to) {
            let inc = fade_in.sample(now);
            let style = content.style();
            let _ = style.set_property("opacity", &inc.to_string());
            let _ = style
                .set_property("transform", &format!("translateX({}px)", dir * 30.0 * (1.0 - inc)));
        }

        if now - t0 >= TRANSITION_TOTAL_MS {
            if let Some(content) = self.panel_contents.get(tr.from) {
                let style = content.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "none");
            }
            if let Some(content) = self.panel_contents.get(tr.to) {
                let _ = content.style().set_property("transform", "none");
            }
            self.nav_anim = None;
            self.navigator.complete();
            self.update_chrome(tr.to);
            if let Some(kind) = SceneKind::from_index(tr.to) {
                scenes::activate(&self.document, kind);
            }
        }
    }

    fn update_chrome(&mut self, index: usize) {
        let total = self.navigator.count();
        let pct = ((index + 1) as f64 / total as f64) * 100.0;
        let _ = self.progress_fill.style().set_property("width", &format!("{pct}%"));

        let counter_text = crate::bengali_counter(index + 1, total);
        let markup = match counter_text.split_once(' ') {
            Some((current, rest)) => format!("<b>{current}</b> {rest}"),
            None => counter_text,
        };
        self.counter.set_inner_html(&markup);

        for (i, dot) in self.dots.iter().enumerate() {
            let list = dot.class_list();
            let _ = list.remove_2("active", "gold");
            if i == index {
                let _ = list.add_1("active");
                if index == nav::STARS_SECTION {
                    let _ = list.add_1("gold");
                }
            }
        }
        self.section_tag.set_text_content(Some(nav::SECTIONS[index].name));

        if let Some(body) = self.document.body() {
            let list = body.class_list();
            if index == nav::STARS_SECTION {
                let _ = list.add_1("panel-dark-chrome");
            } else {
                let _ = list.remove_1("panel-dark-chrome");
            }
        }

        let set_disabled = |btn: &Element, disabled: bool| {
            if disabled {
                let _ = btn.set_attribute("disabled", "disabled");
            } else {
                let _ = btn.remove_attribute("disabled");
            }
        };
        set_disabled(&self.prev_btn, index == 0);
        set_disabled(&self.next_btn, index + 1 == total);
    }

    // ── Scene callbacks ─────────────────────────────────────────────────

    pub(crate) fn open_letter(&mut self) {
        if scenes::letter::open_modal(&self.document).is_ok() {
            let now = crate::performance_now();
            self.letter = Some(Typewriter::new(&Typewriter::full_text(), now));
            scenes::letter::render_typed(&self.document, "");
        }
    }

    pub(crate) fn close_letter(&mut self) {
        self.letter = None;
        scenes::letter::close_modal(&self.document);
    }

    pub(crate) fn quiz_begin(&mut self) {
        self.quiz.begin();
        let _ = scenes::quiz::render(&self.document, &self.quiz);
    }

    pub(crate) fn quiz_select(&mut self, option_idx: usize) {
        use scenes::quiz::SelectOutcome;
        if let SelectOutcome::Picked { .. } = self.quiz.select(option_idx) {
            let _ = scenes::quiz::render(&self.document, &self.quiz);
            self.quiz_advance_at =
                Some(crate::performance_now() + scenes::quiz::SELECT_DWELL_MS);
        }
    }

    pub(crate) fn quiz_continue(&mut self) {
        let _ = scenes::card::draw_card(&self.document, self.quiz.answers());
        self.go_to(4, crate::performance_now());
    }

    pub(crate) fn quiz_restart(&mut self) {
        self.quiz_advance_at = None;
        self.quiz.restart();
        let _ = scenes::quiz::render(&self.document, &self.quiz);
    }

    pub(crate) fn toggle_music(&mut self) {
        let on = self.music.toggle(crate::performance_now());
        self.music_btn.set_text_content(Some(if on { "🎵" } else { "🔇" }));
    }
}

// -----------------------------------------------------------------------------
// DOM assembly
// -----------------------------------------------------------------------------

type ChromeRefs = (
    Element,
    HtmlElement,
    Element,
    Vec<Element>,
    Element,
    Element,
    Element,
    Element,
);

fn build_chrome(doc: &Document, body: &HtmlElement) -> Result<ChromeRefs, JsValue> {
    let chrome = doc.create_element("div")?;
    chrome.set_class_name("chrome hidden");
    body.append_child(&chrome)?;

    let rail = scenes::child(doc, &chrome, "div", "progress-rail")?;
    let fill: HtmlElement = scenes::child(doc, &rail, "div", "progress-fill")?.dyn_into()?;

    let counter = scenes::child(doc, &chrome, "div", "counter")?;

    let dot_rail = scenes::child(doc, &chrome, "div", "dot-rail")?;
    let mut dots = Vec::with_capacity(nav::SECTIONS.len());
    for (i, section) in nav::SECTIONS.iter().enumerate() {
        let dot = scenes::child(doc, &dot_rail, "button", "dot")?;
        dot.set_attribute("title", section.name)?;
        dot.set_attribute("aria-label", section.name)?;
        let cb = Closure::wrap(Box::new(move || {
            with(|app| app.go_to(i, crate::performance_now()));
        }) as Box<dyn FnMut()>);
        dot.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
        dots.push(dot);
    }

    let buttons = scenes::child(doc, &chrome, "div", "nav-buttons")?;
    let prev = scenes::child(doc, &buttons, "button", "nav-btn")?;
    prev.set_text_content(Some("← আগে"));
    let tag = scenes::child(doc, &buttons, "span", "section-tag")?;
    let next = scenes::child(doc, &buttons, "button", "nav-btn primary")?;
    next.set_text_content(Some("পরে →"));

    let prev_cb = Closure::wrap(Box::new(move || {
        with(|app| app.advance(Direction::Backward, crate::performance_now()));
    }) as Box<dyn FnMut()>);
    prev.add_event_listener_with_callback("click", prev_cb.as_ref().unchecked_ref())?;
    prev_cb.forget();
    let next_cb = Closure::wrap(Box::new(move || {
        with(|app| app.advance(Direction::Forward, crate::performance_now()));
    }) as Box<dyn FnMut()>);
    next.add_event_listener_with_callback("click", next_cb.as_ref().unchecked_ref())?;
    next_cb.forget();

    let music_btn = scenes::child(doc, &chrome, "button", "music-btn")?;
    music_btn.set_text_content(Some("🔇"));
    music_btn.set_attribute("aria-label", "music")?;
    let music_cb = Closure::wrap(Box::new(move || {
        with(|app| app.toggle_music());
    }) as Box<dyn FnMut()>);
    music_btn.add_event_listener_with_callback("click", music_cb.as_ref().unchecked_ref())?;
    music_cb.forget();

    Ok((chrome, fill, counter, dots, tag, prev, next, music_btn))
}

type GateRefs = (Element, HtmlElement, HtmlElement, Element, HtmlElement, HtmlElement);

fn mount_gate(doc: &Document, body: &HtmlElement) -> Result<GateRefs, JsValue> {
    let root = doc.create_element("div")?;
    root.set_class_name("gate");
    body.append_child(&root)?;

    let mut panels: Vec<HtmlElement> = Vec::with_capacity(2);
    for side in ["curtain curtain-left", "curtain curtain-right"] {
        let panel = scenes::child(doc, &root, "div", side)?;
        scenes::child(doc, &panel, "div", "folds")?;
        scenes::child(doc, &panel, "div", "sheen")?;
        scenes::child(doc, &panel, "div", "trim")?;
        panels.push(panel.dyn_into()?);
    }
    let right = panels.pop().ok_or_else(|| JsValue::from_str("gate panel"))?;
    let left = panels.pop().ok_or_else(|| JsValue::from_str("gate panel"))?;

    let spotlight = scenes::child(doc, &root, "div", "gate-spotlight")?;
    scenes::child(doc, &spotlight, "div", "glow")?;
    let line = scenes::child(doc, &spotlight, "div", "line")?;
    line.set_text_content(Some(SPOTLIGHT_LINE));

    let hint: HtmlElement = scenes::child(doc, &root, "div", "gate-hint")?.dyn_into()?;
    let label = scenes::child(doc, &hint, "span", "")?;
    label.set_text_content(Some(GATE_HINT));
    let sub = scenes::child(doc, &hint, "span", "sub")?;
    sub.set_text_content(Some(GATE_HINT_SUB));

    let darkness: HtmlElement = scenes::child(doc, &root, "div", "gate-darkness")?.dyn_into()?;

    Ok((root, left, right, spotlight, hint, darkness))
}

// -----------------------------------------------------------------------------
// Event wiring
// -----------------------------------------------------------------------------

fn install_listeners(window: &Window, doc: &Document) -> Result<(), JsValue> {
    let key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        with(|app| app.key_down(&e.key(), crate::performance_now()));
    }) as Box<dyn FnMut(KeyboardEvent)>);
    doc.add_event_listener_with_callback("keydown", key.as_ref().unchecked_ref())?;
    key.forget();

    let wheel = Closure::wrap(Box::new(move |e: WheelEvent| {
        with(|app| app.wheel_input(e.delta_y(), crate::performance_now()));
    }) as Box<dyn FnMut(WheelEvent)>);
    window.add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref())?;
    wheel.forget();

    let touch_start = Closure::wrap(Box::new(move |e: TouchEvent| {
        if let Some(touch) = e.touches().item(0) {
            with(|app| app.touch_began(touch.client_x() as f64, touch.client_y() as f64));
        }
    }) as Box<dyn FnMut(TouchEvent)>);
    window.add_event_listener_with_callback("touchstart", touch_start.as_ref().unchecked_ref())?;
    touch_start.forget();

    let touch_end = Closure::wrap(Box::new(move |e: TouchEvent| {
        if let Some(touch) = e.changed_touches().item(0) {
            with(|app| {
                app.touch_ended(
                    touch.client_x() as f64,
                    touch.client_y() as f64,
                    crate::performance_now(),
                )
            });
        }
    }) as Box<dyn FnMut(TouchEvent)>);
    window.add_event_listener_with_callback("touchend", touch_end.as_ref().unchecked_ref())?;
    touch_end.forget();

    let pointer_down = Closure::wrap(Box::new(move |e: PointerEvent| {
        with(|app| app.gate_pointer_down(e.client_x() as f64, crate::performance_now()));
    }) as Box<dyn FnMut(PointerEvent)>);
    window.add_event_listener_with_callback("pointerdown", pointer_down.as_ref().unchecked_ref())?;
    pointer_down.forget();

    let pointer_move = Closure::wrap(Box::new(move |e: PointerEvent| {
        let vw = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1280.0);
        with(|app| app.gate_pointer_move(e.client_x() as f64, crate::performance_now(), vw));
    }) as Box<dyn FnMut(PointerEvent)>);
    window.add_event_listener_with_callback("pointermove", pointer_move.as_ref().unchecked_ref())?;
    pointer_move.forget();

    let pointer_up = Closure::wrap(Box::new(move |_: PointerEvent| {
        with(|app| app.gate_pointer_up(crate::performance_now()));
    }) as Box<dyn FnMut(PointerEvent)>);
    window.add_event_listener_with_callback("pointerup", pointer_up.as_ref().unchecked_ref())?;
    pointer_up.forget();

    let mouse_move = Closure::wrap(Box::new(move |e: MouseEvent| {
        let interactive = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(crate::cursor::INTERACTIVE_SELECTOR).ok().flatten())
            .is_some();
        with(|app| app.cursor_moved(e.client_x() as f64, e.client_y() as f64, interactive));
    }) as Box<dyn FnMut(MouseEvent)>);
    window.add_event_listener_with_callback("mousemove", mouse_move.as_ref().unchecked_ref())?;
    mouse_move.forget();

    let click = Closure::wrap(Box::new(move |e: MouseEvent| {
        with(|app| {
            app.clicked(e.client_x() as f64, e.client_y() as f64, crate::performance_now())
        });
    }) as Box<dyn FnMut(MouseEvent)>);
    window.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
    click.forget();

    let resize = Closure::wrap(Box::new(move || {
        if let Some(w) = web_sys::window() {
            with(|app| app.resize(&w));
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
    resize.forget();

    Ok(())
}

fn start_frame_loop(window: &Window) -> Result<(), JsValue> {
    let cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let cell2 = cell.clone();
    *cell.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        with(|app| app.frame(now));
        if let Some(w) = web_sys::window() {
            if let Some(cb) = cell2.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = cell.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
