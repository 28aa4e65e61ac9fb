//! Quiz scene: six questions with no wrong answers. A pure [`QuizFlow`]
//! state machine drives three phases (title, questions, stamp overview); the
//! DOM is re-rendered from Rust on each phase step.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{child, replay_chars, split_text_spans};

#[derive(Clone, Copy, Debug)]
pub struct Question {
    pub emoji: &'static str,
    pub title: &'static str,
    pub options: &'static [&'static str],
}

pub static QUESTIONS: [Question; 6] = [
    Question {
        emoji: "🧩",
        title: "আমাদের পুরো একটা দিন একসাথে কাটলে…",
        options: &[
            "সারাদিন কথা বলতাম, থামতামই না",
            "পাশাপাশি বসে নিজ নিজ কাজ করতাম",
            "কোথাও বের হয়ে হারিয়ে যেতাম",
            "একটু দূরে থাকতাম, আবার কাছে ফিরতাম",
        ],
    },
    Question {
        emoji: "💫",
        title: "দূরে থাকলেও আমাদের কীটা সবচেয়ে বেশি ধরে রাখে?",
        options: &[
            "রাতের লম্বা ফোন কল",
            "হঠাৎ 'মিস করছি' মেসেজ",
            "জানি আমরা শেষ পর্যন্ত একে অপরের কাছেই ফিরব",
        ],
    },
    Question {
        emoji: "💭",
        title: "আমি কয়েক ঘন্টা রিপ্লাই না দিলে…",
        options: &[
            "আমি হয়তো আর আগের মতো নেই",
            "আমি ব্যস্ত, কিন্তু তোমাকেই ভাবছি",
            "আমার একটু নিজের সময় দরকার",
            "তোমার জন্য কিছু প্ল্যান করছি",
        ],
    },
    Question {
        emoji: "🌹",
        title: "আমাদের পারফেক্ট বিশেষ দিনটি হবে…",
        options: &[
            "অনেক ড্রামাটিক, সবাই জানবে",
            "শান্ত, শুধু আমরা",
            "কোথাও দূরে, সবাইকে বাদ দিয়ে",
            "জায়গা গুরুত্বপূর্ণ না, আমরা থাকলেই যথেষ্ট",
        ],
    },
    Question {
        emoji: "✨",
        title: "শেষ পর্যন্ত কোন জিনিসটা সবচেয়ে বেশি গুরুত্বপূর্ণ?",
        options: &[
            "সারাক্ষণ কথা বলা",
            "প্রতিদিন একে অপরকে বেছে নেওয়া",
            "সবসময় একসাথে থাকা",
            "একে অপরকে বুঝতে পারা",
        ],
    },
    Question {
        emoji: "🎁",
        title: "তোমার হলে আমার কোন জিনিসটা চুরি করে রাখতে?",
        options: &["আমার সময়", "আমার মনোযোগ", "আমার হৃদয়"],
    },
];

pub const OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];
pub const STAMP_ROTATIONS: [f64; 6] = [-3.0, 5.0, -4.0, 3.0, -5.0, 4.0];
/// Pause after a selection before the next question slides in.
pub const SELECT_DWELL_MS: f64 = 600.0;

pub const QUIZ_TITLE: &str = "এই মুহূর্তে যদি শুধু আমরা থাকতাম…";
pub const QUIZ_LEAD: &str = "একটা একটা করে বেছে নাও।";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Title,
    Quiz,
    Stamps,
}

/// What a selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Wrong phase, out-of-range option, or input locked by a prior pick.
    Ignored,
    /// Answer recorded; the view dwells on the highlighted option.
    Picked { finished: bool },
}

/// Pure quiz progression. Selecting an option locks input until `advance`
/// moves to the next question (the host applies the dwell delay).
#[derive(Debug)]
pub struct QuizFlow {
    phase: QuizPhase,
    current: usize,
    answers: Vec<&'static str>,
    selected: Option<usize>,
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizFlow {
    pub fn new() -> Self {
        Self {
            phase: QuizPhase::Title,
            current: 0,
            answers: Vec::new(),
            selected: None,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn current_question(&self) -> usize {
        self.current
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn answers(&self) -> &[&'static str] {
        &self.answers
    }

    pub fn begin(&mut self) {
        if self.phase == QuizPhase::Title {
            self.phase = QuizPhase::Quiz;
        }
    }

    /// Record a pick for the current question. Double-selects and picks in
    /// the wrong phase are ignored.
    pub fn select(&mut self, option_idx: usize) -> SelectOutcome {
        if self.phase != QuizPhase::Quiz || self.selected.is_some() {
            return SelectOutcome::Ignored;
        }
        let Some(question) = QUESTIONS.get(self.current) else {
            return SelectOutcome::Ignored;
        };
        let Some(answer) = question.options.get(option_idx) else {
            return SelectOutcome::Ignored;
        };
        self.selected = Some(option_idx);
        self.answers.push(answer);
        SelectOutcome::Picked { finished: self.current + 1 >= QUESTIONS.len() }
    }

    /// Move past the dwell: next question, or the stamps overview after the
    /// final answer.
    pub fn advance(&mut self) {
        if self.phase != QuizPhase::Quiz || self.selected.is_none() {
            return;
        }
        self.selected = None;
        if self.current + 1 < QUESTIONS.len() {
            self.current += 1;
        } else {
            self.phase = QuizPhase::Stamps;
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

// -----------------------------------------------------------------------------
// DOM rendering
// -----------------------------------------------------------------------------

pub(crate) fn build(doc: &Document, content: &Element) -> Result<(), JsValue> {
    let wrap = child(doc, content, "div", "quiz-wrap")?;
    wrap.set_id("quiz-wrap");
    render(doc, &QuizFlow::new())?;
    Ok(())
}

/// Re-render the quiz panel for the given flow state.
pub(crate) fn render(doc: &Document, flow: &QuizFlow) -> Result<(), JsValue> {
    let Some(wrap) = doc.get_element_by_id("quiz-wrap") else {
        return Ok(());
    };
    wrap.set_inner_html("");

    match flow.phase() {
        QuizPhase::Title => render_title(doc, &wrap)?,
        QuizPhase::Quiz => render_question(doc, &wrap, flow)?,
        QuizPhase::Stamps => render_stamps(doc, &wrap, flow)?,
    }
    Ok(())
}

fn render_title(doc: &Document, wrap: &Element) -> Result<(), JsValue> {
    let emblem = child(doc, wrap, "div", "quiz-emblem heartbeat")?;
    emblem.set_text_content(Some("💝"));
    let title = child(doc, wrap, "h2", "quiz-title")?;
    split_text_spans(doc, &title, QUIZ_TITLE, 300.0, 40.0)?;
    replay_chars(&title);
    let lead = child(doc, wrap, "p", "quiz-lead")?;
    lead.set_text_content(Some(QUIZ_LEAD));
    let start = child(doc, wrap, "button", "quiz-start")?;
    start.set_text_content(Some("শুরু করি 💕"));
    let cb = Closure::wrap(Box::new(move || {
        crate::app::with(|app| app.quiz_begin());
    }) as Box<dyn FnMut()>);
    start.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn render_question(doc: &Document, wrap: &Element, flow: &QuizFlow) -> Result<(), JsValue> {
    let q_idx = flow.current_question();
    let question = &QUESTIONS[q_idx];

    let progress = child(doc, wrap, "div", "quiz-progress")?;
    for i in 0..QUESTIONS.len() {
        let pip = child(doc, &progress, "span", "")?;
        if i < q_idx {
            pip.set_class_name("done");
        } else if i == q_idx {
            pip.set_class_name("now");
        }
    }

    let emblem = child(doc, wrap, "div", "quiz-emblem")?;
    emblem.set_text_content(Some(question.emoji));

    let heading = child(doc, wrap, "h3", "quiz-question")?;
    heading.set_text_content(Some(&format!("\u{201C}{}\u{201D}", question.title)));

    for (idx, option) in question.options.iter().enumerate() {
        let btn = child(doc, wrap, "button", "quiz-option")?;
        if flow.selected() == Some(idx) {
            let _ = btn.class_list().add_1("selected");
        }
        let letter = child(doc, &btn, "span", "letter")?;
        letter.set_text_content(Some(OPTION_LETTERS[idx.min(3)]));
        let text = child(doc, &btn, "span", "")?;
        text.set_text_content(Some(option));

        let cb = Closure::wrap(Box::new(move || {
            crate::app::with(|app| app.quiz_select(idx));
        }) as Box<dyn FnMut()>);
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

fn render_stamps(doc: &Document, wrap: &Element, flow: &QuizFlow) -> Result<(), JsValue> {
    let title = child(doc, wrap, "h3", "quiz-title")?;
    title.set_text_content(Some("তোমার উত্তরগুলো 💌"));
    let lead = child(doc, wrap, "p", "quiz-lead")?;
    lead.set_text_content(Some("দেখো তুমি কী কী বলেছো…"));

    let stamps = child(doc, wrap, "div", "")?;
    for (i, answer) in flow.answers().iter().enumerate() {
        let class = if i % 2 == 0 { "stamp" } else { "stamp alt" };
        let stamp = child(doc, &stamps, "div", class)?;
        stamp.set_text_content(Some(&format!("📍 \u{201C}{answer}\u{201D}")));
        if let Some(el) = stamp.dyn_ref::<HtmlElement>() {
            let rot = STAMP_ROTATIONS[i % STAMP_ROTATIONS.len()];
            el.style().set_property("transform", &format!("rotate({rot}deg)"))?;
            el.style()
                .set_property("animation-delay", &format!("{}ms", 300 + i * 200))?;
        }
    }

    let next = child(doc, wrap, "button", "quiz-start")?;
    next.set_text_content(Some("সামনে এগোই ✨"));
    let cb = Closure::wrap(Box::new(move || {
        crate::app::with(|app| app.quiz_continue());
    }) as Box<dyn FnMut()>);
    next.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();

    let restart = child(doc, wrap, "button", "quiz-restart")?;
    restart.set_text_content(Some("আবার খেলো"));
    let cb = Closure::wrap(Box::new(move || {
        crate::app::with(|app| app.quiz_restart());
    }) as Box<dyn FnMut()>);
    restart.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

pub(crate) fn activate(doc: &Document) {
    if let Ok(Some(panel)) = doc.query_selector("#quiz-wrap") {
        replay_chars(&panel);
    }
}
