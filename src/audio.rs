//! Background music: a looping track with volume ramps.
//!
//! Volume never jumps: toggling on plays from volume 0 and ramps up, toggling
//! off ramps down and pauses the element once the ramp reaches zero. A new
//! fade replaces any in-flight one. Autoplay rejection is never surfaced —
//! the element simply stays paused and playback is retried on the next user
//! interaction.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlAudioElement};

/// Resting playback volume once faded in (the track is a quiet bed).
pub const MUSIC_VOLUME: f64 = 0.04;
/// Default fade length.
pub const FADE_MS: f64 = 800.0;

/// Linear volume fade over wall-clock time. Pure so the ramp semantics are
/// testable without an audio element.
#[derive(Clone, Copy, Debug)]
pub struct VolumeRamp {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl VolumeRamp {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64) -> Self {
        Self { from, to, start_ms, duration_ms }
    }

    /// Current volume and whether the ramp has finished. Sampling past the
    /// end clamps to the target.
    pub fn sample(&self, now_ms: f64) -> (f64, bool) {
        if self.duration_ms <= 0.0 {
            return (self.to.clamp(0.0, 1.0), true);
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        let v = self.from + (self.to - self.from) * t;
        (v.clamp(0.0, 1.0), t >= 1.0)
    }

    /// True when this fade ends in silence (the player pauses on arrival).
    pub fn fades_out(&self) -> bool {
        self.to <= 0.0
    }
}

/// Candidate source URLs for an audio file, covering the base-path variants
/// the page may be served under. Order matters; duplicates are dropped.
pub fn audio_candidates(file_name: &str, base_path: Option<&str>) -> Vec<String> {
    let sanitized = file_name.trim_start_matches('/');
    let mut candidates: Vec<String> = Vec::new();
    if let Some(base) = base_path {
        let base = base.trim_end_matches('/');
        if !base.is_empty() && base != "/" {
            let normalized = if base.starts_with('/') {
                base.to_string()
            } else {
                format!("/{base}")
            };
            candidates.push(format!("{normalized}/{sanitized}"));
        }
    }
    candidates.push(format!("/{sanitized}"));
    candidates.push(format!("/special-day/{sanitized}"));
    let mut seen: Vec<String> = Vec::new();
    for c in candidates {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}

/// Looping background track with rAF-driven fades.
pub struct MusicPlayer {
    audio: HtmlAudioElement,
    ramp: Option<VolumeRamp>,
    /// Intent flag: the user wants music. Used to retry a blocked play on the
    /// next interaction.
    should_play: bool,
}

impl MusicPlayer {
    pub fn mount(doc: &Document, file_name: &str) -> Result<Self, JsValue> {
        let audio: HtmlAudioElement = doc.create_element("audio")?.dyn_into()?;
        let base = base_path_from_location();
        let candidates = audio_candidates(file_name, base.as_deref());
        audio.set_src(candidates.first().map(String::as_str).unwrap_or(file_name));
        audio.set_loop(true);
        audio.set_volume(0.0);
        audio.set_preload("auto");

        // Walk the remaining candidates on load error.
        if candidates.len() > 1 {
            let rest: Vec<String> = candidates[1..].to_vec();
            let idx = std::rc::Rc::new(std::cell::Cell::new(0usize));
            let el = audio.clone();
            let idx2 = idx.clone();
            let closure = Closure::wrap(Box::new(move || {
                let i = idx2.get();
                if i < rest.len() {
                    el.set_src(&rest[i]);
                    el.load();
                    idx2.set(i + 1);
                }
            }) as Box<dyn FnMut()>);
            audio.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(Self { audio, ramp: None, should_play: false })
    }

    pub fn is_on(&self) -> bool {
        self.should_play
    }

    /// Toggle music. Returns the new on/off state for the button visuals.
    pub fn toggle(&mut self, now_ms: f64) -> bool {
        if self.should_play {
            self.fade_to(0.0, now_ms);
            self.should_play = false;
        } else {
            self.audio.set_volume(0.0);
            // Autoplay may be blocked; `retry_if_blocked` picks it up later.
            let _ = self.audio.play();
            self.fade_to(MUSIC_VOLUME, now_ms);
            self.should_play = true;
        }
        self.should_play
    }

    /// A new fade cancels any in-flight one.
    fn fade_to(&mut self, target: f64, now_ms: f64) {
        self.ramp = Some(VolumeRamp::new(self.audio.volume(), target, now_ms, FADE_MS));
    }

    /// Called from the frame loop: advance the active ramp and pause the
    /// element when a fade-out lands on zero.
    pub fn tick(&mut self, now_ms: f64) {
        if let Some(ramp) = self.ramp {
            let (volume, done) = ramp.sample(now_ms);
            self.audio.set_volume(volume);
            if done {
                if ramp.fades_out() {
                    let _ = self.audio.pause();
                }
                self.ramp = None;
            }
        }
    }

    /// Deferred-retry condition for blocked autoplay: invoked from any user
    /// interaction, restarts playback (still from the current faded volume).
    pub fn retry_if_blocked(&mut self, now_ms: f64) {
        if self.should_play && self.audio.paused() {
            self.audio.set_volume(0.0);
            let _ = self.audio.play();
            self.fade_to(MUSIC_VOLUME, now_ms);
        }
    }
}

/// First path segment of the current URL, e.g. "/special-day" when hosted
/// under a project page. Lets the same bundle find its assets either way.
fn base_path_from_location() -> Option<String> {
    let pathname = web_sys::window()?.location().pathname().ok()?;
    let first = pathname.split('/').find(|s| !s.is_empty())?;
    Some(format!("/{first}"))
}
