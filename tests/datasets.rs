// Native tests for the static content datasets and text helpers.

use std::collections::HashSet;

use special_day::scenes::card::wrap_text;
use special_day::scenes::memories::MEMORIES;
use special_day::scenes::quiz::{OPTION_LETTERS, QUESTIONS};
use special_day::{audio, bengali_counter, nav, split_graphemes, to_bengali_digits};

#[test]
fn memories_have_unique_ids_and_complete_fields() {
    let mut seen = HashSet::new();
    for m in MEMORIES.iter() {
        assert!(seen.insert(m.id), "duplicate memory id {}", m.id);
        assert!(!m.title.is_empty(), "memory {} has no title", m.id);
        assert!(!m.date.is_empty(), "memory {} has no date", m.id);
        assert!(!m.description.is_empty(), "memory {} has no description", m.id);
        assert!(!m.icon.is_empty(), "memory {} has no icon", m.id);
    }
}

#[test]
fn memory_star_positions_stay_inside_the_panel() {
    for m in MEMORIES.iter() {
        for (x, y) in [(m.x, m.y), (m.mobile_x, m.mobile_y)] {
            assert!((0.0..=100.0).contains(&x), "memory {} x={x} out of range", m.id);
            assert!((0.0..=100.0).contains(&y), "memory {} y={y} out of range", m.id);
        }
    }
}

#[test]
fn every_question_offers_a_labelable_set_of_options() {
    for q in QUESTIONS.iter() {
        assert!(!q.title.is_empty());
        assert!(!q.emoji.is_empty());
        assert!(
            (2..=OPTION_LETTERS.len()).contains(&q.options.len()),
            "question '{}' has {} options",
            q.title,
            q.options.len()
        );
        for option in q.options {
            assert!(!option.is_empty(), "empty option under '{}'", q.title);
        }
    }
}

#[test]
fn section_descriptors_are_unique() {
    let ids: HashSet<&str> = nav::SECTIONS.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), nav::SECTIONS.len());
    for s in nav::SECTIONS.iter() {
        assert!(!s.name.is_empty());
        assert!(!s.label.is_empty());
    }
    assert_eq!(nav::SECTIONS[nav::STARS_SECTION].id, "stars");
}

#[test]
fn digits_convert_to_bengali() {
    assert_eq!(to_bengali_digits("0123456789"), "০১২৩৪৫৬৭৮৯");
    assert_eq!(to_bengali_digits("no digits"), "no digits");
    assert_eq!(bengali_counter(3, 6), "০৩ / ০৬");
    assert_eq!(bengali_counter(1, 10), "০১ / ১০");
}

#[test]
fn grapheme_split_keeps_vowel_signs_attached() {
    // ভালোবাসি: each consonant carries its vowel sign as one cluster.
    let clusters = split_graphemes("ভালোবাসি");
    assert_eq!(clusters, vec!["ভা", "লো", "বা", "সি"]);
}

#[test]
fn grapheme_split_keeps_conjuncts_together() {
    // স্মৃতি: the virama glues স and ম into a single cluster.
    let clusters = split_graphemes("স্মৃতি");
    assert_eq!(clusters, vec!["স্মৃ", "তি"]);
}

#[test]
fn grapheme_split_handles_ascii_and_empty_input() {
    assert_eq!(split_graphemes("abc"), vec!["a", "b", "c"]);
    assert!(split_graphemes("").is_empty());
}

#[test]
fn audio_candidates_are_deduped_and_base_path_first() {
    let with_base = audio::audio_candidates("music.mp3", Some("/special-day"));
    assert_eq!(with_base, vec!["/special-day/music.mp3", "/music.mp3"]);

    let without = audio::audio_candidates("music.mp3", None);
    assert_eq!(without, vec!["/music.mp3", "/special-day/music.mp3"]);

    // Root base path adds nothing.
    let root = audio::audio_candidates("/music.mp3", Some("/"));
    assert_eq!(root, vec!["/music.mp3", "/special-day/music.mp3"]);
}

#[test]
fn wrap_text_respects_the_column_budget() {
    let lines = wrap_text("a bb ccc dddd eeeee", 7);
    for line in &lines {
        assert!(line.chars().count() <= 7, "line '{line}' too wide");
    }
    assert_eq!(lines.join(" "), "a bb ccc dddd eeeee");

    assert_eq!(wrap_text("", 10), vec![String::new()]);
    // A single oversized word is kept on its own line rather than split.
    assert_eq!(wrap_text("abcdefghij", 4), vec!["abcdefghij".to_string()]);
}
