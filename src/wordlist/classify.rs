//! Record eligibility checks.
//!
//! A record qualifies for the word list iff its language matches exactly,
//! its part of speech is on the allow-list, its headword normalizes to the
//! accepted lexical shape, and the normalized word has not been accepted
//! before. All checks are pure; rejection has no side effects.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::types::models::RawRecord;

/// The only language accepted, compared case-sensitively.
pub const LANGUAGE: &str = "English";

/// Parts of speech eligible for the word list.
pub const ALLOWED_POS: &[&str] = &["noun", "verb", "adj", "adverb"];

/// Compiled lexical-shape pattern for normalized headwords.
static WORD_SHAPE: OnceLock<Regex> = OnceLock::new();

/// Returns the cached headword shape pattern: lowercase ASCII letters only,
/// 3 to 12 characters.
fn word_shape() -> &'static Regex {
    WORD_SHAPE.get_or_init(|| Regex::new(r"^[a-z]{3,12}$").expect("Invalid word shape pattern"))
}

/// Normalizes a raw headword: surrounding whitespace trimmed, lowercased.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Decides whether a record is eligible, returning its normalized headword
/// if so.
///
/// The checks run in order and short-circuit:
/// 1. `lang` equals [`LANGUAGE`] exactly
/// 2. `pos` is one of [`ALLOWED_POS`]
/// 3. the normalized word matches the lexical shape
/// 4. the normalized word is not already in `seen`
pub fn eligible_word(record: &RawRecord, seen: &HashSet<String>) -> Option<String> {
    if record.lang.as_deref() != Some(LANGUAGE) {
        return None;
    }

    let pos = record.pos.as_deref()?;
    if !ALLOWED_POS.contains(&pos) {
        return None;
    }

    let word = normalize_word(record.word.as_deref()?);
    if !word_shape().is_match(&word) {
        return None;
    }
    if seen.contains(&word) {
        return None;
    }

    Some(word)
}
