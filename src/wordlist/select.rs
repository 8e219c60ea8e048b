//! Definition selection for eligible records.
//!
//! Scans a record's senses in order and returns the first usable
//! definition: no disqualifying marker on the sense, a non-empty cleaned
//! gloss, not a cross-reference stub, and under the length ceiling. A
//! record whose senses all fail yields nothing and is dropped as a whole.

use super::types::models::RawSense;

/// Marker substrings that disqualify a sense. Matched case-insensitively
/// as substrings of any tag, label, or category value.
pub const BAD_MARKERS: &[&str] = &[
    "obsolete",
    "archaic",
    "dated",
    "slang",
    "vulgar",
    "derogatory",
    "offensive",
    "rare",
    "dialect",
    "dialectal",
    "historical",
    "misspelling",
];

/// Gloss prefixes that mark a pointer-definition rather than a real gloss.
/// Matched case-insensitively against the cleaned text.
pub const STUB_PREFIXES: &[&str] = &[
    "alternative form of",
    "alternative spelling of",
    "misspelling of",
    "obsolete form of",
    "archaic form of",
    "acronym of",
    "initialism of",
    "abbreviation of",
    "form of",
];

/// Longest accepted definition, in characters.
pub const MAX_DEFINITION_LEN: usize = 180;

/// Cleans a gloss into single-line ASCII text.
///
/// Whitespace runs (including newlines and tabs) collapse to one space and
/// the result is trimmed; characters outside the 7-bit ASCII range are
/// dropped, not transliterated. Dropping a character can itself strand
/// surrounding spaces, so the collapse runs again afterwards. Returns
/// `None` when nothing remains.
pub fn clean_text(text: &str) -> Option<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let ascii: String = collapsed.chars().filter(char::is_ascii).collect();
    let cleaned = ascii.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Whether any marker of the sense contains a disqualifying substring.
fn has_bad_marker(sense: &RawSense) -> bool {
    sense.markers().any(|marker| {
        let lower = marker.to_lowercase();
        BAD_MARKERS.iter().any(|bad| lower.contains(bad))
    })
}

/// Whether cleaned gloss text is a cross-reference stub.
fn is_stub(definition: &str) -> bool {
    let lower = definition.to_lowercase();
    STUB_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
}

/// Picks the first usable definition from a record's senses, in original
/// sense order.
///
/// Per sense: a disqualifying marker skips the sense; the first gloss
/// (see [`RawSense::first_gloss`]) is cleaned; empty, stub, or over-long
/// results skip the sense. Later glosses of the same sense are never
/// inspected.
pub fn pick_definition(senses: &[RawSense]) -> Option<String> {
    for sense in senses {
        if has_bad_marker(sense) {
            continue;
        }
        let gloss = match sense.first_gloss() {
            Some(gloss) => gloss,
            None => continue,
        };
        let definition = match clean_text(gloss) {
            Some(definition) => definition,
            None => continue,
        };
        if is_stub(&definition) {
            continue;
        }
        // Cleaned text is pure ASCII, so bytes and characters coincide
        if definition.len() > MAX_DEFINITION_LEN {
            continue;
        }
        return Some(definition);
    }
    None
}
