//! Core data structures for the word list pipeline.
//!
//! This module defines the record shapes consumed from the dump and the
//! entry shape written to the output document:
//! - Raw dump records and their senses (deserialization side)
//! - Accepted word entries (serialization side)
//! - The per-run build report

use serde::{Deserialize, Serialize};

/// One record decoded from a single line of the dump.
///
/// Only the fields the pipeline consumes are declared; everything else in
/// the line is ignored. All fields are optional because dump lines are not
/// guaranteed to carry any of them: a missing field simply fails the
/// relevant filter instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub senses: Option<Vec<RawSense>>,
}

impl RawRecord {
    /// Returns the record's senses, treating absent and `null` as empty.
    pub fn senses(&self) -> &[RawSense] {
        self.senses.as_deref().unwrap_or_default()
    }
}

/// One sense (meaning unit) of a raw record.
///
/// `tags`, `labels`, and `categories` act as disqualifying markers;
/// `glosses` and `raw_glosses` carry the definition text candidates.
#[derive(Debug, Default, Deserialize)]
pub struct RawSense {
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub glosses: Option<Vec<String>>,
    #[serde(default)]
    pub raw_glosses: Option<Vec<String>>,
}

impl RawSense {
    /// Iterates over all marker strings of this sense (tags, then labels,
    /// then categories). Absent fields contribute nothing.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .iter()
            .chain(self.labels.as_deref().unwrap_or_default())
            .chain(self.categories.as_deref().unwrap_or_default())
            .map(String::as_str)
    }

    /// Returns the first gloss candidate for this sense.
    ///
    /// `glosses` is preferred; `raw_glosses` is the fallback when `glosses`
    /// is absent or empty. Only the first element of whichever list is used
    /// is ever considered.
    pub fn first_gloss(&self) -> Option<&str> {
        let glosses = match self.glosses.as_deref() {
            Some(list) if !list.is_empty() => list,
            _ => self.raw_glosses.as_deref().unwrap_or_default(),
        };
        glosses.first().map(String::as_str)
    }
}

/// One accepted entry of the output word list.
///
/// `word` is the normalized headword (lowercase ASCII letters, 3–12 chars,
/// unique across the output); `definition` is a cleaned, single-line,
/// ASCII-only gloss of at most 180 characters. Field order matters: the
/// serialized objects carry `word` before `definition`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub definition: String,
}

/// Summary of a completed build run.
#[derive(Debug, Clone, Copy)]
pub struct BuildReport {
    /// Number of entries serialized to the output document.
    pub entries_written: usize,
    /// Number of input lines pulled from the source stream.
    pub lines_read: u64,
}
