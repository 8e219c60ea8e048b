//! Accumulation and serialization of accepted entries.
//!
//! [`WordlistSink`] owns the growing entry sequence and the set of
//! normalized words already accepted. Once the pass ends it renders the
//! sequence as a single UTF-8 document and writes it out whole.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{info, trace};

use super::config::OutputFormat;
use super::types::error::Result;
use super::types::models::WordEntry;

/// Global binding the JS data module assigns the entry array to.
const GLOBAL_BINDING: &str = "window.WORDS";

/// Accumulator for accepted `(word, definition)` pairs.
///
/// Entries keep their acceptance order; the seen set grows monotonically
/// and is used purely as a membership check, never serialized.
#[derive(Debug)]
pub struct WordlistSink {
    entries: Vec<WordEntry>,
    seen: HashSet<String>,
    limit: usize,
}

impl WordlistSink {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            seen: HashSet::new(),
            limit,
        }
    }

    /// Appends an accepted entry and marks its word as seen.
    pub fn accept(&mut self, word: String, definition: String) {
        trace!("Accepted entry #{}: {}", self.entries.len() + 1, word);
        self.seen.insert(word.clone());
        self.entries.push(WordEntry { word, definition });
    }

    /// Whether the configured entry cap has been reached.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }

    /// Normalized words accepted so far.
    pub fn seen(&self) -> &HashSet<String> {
        &self.seen
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Renders the accumulated sequence as the output document.
    ///
    /// Entries serialize as a JSON array of `{word, definition}` objects
    /// with 2-space indentation. [`OutputFormat::JsModule`] wraps the array
    /// in a `window.WORDS = ...;` assignment; [`OutputFormat::Json`] emits
    /// the bare array. Both end with a trailing newline.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        let document = match format {
            OutputFormat::JsModule => format!("{} = {};\n", GLOBAL_BINDING, json),
            OutputFormat::Json => format!("{}\n", json),
        };
        Ok(document)
    }

    /// Renders and writes the document to `path`, overwriting any existing
    /// file.
    pub fn write_to(&self, path: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
        let path = path.as_ref();
        let document = self.render(format)?;
        fs::write(path, document)?;
        info!("Wrote {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}
