//! Build configuration.

use std::path::PathBuf;

/// Default maximum number of entries in the output word list.
pub const DEFAULT_LIMIT: usize = 50_000;

/// Shape of the emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// A JS data module: `window.WORDS = [...];` with a trailing newline.
    /// Loadable directly via a `<script>` tag.
    #[default]
    JsModule,
    /// The bare JSON array with a trailing newline.
    Json,
}

/// Configuration for a single build run.
///
/// The filtering rule sets (allowed parts of speech, disqualifying markers,
/// stub prefixes, word shape, definition length ceiling) are fixed
/// constants in [`classify`](crate::wordlist::classify) and
/// [`select`](crate::wordlist::select); this struct only carries the knobs
/// the command line exposes.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Path to the gzip-compressed JSONL dump.
    pub source: PathBuf,
    /// Path the output document is written to (overwritten if present).
    pub output: PathBuf,
    /// Maximum number of entries to accept before the pass stops.
    pub limit: usize,
    /// Output document shape.
    pub format: OutputFormat,
}

impl BuildConfig {
    /// Creates a configuration with the default limit and format.
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            limit: DEFAULT_LIMIT,
            format: OutputFormat::default(),
        }
    }
}
