//! Custom error types for the wordlist-builder crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Per-record problems (malformed lines, disqualified senses, duplicate
/// words) are filtering decisions inside the pipeline and never surface
/// here; only whole-run failures do.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The declared source file does not exist. Checked before any read.
    #[error("Missing source: {}", .0.display())]
    MissingSource(PathBuf),

    /// An error originating from I/O operations (open, read, write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The accumulated word list could not be rendered as JSON.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A convenience `Result` type alias using the crate's `BuildError` type.
pub type Result<T> = std::result::Result<T, BuildError>;
