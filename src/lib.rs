//! # wordlist-builder
//!
//! Builds a deduplicated word list with short definitions from a
//! gzip-compressed, line-delimited JSON dictionary dump (a kaikki.org
//! Wiktionary extract), as a static data asset for a word-guessing game.
//!
//! The pipeline is a single forward pass: each record is classified
//! (language, part of speech, headword shape, dedup), a definition is
//! selected from its senses, and accepted pairs accumulate up to a cap
//! before being serialized once.
pub mod wordlist;

// Re-export the main types for convenience
pub use wordlist::{
    BuildConfig, BuildError, BuildReport, OutputFormat, Result, WordEntry, WordlistBuilder,
    DEFAULT_LIMIT,
};
