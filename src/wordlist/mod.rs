//! Core word list pipeline module

pub mod types;

pub mod builder;
pub mod classify;
pub mod config;
pub mod select;
pub mod sink;
pub mod source;

pub use builder::WordlistBuilder;
pub use config::{BuildConfig, OutputFormat, DEFAULT_LIMIT};
pub use types::error::{BuildError, Result};
pub use types::models::{BuildReport, RawRecord, RawSense, WordEntry};
