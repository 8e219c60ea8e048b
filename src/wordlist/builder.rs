//! Single-pass orchestration of the word list pipeline.

use log::{debug, info};

use super::classify;
use super::config::BuildConfig;
use super::select;
use super::sink::WordlistSink;
use super::source::RecordSource;
use super::types::error::{BuildError, Result};
use super::types::models::BuildReport;

/// Runs the filter pipeline: source → classifier → selector → sink.
///
/// One sequential forward pass over the dump. The only state carried
/// across records is the growing entry sequence and the seen-word set,
/// both owned by the sink.
#[derive(Debug)]
pub struct WordlistBuilder {
    config: BuildConfig,
}

impl WordlistBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Builds the word list and writes the output document.
    ///
    /// The pass ends when the entry cap is reached or the input is
    /// exhausted, whichever comes first; input past the cap is never read.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source file does not exist or cannot be opened
    /// - The stream fails mid-read (corrupt gzip data, invalid UTF-8)
    /// - The output document cannot be written
    pub fn run(&self) -> Result<BuildReport> {
        if !self.config.source.exists() {
            return Err(BuildError::MissingSource(self.config.source.clone()));
        }

        info!(
            "Building word list from {} (limit {})",
            self.config.source.display(),
            self.config.limit
        );

        let mut source = RecordSource::open(&self.config.source)?;
        let mut sink = WordlistSink::new(self.config.limit);

        // Check the cap before pulling the next line, so nothing past it
        // is read or parsed
        while !sink.is_full() {
            let record = match source.next() {
                Some(Ok(record)) => record,
                Some(Err(e)) => return Err(e),
                None => break,
            };

            let word = match classify::eligible_word(&record, sink.seen()) {
                Some(word) => word,
                None => continue,
            };
            let definition = match select::pick_definition(record.senses()) {
                Some(definition) => definition,
                None => continue,
            };

            sink.accept(word, definition);
        }

        if sink.is_full() {
            info!("Entry cap reached after {} lines", source.lines_read());
        } else {
            debug!("Source exhausted after {} lines", source.lines_read());
        }

        sink.write_to(&self.config.output, self.config.format)?;

        Ok(BuildReport {
            entries_written: sink.len(),
            lines_read: source.lines_read(),
        })
    }
}
