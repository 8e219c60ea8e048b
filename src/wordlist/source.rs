//! Streaming record source for gzip-compressed JSONL dumps.
//!
//! [`RecordSource`] is a single forward pass over the dump: one line per
//! record, decoded lazily. Lines that are empty or fail JSON decoding are
//! skipped silently; only genuine read failures (missing data, corrupt
//! gzip stream, invalid UTF-8) surface as errors.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use super::types::error::Result;
use super::types::models::RawRecord;

/// Iterator over the records of a line-delimited JSON stream.
///
/// Yields `Result<RawRecord>`: decode failures of individual lines are
/// filtered out internally, so an `Err` item always means the underlying
/// stream itself failed and the pass cannot continue.
pub struct RecordSource<R: BufRead> {
    reader: R,
    line: String,
    lines_read: u64,
}

impl RecordSource<BufReader<MultiGzDecoder<File>>> {
    /// Opens a gzip-compressed JSONL file for a single forward pass.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening source stream: {}", path.display());
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(MultiGzDecoder::new(file))))
    }
}

impl<R: BufRead> RecordSource<R> {
    /// Wraps an already-decompressed line stream.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            lines_read: 0,
        }
    }

    /// Number of lines pulled from the stream so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}

impl<R: BufRead> Iterator for RecordSource<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => self.lines_read += 1,
                Err(e) => return Some(Err(e.into())),
            }

            let line = self.line.trim();
            if line.is_empty() {
                continue;
            }

            // Malformed lines are skipped, not errors
            match serde_json::from_str::<RawRecord>(line) {
                Ok(record) => return Some(Ok(record)),
                Err(_) => continue,
            }
        }
    }
}
