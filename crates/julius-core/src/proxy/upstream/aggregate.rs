//! Reassembly of the backend's newline-delimited JSON reply into one answer.

use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use julius_types::RelayError;
use serde_json::{Map, Value};

/// What a single reply record contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Well-formed object with a string `content` fragment.
    Content(String),
    /// Well-formed object without a usable `content` field.
    NoContent,
    /// Not a JSON object; skipped.
    Malformed,
}

/// Decode one record (a line, with or without its terminator).
pub fn decode_record(line: &[u8]) -> RecordOutcome {
    match serde_json::from_slice::<Map<String, Value>>(line) {
        Ok(record) => match record.get("content").and_then(Value::as_str) {
            Some(fragment) => RecordOutcome::Content(fragment.to_string()),
            None => RecordOutcome::NoContent,
        },
        Err(_) => RecordOutcome::Malformed,
    }
}

/// Incremental line splitter and content accumulator.
///
/// Bytes may arrive split anywhere, including inside a multi-byte character;
/// records are only decoded once their terminating newline is seen.
#[derive(Debug, Default)]
pub struct ReplyAggregator {
    buffer: BytesMut,
    /// Prefix of `buffer` already known to hold no newline.
    scanned: usize,
    answer: String,
    records: usize,
    skipped: usize,
}

impl ReplyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a transport chunk, decoding every complete line it finishes.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
        while let Some(offset) = self.buffer[self.scanned..].iter().position(|&b| b == b'\n') {
            let line = self.buffer.split_to(self.scanned + offset + 1);
            self.scanned = 0;
            self.consume(&line);
        }
        self.scanned = self.buffer.len();
    }

    /// Return the answer. A trailing record without its newline is dropped.
    pub fn finish(self) -> String {
        if !self.buffer.is_empty() {
            tracing::debug!(
                "[Upstream] Dropping {} bytes of unterminated trailing record",
                self.buffer.len()
            );
        }
        if self.skipped > 0 {
            tracing::debug!(
                "[Upstream] Skipped {} of {} reply records that were not JSON objects",
                self.skipped,
                self.records
            );
        }
        self.answer
    }

    /// Answer accumulated so far.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Number of records skipped as malformed so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn consume(&mut self, line: &[u8]) {
        self.records += 1;
        match decode_record(line) {
            RecordOutcome::Content(fragment) => self.answer.push_str(&fragment),
            RecordOutcome::NoContent => {},
            RecordOutcome::Malformed => {
                // Skip and continue; a malformed record never fails the reply.
                self.skipped += 1;
                tracing::trace!("[Upstream] Skipping malformed record ({} bytes)", line.len());
            },
        }
    }
}

/// Drain a reply body to end-of-stream and return the concatenated answer.
///
/// A transport error at any point aborts the whole aggregation; content
/// gathered before the error is discarded.
pub async fn aggregate_reply<S, E>(stream: S) -> Result<String, RelayError>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: std::fmt::Display,
{
    let mut stream = std::pin::pin!(stream);
    let mut aggregator = ReplyAggregator::new();
    while let Some(item) = stream.next().await {
        match item {
            Ok(bytes) => aggregator.push(&bytes),
            Err(e) => {
                return Err(RelayError::unavailable(format!(
                    "Reply stream interrupted: {}",
                    e
                )));
            },
        }
    }
    Ok(aggregator.finish())
}
