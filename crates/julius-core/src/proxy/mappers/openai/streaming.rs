//! Synthetic SSE replay of a complete answer.
//!
//! The whole answer is known before the first frame is produced; slicing it
//! only satisfies clients that asked for `stream: true`.

use bytes::Bytes;
use julius_types::protocol::openai::{
    ASSISTANT_ROLE, CHAT_COMPLETION_CHUNK_OBJECT, FINISH_REASON_STOP,
};
use julius_types::protocol::{ChatCompletionChunk, ChunkChoice, ChunkDelta};
use julius_types::RelayError;

use super::response::CompletionMeta;

/// Characters (Unicode scalar values) per content frame.
pub const CHUNK_SIZE: usize = 50;

const DONE_FRAME: &str = "data: [DONE]\n\n";

/// One SSE event of a synthetic stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamFrame {
    Chunk(ChatCompletionChunk),
    /// Terminal `[DONE]` sentinel.
    Done,
}

impl StreamFrame {
    /// Format as a `data: ...\n\n` SSE event.
    pub fn to_sse(&self) -> Result<Bytes, RelayError> {
        match self {
            Self::Chunk(chunk) => {
                let json = serde_json::to_string(chunk)
                    .map_err(|e| RelayError::RequestEncoding { message: e.to_string() })?;
                Ok(Bytes::from(format!("data: {}\n\n", json)))
            },
            Self::Done => Ok(Bytes::from_static(DONE_FRAME.as_bytes())),
        }
    }
}

/// Split `text` into consecutive slices of at most `chunk_size` characters.
///
/// Never splits inside a character. Empty input yields no slices.
pub fn split_into_chunks(text: &str, chunk_size: usize) -> Vec<String> {
    let chunk_size = chunk_size.max(1);
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(chunk_size).map(|slice| slice.iter().collect()).collect()
}

/// Build the full frame sequence: role announcement, one frame per slice
/// (`finish_reason: "stop"` on the last only), then `[DONE]`.
pub fn build_stream_chunks(
    answer: &str,
    meta: &CompletionMeta,
    chunk_size: usize,
) -> Vec<StreamFrame> {
    let slices = split_into_chunks(answer, chunk_size);
    let last = slices.len().saturating_sub(1);

    let mut frames = Vec::with_capacity(slices.len() + 2);
    frames.push(StreamFrame::Chunk(chunk(
        meta,
        ChunkDelta { role: Some(ASSISTANT_ROLE.to_string()), content: String::new() },
        None,
    )));
    for (i, slice) in slices.into_iter().enumerate() {
        let finish_reason = (i == last).then(|| FINISH_REASON_STOP.to_string());
        frames.push(StreamFrame::Chunk(chunk(
            meta,
            ChunkDelta { role: None, content: slice },
            finish_reason,
        )));
    }
    frames.push(StreamFrame::Done);
    frames
}

/// Encode every frame up front so an encoding failure surfaces before any
/// byte of the response is written.
pub fn encode_sse_frames(frames: &[StreamFrame]) -> Result<Vec<Bytes>, RelayError> {
    frames.iter().map(StreamFrame::to_sse).collect()
}

fn chunk(meta: &CompletionMeta, delta: ChunkDelta, finish_reason: Option<String>) -> ChatCompletionChunk {
    ChatCompletionChunk {
        id: meta.id.clone(),
        object: CHAT_COMPLETION_CHUNK_OBJECT.to_string(),
        created: meta.created,
        model: meta.model.clone(),
        choices: vec![ChunkChoice { index: 0, delta, finish_reason }],
    }
}
