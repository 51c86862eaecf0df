// OpenAI mapper module
// Handles OpenAI request -> Julius prompt and answer -> OpenAI response conversion

pub mod request;
pub mod response;
pub mod streaming;

pub use request::{parse_chat_request, UpstreamPrompt};
pub use response::{build_completion, CompletionMeta};
pub use streaming::{build_stream_chunks, encode_sse_frames, split_into_chunks, StreamFrame, CHUNK_SIZE};
