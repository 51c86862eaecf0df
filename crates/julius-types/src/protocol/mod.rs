//! Protocol definitions for both sides of the relay.
//!
//! - OpenAI (ChatCompletions API), the client-facing surface
//! - Julius playground chat API, the backend-facing surface

pub mod julius;
pub mod openai;

pub use julius::{JuliusChatRequest, JuliusMessage, TempUserResponse};
pub use openai::{
    ChatCompletion, ChatCompletionChunk, ChatMessage, ChatRequest, ChunkChoice, ChunkDelta,
    CompletionChoice, ContentPart, MessageContent, ResponseMessage,
};
