// OpenAI-compatible API handlers

mod chat;
mod stream_handler;

pub use chat::handle_chat_completions;
pub use stream_handler::build_sse_response;
