//! OpenAI ChatCompletions API types.

use serde::{Deserialize, Serialize};

/// Object type of a non-streaming completion.
pub const CHAT_COMPLETION_OBJECT: &str = "chat.completion";
/// Object type of a streaming completion chunk.
pub const CHAT_COMPLETION_CHUNK_OBJECT: &str = "chat.completion.chunk";
/// Role carried by every generated message.
pub const ASSISTANT_ROLE: &str = "assistant";
/// The only finish reason the relay ever reports.
pub const FINISH_REASON_STOP: &str = "stop";

/// OpenAI chat completion request.
///
/// Only the fields the relay acts on are modelled; anything else in the body
/// (temperature, tools, ...) is accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// Conversation messages, oldest first.
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Client-facing model identifier (e.g. "llama-3").
    #[serde(default)]
    pub model: String,
    /// Enable streaming response.
    #[serde(default)]
    pub stream: bool,
}

impl ChatRequest {
    /// The most recent message; the only one forwarded upstream.
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

/// Message in an OpenAI conversation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Role (system, user, assistant, tool).
    #[serde(default)]
    pub role: String,
    /// Message content; `null` and absent are both treated as empty.
    #[serde(default)]
    pub content: Option<MessageContent>,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(), content: Some(MessageContent::Text(content.into())) }
    }

    /// Flatten the content into plain text.
    pub fn text(&self) -> String {
        self.content.as_ref().map(MessageContent::text).unwrap_or_default()
    }
}

/// Content in an OpenAI message (string or array of parts).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text content.
    Text(String),
    /// Array of typed content parts.
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Concatenate all text; non-text parts contribute nothing.
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text { text } => Some(text.as_str()),
                    ContentPart::Unsupported => None,
                })
                .collect(),
        }
    }
}

/// Content part inside an array-form message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ContentPart {
    /// Text content part.
    #[serde(rename = "text")]
    Text { text: String },
    /// Images, audio and anything else the backend cannot receive.
    #[serde(other)]
    Unsupported,
}

/// OpenAI chat completion response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatCompletion {
    /// Response identifier.
    pub id: String,
    /// Object type ("chat.completion").
    pub object: String,
    /// Unix timestamp of creation.
    pub created: i64,
    /// Backend model display name.
    pub model: String,
    /// Completion choices (always exactly one).
    pub choices: Vec<CompletionChoice>,
}

/// Single completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: ResponseMessage,
    pub finish_reason: String,
}

/// Generated assistant message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseMessage {
    pub role: String,
    pub content: String,
}

/// One `data:` frame of a streamed completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatCompletionChunk {
    /// Shared by every frame of one response.
    pub id: String,
    /// Object type ("chat.completion.chunk").
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChunkChoice>,
}

/// Streaming choice carrying an incremental delta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkChoice {
    pub index: u32,
    pub delta: ChunkDelta,
    /// `null` on every frame except the last content frame.
    pub finish_reason: Option<String>,
}

/// Incremental message content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkDelta {
    /// Present only on the role-announcement frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub content: String,
}
