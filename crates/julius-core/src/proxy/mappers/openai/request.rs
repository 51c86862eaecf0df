//! OpenAI chat request → Julius prompt.

use julius_types::protocol::ChatRequest;
use julius_types::RelayError;

use crate::proxy::common::model_mapping::resolve_backend_model;

/// What actually crosses the boundary for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamPrompt {
    /// Text of the most recent message. Earlier turns are not transmitted.
    pub message: String,
    /// Backend display name, e.g. "Llama 3".
    pub backend_model: &'static str,
    /// Whether the client asked for SSE.
    pub stream: bool,
}

impl UpstreamPrompt {
    pub fn from_request(request: &ChatRequest) -> Result<Self, RelayError> {
        let last = request
            .last_message()
            .ok_or_else(|| RelayError::malformed("messages must contain at least one message"))?;

        if request.messages.len() > 1 {
            tracing::debug!(
                "Forwarding only the last of {} messages; earlier turns are dropped",
                request.messages.len()
            );
        }

        Ok(Self {
            message: last.text(),
            backend_model: resolve_backend_model(&request.model),
            stream: request.stream,
        })
    }
}

/// Decode an inbound body. Decode failures carry serde's message verbatim.
pub fn parse_chat_request(body: &[u8]) -> Result<ChatRequest, RelayError> {
    serde_json::from_slice(body).map_err(|e| RelayError::malformed(e.to_string()))
}
