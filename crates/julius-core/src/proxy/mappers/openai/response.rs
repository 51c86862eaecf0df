//! Complete answer → non-streaming OpenAI completion.

use julius_types::protocol::openai::{
    ASSISTANT_ROLE, CHAT_COMPLETION_OBJECT, FINISH_REASON_STOP,
};
use julius_types::protocol::{ChatCompletion, CompletionChoice, ResponseMessage};
use uuid::Uuid;

/// Identifiers shared by every object emitted for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionMeta {
    pub id: String,
    pub created: i64,
    pub model: String,
}

impl CompletionMeta {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            id: format!("chatcmpl-{}", Uuid::new_v4().simple()),
            created: chrono::Utc::now().timestamp(),
            model: model.into(),
        }
    }
}

/// Build the single completion object.
pub fn build_completion(answer: &str, meta: &CompletionMeta) -> ChatCompletion {
    ChatCompletion {
        id: meta.id.clone(),
        object: CHAT_COMPLETION_OBJECT.to_string(),
        created: meta.created,
        model: meta.model.clone(),
        choices: vec![CompletionChoice {
            index: 0,
            message: ResponseMessage {
                role: ASSISTANT_ROLE.to_string(),
                content: answer.to_string(),
            },
            finish_reason: FINISH_REASON_STOP.to_string(),
        }],
    }
}
