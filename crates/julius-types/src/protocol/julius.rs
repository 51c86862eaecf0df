//! Julius playground chat API types.
//!
//! The backend is an opaque web service; these shapes mirror what its web
//! client sends and receives.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/temp_user_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TempUserResponse {
    #[serde(default)]
    pub status: Option<String>,
    /// Short-lived identity token sent back as the `is-demo` header.
    #[serde(default)]
    pub temp_user_id: Option<String>,
}

impl TempUserResponse {
    /// The token, if present and non-empty.
    pub fn token(&self) -> Option<&str> {
        self.temp_user_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Body of `POST /api/chat/message`.
///
/// Everything except the message text and the model selection is a fixed
/// operational flag, never derived from client input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JuliusChatRequest {
    pub message: JuliusMessage,
    pub provider: String,
    pub chat_mode: String,
    pub client_version: String,
    pub theme: String,
    pub new_images: Option<Vec<String>>,
    pub new_attachments: Option<Vec<String>>,
    pub dataframe_format: String,
    #[serde(rename = "selectedModels")]
    pub selected_models: Vec<String>,
}

impl JuliusChatRequest {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            message: JuliusMessage { content: content.into(), role: "user".to_string() },
            provider: "default".to_string(),
            chat_mode: "auto".to_string(),
            client_version: "20240130".to_string(),
            theme: "dark".to_string(),
            new_images: None,
            new_attachments: None,
            dataframe_format: "json".to_string(),
            selected_models: vec![model.into()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JuliusMessage {
    pub content: String,
    pub role: String,
}
