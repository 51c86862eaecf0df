use julius_types::protocol::{JuliusChatRequest, TempUserResponse};
use julius_types::RelayError;
use reqwest::Client;
use uuid::Uuid;

use super::aggregate::aggregate_reply;
use super::emulation::build_chat_headers;
use super::UpstreamEndpoints;

/// Temporary backend identity, scoped to a single relay request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamSession {
    pub token: String,
}

/// Client for the Julius playground.
///
/// Holds no per-request state; cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct JuliusClient {
    http_client: Client,
    endpoints: UpstreamEndpoints,
}

impl JuliusClient {
    /// Create a new client.
    ///
    /// Accepts a pre-built `reqwest::Client` so TLS setup happens once at
    /// startup rather than per request.
    pub fn new(http_client: Client, endpoints: UpstreamEndpoints) -> Self {
        Self { http_client, endpoints }
    }

    /// Acquire a temporary user id. No retries.
    pub async fn acquire_session(&self) -> Result<UpstreamSession, RelayError> {
        let response = self
            .http_client
            .get(&self.endpoints.session_url)
            .send()
            .await
            .map_err(|e| RelayError::unavailable(format!("Session request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::unavailable(format!("Session body read failed: {}", e)))?;

        let parsed: TempUserResponse = serde_json::from_slice(&body).map_err(|e| {
            RelayError::protocol(format!("Session response (HTTP {}) is not valid JSON: {}", status, e))
        })?;

        match parsed.token() {
            Some(token) => {
                tracing::debug!("[Upstream] Acquired temporary session (status: {:?})", parsed.status);
                Ok(UpstreamSession { token: token.to_string() })
            },
            None => Err(RelayError::protocol(format!(
                "Session response (HTTP {}) has no temp_user_id",
                status
            ))),
        }
    }

    /// Send one message and drain the reply to a single answer.
    ///
    /// A fresh conversation id is generated for every call.
    pub async fn send(
        &self,
        session: &UpstreamSession,
        message: &str,
        backend_model: &str,
    ) -> Result<String, RelayError> {
        let conversation_id = Uuid::new_v4().to_string();
        let body = serde_json::to_vec(&JuliusChatRequest::new(message, backend_model))
            .map_err(|e| RelayError::RequestEncoding { message: e.to_string() })?;
        let headers = build_chat_headers(&session.token, &conversation_id)?;

        tracing::debug!(
            "[Upstream] POST chat (model: {}, conversation: {}, {} bytes)",
            backend_model,
            conversation_id,
            body.len()
        );

        let response = self
            .http_client
            .post(&self.endpoints.chat_url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| RelayError::unavailable(format!("Chat request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            // The body is still drained; an error page simply yields no content.
            tracing::warn!("[Upstream] Chat endpoint answered HTTP {}", status);
        }

        let answer = aggregate_reply(response.bytes_stream()).await?;
        tracing::debug!("[Upstream] Reply complete: {} chars", answer.chars().count());
        Ok(answer)
    }
}
