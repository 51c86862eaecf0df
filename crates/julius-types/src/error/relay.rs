//! Request-level relay errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can terminate the handling of a single relay request.
///
/// None of these are retried. The `Display` output is the plain-text body
/// sent to the client.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum RelayError {
    /// Bearer credential missing or wrong while one is configured
    #[error("Access Denied")]
    Unauthenticated,

    /// Non-POST request on the completions path
    #[error("Method not allowed")]
    MethodNotSupported,

    /// Inbound body could not be decoded into a chat request
    #[error("{message}")]
    MalformedRequest { message: String },

    /// Backend could not be reached (connect failure, reset, mid-stream read error)
    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable { message: String },

    /// Backend answered but the body lacked the expected shape
    #[error("Upstream protocol error: {message}")]
    UpstreamProtocol { message: String },

    /// A JSON body (outbound backend request or outgoing frame) could not be serialized
    #[error("Encoding failed: {message}")]
    RequestEncoding { message: String },

    /// Client connection dropped while frames were being written
    #[error("Response write failed: {message}")]
    ResponseWrite { message: String },
}

impl RelayError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest { message: message.into() }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable { message: message.into() }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::UpstreamProtocol { message: message.into() }
    }

    /// Check if this error was caused by the inbound request (4xx equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated | Self::MethodNotSupported | Self::MalformedRequest { .. }
        )
    }

    /// Check if this error originated at the backend boundary.
    pub fn is_upstream_error(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable { .. } | Self::UpstreamProtocol { .. })
    }

    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Unauthenticated => 401,
            Self::MethodNotSupported => 405,
            Self::MalformedRequest { .. } => 400,
            Self::UpstreamUnavailable { .. }
            | Self::UpstreamProtocol { .. }
            | Self::RequestEncoding { .. }
            | Self::ResponseWrite { .. } => 500,
        }
    }
}
