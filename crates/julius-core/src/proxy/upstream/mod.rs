//! Upstream module - client for the Julius playground backend

pub mod aggregate;
pub mod client;
pub mod emulation;

pub use aggregate::{aggregate_reply, decode_record, RecordOutcome, ReplyAggregator};
pub use client::{JuliusClient, UpstreamSession};

use julius_types::models::DEFAULT_UPSTREAM_BASE_URL;

const SESSION_PATH: &str = "/api/temp_user_id";
const CHAT_PATH: &str = "/api/chat/message";

/// Resolved backend URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamEndpoints {
    /// `GET` returning `{status, temp_user_id}`
    pub session_url: String,
    /// `POST` returning newline-delimited JSON records
    pub chat_url: String,
}

impl UpstreamEndpoints {
    /// Derive both endpoints from a base origin.
    ///
    /// An empty or unparsable base falls back to the public playground.
    pub fn from_base_url(raw: &str) -> Self {
        let base = resolve_base_url(raw);
        Self {
            session_url: format!("{}{}", base, SESSION_PATH),
            chat_url: format!("{}{}", base, CHAT_PATH),
        }
    }
}

impl Default for UpstreamEndpoints {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_UPSTREAM_BASE_URL)
    }
}

fn resolve_base_url(raw: &str) -> String {
    let url = raw.trim().trim_end_matches('/').to_string();
    if url.is_empty() {
        tracing::warn!("Upstream base URL is empty, using default");
        return DEFAULT_UPSTREAM_BASE_URL.to_string();
    }
    if url::Url::parse(&url).is_err() {
        tracing::warn!("Upstream base URL {:?} is not a valid URL, using default", url);
        return DEFAULT_UPSTREAM_BASE_URL.to_string();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = UpstreamEndpoints::default();
        assert_eq!(endpoints.session_url, "https://playground.julius.ai/api/temp_user_id");
        assert_eq!(endpoints.chat_url, "https://playground.julius.ai/api/chat/message");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let endpoints = UpstreamEndpoints::from_base_url("http://127.0.0.1:9000/");
        assert_eq!(endpoints.session_url, "http://127.0.0.1:9000/api/temp_user_id");
    }

    #[test]
    fn test_invalid_base_falls_back() {
        assert_eq!(UpstreamEndpoints::from_base_url("not a url"), UpstreamEndpoints::default());
        assert_eq!(UpstreamEndpoints::from_base_url("  "), UpstreamEndpoints::default());
    }
}
