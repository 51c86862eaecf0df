//! Relay process configuration.
//!
//! The configuration is resolved once at startup and never mutated afterwards;
//! handlers only ever see immutable, cheaply cloned pieces of it.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public Julius playground origin.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://playground.julius.ai";

/// Full relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RelayConfig {
    /// Address to bind the listener to
    #[serde(default = "default_host")]
    #[validate(length(min = 1_u64))]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    #[validate(range(min = 1_u16))]
    pub port: u16,
    /// Expected bearer credential; `None` disables authorization entirely
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Backend endpoint configuration
    #[serde(default)]
    #[validate(nested)]
    pub upstream: UpstreamConfig,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            auth_token: None,
            upstream: UpstreamConfig::default(),
        }
    }
}

impl RelayConfig {
    /// Set the expected credential. Blank values disable authorization,
    /// matching an unset environment variable.
    #[must_use]
    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Get the full bind socket address.
    pub fn get_socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Backend origin. Session and chat paths are fixed relative to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct UpstreamConfig {
    /// Base URL without trailing slash (e.g. `https://playground.julius.ai`)
    #[serde(default = "default_upstream_base_url")]
    #[validate(length(min = 1_u64))]
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self { base_url: default_upstream_base_url() }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub const fn default_port() -> u16 {
    8045
}

fn default_upstream_base_url() -> String {
    DEFAULT_UPSTREAM_BASE_URL.to_string()
}
