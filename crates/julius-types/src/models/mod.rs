//! Process configuration models for the relay.

mod config;

pub use config::{RelayConfig, UpstreamConfig, DEFAULT_UPSTREAM_BASE_URL};
