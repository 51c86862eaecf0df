//! # Julius Core
//!
//! Core relay logic: an OpenAI-compatible chat-completions surface in front of
//! the Julius playground chat backend.
//!
//! ## Architecture
//!
//! ```text
//! julius-core/src/proxy/
//! ├── middleware/   # Request gate (bearer auth) and CORS
//! ├── handlers/     # /v1/chat/completions and the liveness fallback
//! ├── upstream/     # Session initiator, chat client, reply aggregation
//! ├── mappers/      # OpenAI <-> Julius translation, synthetic SSE frames
//! ├── common/       # Model name mapping, HTTP client builder, ApiError
//! └── server.rs     # Axum router and server
//! ```
//!
//! Request flow: gate → session → chat (drained to completion) → synthesizer.

#![allow(clippy::map_err_ignore, reason = "Error context is provided in the replacement message")]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

pub mod proxy;

pub use julius_types::{RelayConfig, RelayError};
