//! # Julius Types
//!
//! Wire types, configuration and error definitions for the Julius relay.
//!
//! - **`error`** - The relay's request-level error taxonomy
//! - **`models`** - Process configuration (listener, credential, upstream)
//! - **`protocol`** - OpenAI chat-completions and Julius backend wire formats
//!
//! ## Architecture Role
//!
//! `julius-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        julius-types (this crate)
//!               │
//!               ▼
//!          julius-core
//!               │
//!               ▼
//!         julius-server
//! ```
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{RelayError, Result};
pub use models::{RelayConfig, UpstreamConfig};
