//! Typed error definitions for the relay.
//!
//! Every variant is terminal for the request that produced it and maps to
//! exactly one HTTP status code. Errors are:
//!
//! - **Serializable** for diagnostics via serde
//! - **Displayable** as the plain-text body returned to the client
//! - **Matchable** for status selection via enum variants

mod relay;

pub use relay::RelayError;

/// Standard Result type using RelayError.
pub type Result<T> = std::result::Result<T, RelayError>;
