//! Common utilities module
//!
//! Contains shared utilities for proxy handlers, the upstream client and mappers.

pub mod client_builder;
pub mod error;
pub mod model_mapping;

pub use error::ApiError;
pub use model_mapping::{resolve_backend_model, DEFAULT_BACKEND_MODEL};
