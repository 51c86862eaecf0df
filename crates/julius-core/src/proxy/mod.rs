//! Proxy module - OpenAI-compatible relay to the Julius backend
//!
//! Every entity here is created per request and dropped once the response is
//! written. The only process-wide state is the static model table, the
//! security config and the shared HTTP client, all read-only.

pub mod common;
pub mod handlers;
pub mod mappers;
pub mod middleware;
pub mod security;
pub mod server;
pub mod upstream;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use common::model_mapping::resolve_backend_model;
pub use security::SecurityConfig;
pub use server::{build_proxy_router, AppState, RelayServer};
pub use upstream::{JuliusClient, UpstreamEndpoints};
