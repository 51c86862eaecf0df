// CORS middleware
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// create CORS layer
///
/// Browser-based chat frontends call the relay cross-origin; credentials are
/// carried in the Authorization header, never in cookies.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(3600))
}
