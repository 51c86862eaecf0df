use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use julius_types::RelayError;
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::proxy::common::ApiError;
use crate::proxy::SecurityConfig;

/// Request gate applied to every route, including the liveness fallback.
pub async fn auth_middleware(
    State(security): State<Arc<SecurityConfig>>,
    request: Request,
    next: Next,
) -> Response {
    tracing::info!("Request: {} {}", request.method(), request.uri().path());

    match authorize(request.headers(), &security) {
        Ok(()) => next.run(request).await,
        Err(err) => {
            tracing::warn!("Rejected unauthenticated request to {}", request.uri().path());
            ApiError(err).into_response()
        },
    }
}

/// Allow or deny based on the `Authorization` header.
///
/// With no configured credential everything is allowed. Otherwise the header
/// value, minus a literal `Bearer ` prefix if present, must equal the
/// credential exactly.
pub fn authorize(headers: &HeaderMap, security: &SecurityConfig) -> Result<(), RelayError> {
    let Some(expected) = security.auth_token.as_deref() else {
        return Ok(());
    };

    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.strip_prefix("Bearer ").unwrap_or(s));

    match presented {
        Some(token) if constant_time_compare(token, expected) => Ok(()),
        _ => Err(RelayError::Unauthenticated),
    }
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
