//! HTTP rendering of relay errors.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use julius_types::RelayError;

/// Axum-facing wrapper around [`RelayError`].
///
/// Renders as `text/plain` with the error's display text and mapped status.
#[derive(Debug)]
pub struct ApiError(pub RelayError);

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if self.0.is_client_error() {
            tracing::debug!("Request rejected ({}): {}", status, self.0);
        } else if self.0.is_upstream_error() {
            tracing::error!("Upstream failure: {}", self.0);
        } else {
            tracing::error!("Request failed: {}", self.0);
        }
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0.to_string(),
        )
            .into_response()
    }
}
