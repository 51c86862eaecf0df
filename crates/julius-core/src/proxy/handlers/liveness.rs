use axum::{response::IntoResponse, Json};
use julius_types::RelayError;
use serde_json::json;

use crate::proxy::common::ApiError;

pub const LIVENESS_STATUS: &str = "Julius2Api Service Running...";
pub const LIVENESS_MESSAGE: &str = "MoLoveSze...";

/// Fallback for every path other than the completions route.
pub async fn handle_liveness() -> impl IntoResponse {
    tracing::trace!("Liveness probe");
    Json(json!({
        "status": LIVENESS_STATUS,
        "message": LIVENESS_MESSAGE,
    }))
}

/// Any method other than POST on the completions route.
pub async fn handle_method_not_allowed() -> ApiError {
    ApiError(RelayError::MethodNotSupported)
}
