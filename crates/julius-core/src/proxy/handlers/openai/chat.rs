use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::{debug, info};

use super::stream_handler::build_sse_response;
use crate::proxy::common::ApiError;
use crate::proxy::mappers::openai::{
    build_completion, build_stream_chunks, encode_sse_frames, parse_chat_request, CompletionMeta,
    UpstreamPrompt, CHUNK_SIZE,
};
use crate::proxy::server::AppState;

/// `POST /v1/chat/completions`
///
/// Strictly sequential: session, then chat drained to completion, then the
/// response is synthesized from the full answer.
pub async fn handle_chat_completions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = parse_chat_request(&body)?;
    let prompt = UpstreamPrompt::from_request(&request)?;

    info!(
        "[OpenAI] Chat request: model {:?} -> {:?}, stream: {}",
        request.model, prompt.backend_model, prompt.stream
    );

    let session = state.upstream.acquire_session().await?;
    let answer = state.upstream.send(&session, &prompt.message, prompt.backend_model).await?;

    let meta = CompletionMeta::new(prompt.backend_model);
    debug!("[OpenAI] Answer ready for {} ({} chars)", meta.id, answer.chars().count());

    if prompt.stream {
        let frames = build_stream_chunks(&answer, &meta, CHUNK_SIZE);
        let encoded = encode_sse_frames(&frames)?;
        Ok(build_sse_response(encoded))
    } else {
        Ok(Json(build_completion(&answer, &meta)).into_response())
    }
}
