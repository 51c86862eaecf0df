use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use julius_types::RelayError;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;

/// Stream pre-encoded SSE frames to the client.
pub fn build_sse_response(frames: Vec<Bytes>) -> Response {
    let (body, _writer) = spawn_frame_writer(frames);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        body,
    )
        .into_response()
}

/// Feed frames through a bounded channel from a writer task.
///
/// Once the client goes away the body (and receiver) is dropped, the next
/// send fails and the writer stops with [`RelayError::ResponseWrite`];
/// nothing is retried. On success the task yields the number of frames sent.
fn spawn_frame_writer(frames: Vec<Bytes>) -> (Body, JoinHandle<Result<usize, RelayError>>) {
    let (tx, rx) = mpsc::channel::<Result<Bytes, std::io::Error>>(1);
    let total = frames.len();

    let writer = tokio::spawn(async move {
        for (sent, frame) in frames.into_iter().enumerate() {
            if tx.send(Ok(frame)).await.is_err() {
                let err = RelayError::ResponseWrite {
                    message: format!("client disconnected after {} of {} frames", sent, total),
                };
                tracing::warn!("[OpenAI-SSE] {}", err);
                return Err(err);
            }
        }
        tracing::debug!("[OpenAI-SSE] Wrote {} frames", total);
        Ok(total)
    });

    (Body::from_stream(ReceiverStream::new(rx)), writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::time::Duration;

    fn frames(count: usize) -> Vec<Bytes> {
        (0..count).map(|i| Bytes::from(format!("data: {}\n\n", i))).collect()
    }

    #[tokio::test]
    async fn test_writer_sends_every_frame() {
        let (body, writer) = spawn_frame_writer(frames(3));
        let received: Vec<Bytes> =
            body.into_data_stream().map(|chunk| chunk.unwrap()).collect().await;

        assert_eq!(received, frames(3));
        assert_eq!(writer.await.unwrap(), Ok(3));
    }

    #[tokio::test]
    async fn test_writer_stops_when_client_disconnects() {
        let (body, writer) = spawn_frame_writer(frames(10));
        let mut data = body.into_data_stream();
        assert_eq!(data.next().await.unwrap().unwrap(), Bytes::from("data: 0\n\n"));
        drop(data);

        let outcome = tokio::time::timeout(Duration::from_secs(5), writer)
            .await
            .expect("writer must stop after the first failed send")
            .unwrap();
        match outcome {
            Err(RelayError::ResponseWrite { message }) => {
                assert!(message.contains("of 10 frames"), "got {}", message);
            },
            other => panic!("expected ResponseWrite, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sse_headers() {
        let response = build_sse_response(frames(1));
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "text/event-stream");
        assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-cache");
        assert_eq!(headers.get(header::CONNECTION).unwrap(), "keep-alive");
    }
}
