#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test; panics are the assertion mechanism")]

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use julius_core::proxy::{build_proxy_router, AppState, JuliusClient, SecurityConfig, UpstreamEndpoints};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "sk-relay-test";

async fn mount_backend(server: &MockServer, reply: &str) {
    Mock::given(method("GET"))
        .and(path("/api/temp_user_id"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "temp_user_id": "tmp-1"})),
        )
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply.to_string()))
        .mount(server)
        .await;
}

fn relay(base_url: &str, auth_token: Option<&str>) -> TestServer {
    let client =
        JuliusClient::new(reqwest::Client::new(), UpstreamEndpoints::from_base_url(base_url));
    let security = Arc::new(SecurityConfig::new(auth_token.map(str::to_string)));
    TestServer::new(build_proxy_router(AppState::new(client), security))
        .expect("test server")
}

fn chat_body(model: &str, stream: bool) -> Value {
    json!({"messages": [{"role": "user", "content": "hi"}], "model": model, "stream": stream})
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("header value")
}

fn parse_sse(body: &str) -> Vec<String> {
    body.split("\n\n")
        .filter(|event| !event.is_empty())
        .map(|event| event.strip_prefix("data: ").expect("data prefix").to_string())
        .collect()
}

#[tokio::test]
async fn test_non_stream_completion() {
    let upstream = MockServer::start().await;
    mount_backend(&upstream, "{\"content\":\"hello\"}\n{\"content\":\" there\"}\n").await;

    let response = relay(&upstream.uri(), None)
        .post("/v1/chat/completions")
        .json(&chat_body("llama-3", false))
        .await;

    response.assert_status_ok();
    let content_type = response.header(header::CONTENT_TYPE);
    assert!(content_type.to_str().expect("ascii").starts_with("application/json"));

    let json: Value = response.json();
    assert_eq!(json["object"], "chat.completion");
    assert_eq!(json["model"], "Llama 3");
    assert!(json["id"].as_str().expect("id").starts_with("chatcmpl-"));
    assert_eq!(json["choices"].as_array().expect("choices").len(), 1);
    assert_eq!(json["choices"][0]["finish_reason"], "stop");
    assert_eq!(json["choices"][0]["message"]["role"], "assistant");
    assert_eq!(json["choices"][0]["message"]["content"], "hello there");
}

#[tokio::test]
async fn test_stream_completion_frames() {
    let upstream = MockServer::start().await;
    let answer = "a".repeat(120);
    mount_backend(&upstream, &format!("{{\"content\":\"{}\"}}\n", answer)).await;

    let response = relay(&upstream.uri(), None)
        .post("/v1/chat/completions")
        .json(&chat_body("llama-3", true))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header(header::CONTENT_TYPE), "text/event-stream");
    assert_eq!(response.header(header::CACHE_CONTROL), "no-cache");
    assert_eq!(response.header(header::CONNECTION), "keep-alive");

    let events = parse_sse(&response.text());
    assert_eq!(events.len(), 5);
    assert_eq!(events[4], "[DONE]");

    let frames: Vec<Value> = events[..4]
        .iter()
        .map(|e| serde_json::from_str(e).expect("json frame"))
        .collect();
    let id = frames[0]["id"].clone();
    assert!(frames.iter().all(|f| f["id"] == id && f["model"] == "Llama 3"));
    assert_eq!(frames[0]["choices"][0]["delta"]["role"], "assistant");

    let lengths: Vec<usize> = frames[1..]
        .iter()
        .map(|f| f["choices"][0]["delta"]["content"].as_str().expect("content").len())
        .collect();
    assert_eq!(lengths, vec![50, 50, 20]);
    assert_eq!(frames[3]["choices"][0]["finish_reason"], "stop");
    assert_eq!(frames[1]["choices"][0]["finish_reason"], Value::Null);
}

#[tokio::test]
async fn test_only_last_message_forwarded() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/temp_user_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"temp_user_id": "tmp-1"})))
        .mount(&upstream)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_partial_json(json!({
            "message": {"content": "latest question", "role": "user"},
            "selectedModels": ["GPT-4o mini"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"content\":\"ok\"}\n"))
        .expect(1)
        .mount(&upstream)
        .await;

    let response = relay(&upstream.uri(), None)
        .post("/v1/chat/completions")
        .json(&json!({
            "model": "unknown-model",
            "messages": [
                {"role": "user", "content": "old question"},
                {"role": "assistant", "content": "old answer"},
                {"role": "user", "content": "latest question"}
            ]
        }))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["model"], "GPT-4o mini");
}

#[tokio::test]
async fn test_auth_disabled_allows_missing_header() {
    let upstream = MockServer::start().await;
    mount_backend(&upstream, "{\"content\":\"ok\"}\n").await;

    relay(&upstream.uri(), None)
        .post("/v1/chat/completions")
        .json(&chat_body("llama-3", false))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_auth_enabled() {
    let upstream = MockServer::start().await;
    mount_backend(&upstream, "{\"content\":\"ok\"}\n").await;
    let server = relay(&upstream.uri(), Some(TOKEN));

    let response = server.post("/v1/chat/completions").json(&chat_body("llama-3", false)).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.text(), "Access Denied");

    server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, bearer("wrong"))
        .json(&chat_body("llama-3", false))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, bearer(TOKEN))
        .json(&chat_body("llama-3", false))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_auth_applies_to_liveness() {
    let server = relay("http://127.0.0.1:1", Some(TOKEN));

    server.get("/").await.assert_status(StatusCode::UNAUTHORIZED);
    server
        .get("/")
        .add_header(header::AUTHORIZATION, bearer(TOKEN))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_liveness_fallback() {
    let server = relay("http://127.0.0.1:1", None);

    for path in ["/", "/health", "/v1/models", "/v1/chat/completions/extra"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let json: Value = response.json();
        assert_eq!(json["status"], "Julius2Api Service Running...", "path {}", path);
        assert_eq!(json["message"], "MoLoveSze...");
    }

    server.post("/anything").await.assert_status_ok();
}

#[tokio::test]
async fn test_method_not_allowed() {
    let server = relay("http://127.0.0.1:1", None);

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = server.method(method.clone(), "/v1/chat/completions").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.text(), "Method not allowed", "method {}", method);
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let server = relay("http://127.0.0.1:1", None);

    let response = server.post("/v1/chat/completions").text("{\"messages\": [").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(!response.text().is_empty());

    let response = server
        .post("/v1/chat/completions")
        .json(&json!({"model": "llama-3", "messages": []}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upstream_failure_is_500() {
    let server = relay("http://127.0.0.1:1", None);

    let response = server.post("/v1/chat/completions").json(&chat_body("llama-3", true)).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("Upstream unavailable"));
}

#[tokio::test]
async fn test_session_protocol_error_is_500() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/temp_user_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "error"})))
        .mount(&upstream)
        .await;

    let response = relay(&upstream.uri(), None)
        .post("/v1/chat/completions")
        .json(&chat_body("llama-3", false))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("temp_user_id"));
}
