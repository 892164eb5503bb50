// ABOUTME: Integration tests for the Gemini provider against a local mock server
// ABOUTME: Covers response parsing, empty candidates, quota errors, timeouts, and key handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Router;
use coachbot::errors::ErrorCode;
use coachbot::generation::{FailureKind, GenerationClient, GenerationOutcome, GenerationSettings};
use coachbot::llm::{ChatRequest, GeminiProvider, LlmProvider};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use common::init_test_logging;

const TEST_KEY: &str = "test-key-123";

/// Request seen by the mock server
#[derive(Debug, Clone)]
struct Captured {
    path: String,
    query: String,
    api_key: Option<String>,
    body: String,
}

struct MockGemini {
    base_url: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl MockGemini {
    /// Serve `body` with `status` for every request
    async fn start(status: StatusCode, body: Value) -> Self {
        Self::start_delayed(status, body, Duration::ZERO).await
    }

    /// Like `start`, but every answer is held back for `delay`
    async fn start_delayed(status: StatusCode, body: Value, delay: Duration) -> Self {
        init_test_logging();
        let captured = Arc::new(Mutex::new(Vec::new()));
        let seen = captured.clone();
        let payload = body.to_string();

        let handler = move |uri: Uri, headers: HeaderMap, request_body: String| {
            let seen = seen.clone();
            let payload = payload.clone();
            async move {
                seen.lock().unwrap().push(Captured {
                    path: uri.path().to_owned(),
                    query: uri.query().unwrap_or_default().to_owned(),
                    api_key: headers
                        .get("x-goog-api-key")
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_owned),
                    body: request_body,
                });
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                (
                    status,
                    [(axum::http::header::CONTENT_TYPE, "application/json")],
                    payload,
                )
            }
        };
        let app = Router::new().fallback(handler);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/v1beta"),
            captured,
        }
    }

    fn provider(&self) -> GeminiProvider {
        GeminiProvider::new(TEST_KEY)
            .unwrap()
            .with_base_url(self.base_url.clone())
    }

    fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

fn success_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 340,
            "totalTokenCount": 460
        }
    })
}

#[tokio::test]
async fn test_successful_completion_is_parsed() {
    let server = MockGemini::start(StatusCode::OK, success_body("Monday: tempo run")).await;
    let provider = server.provider();

    let request = ChatRequest::from_prompt("Build my week")
        .with_model("gemini-2.5-flash")
        .with_temperature(0.5)
        .with_max_tokens(8192);
    let response = provider.complete(&request).await.unwrap();

    assert_eq!(response.content, "Monday: tempo run");
    assert_eq!(response.model, "gemini-2.5-flash");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    let usage = response.usage.unwrap();
    assert_eq!(usage.prompt_tokens, 120);
    assert_eq!(usage.completion_tokens, 340);
    assert_eq!(usage.total_tokens, 460);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].path,
        "/v1beta/models/gemini-2.5-flash:generateContent"
    );

    let sent: Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(sent["contents"][0]["role"], "user");
    assert_eq!(sent["contents"][0]["parts"][0]["text"], "Build my week");
    assert_eq!(sent["generationConfig"]["maxOutputTokens"], 8192);
    assert_eq!(sent["generationConfig"]["candidateCount"], 1);
}

#[tokio::test]
async fn test_key_is_sent_in_header_not_url() {
    let server = MockGemini::start(StatusCode::OK, success_body("ok")).await;
    let provider = server.provider();

    provider
        .complete(&ChatRequest::from_prompt("hi"))
        .await
        .unwrap();
    provider.health_check().await.unwrap();

    for request in server.requests() {
        assert_eq!(request.api_key.as_deref(), Some(TEST_KEY));
        assert!(!request.query.contains(TEST_KEY));
        assert!(!request.path.contains(TEST_KEY));
        assert!(!request.body.contains(TEST_KEY));
    }
}

#[tokio::test]
async fn test_timeout_selects_timeout_hint() {
    let server = MockGemini::start_delayed(
        StatusCode::OK,
        success_body("too late"),
        Duration::from_secs(3),
    )
    .await;
    let provider = GeminiProvider::with_timeout(TEST_KEY, Duration::from_millis(200))
        .unwrap()
        .with_base_url(server.base_url.clone());
    let client = GenerationClient::new(Arc::new(provider));

    let outcome = client.generate("hi", &GenerationSettings::default()).await;

    let GenerationOutcome::Failed(err) = &outcome else {
        panic!("expected a failure, got {outcome:?}");
    };
    assert_eq!(err.kind, FailureKind::Timeout);
    assert_eq!(err.code, ErrorCode::ExternalServiceTimeout);
    assert_eq!(
        outcome.hint(),
        Some("The AI Coach took too long to respond. Please try again.")
    );
    assert!(!outcome.display_text().contains(TEST_KEY));
}

#[tokio::test]
async fn test_unreachable_server_error_hides_key() {
    init_test_logging();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = GeminiProvider::new(TEST_KEY)
        .unwrap()
        .with_base_url(format!("http://{addr}/v1beta"));
    let client = GenerationClient::new(Arc::new(provider));

    let outcome = client.generate("hi", &GenerationSettings::default()).await;

    let GenerationOutcome::Failed(err) = &outcome else {
        panic!("expected a failure, got {outcome:?}");
    };
    assert_eq!(err.kind, FailureKind::Transport);
    assert!(!err.message.contains(TEST_KEY));
    assert!(!outcome.display_text().contains(TEST_KEY));
}

#[tokio::test]
async fn test_default_model_is_used_when_request_has_none() {
    let server = MockGemini::start(StatusCode::OK, success_body("ok")).await;
    let provider = server.provider().with_default_model("gemini-2.0-flash");

    let response = provider
        .complete(&ChatRequest::from_prompt("hi"))
        .await
        .unwrap();

    assert_eq!(response.model, "gemini-2.0-flash");
    assert!(server.requests()[0]
        .path
        .ends_with("/models/gemini-2.0-flash:generateContent"));
}

#[tokio::test]
async fn test_empty_candidates_become_unavailable() {
    let server = MockGemini::start(
        StatusCode::OK,
        json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "SAFETY" }
        }),
    )
    .await;
    let client = GenerationClient::new(Arc::new(server.provider()));

    let outcome = client
        .generate("something", &GenerationSettings::default())
        .await;

    assert_eq!(
        outcome,
        GenerationOutcome::Unavailable {
            finish_reason: Some("SAFETY".to_owned())
        }
    );
}

#[tokio::test]
async fn test_missing_candidates_become_unavailable() {
    let server = MockGemini::start(StatusCode::OK, json!({})).await;
    let client = GenerationClient::new(Arc::new(server.provider()));

    let outcome = client.generate("hi", &GenerationSettings::default()).await;
    assert!(matches!(outcome, GenerationOutcome::Unavailable { .. }));
}

#[tokio::test]
async fn test_rate_limit_selects_quota_hint() {
    let server = MockGemini::start(
        StatusCode::TOO_MANY_REQUESTS,
        json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted. Please retry in 6.4s.",
                "status": "RESOURCE_EXHAUSTED"
            }
        }),
    )
    .await;
    let client = GenerationClient::new(Arc::new(server.provider()));

    let outcome = client.generate("hi", &GenerationSettings::default()).await;

    let GenerationOutcome::Failed(err) = &outcome else {
        panic!("expected a failure, got {outcome:?}");
    };
    assert_eq!(err.kind, FailureKind::Quota);
    assert_eq!(err.code, ErrorCode::ExternalRateLimited);
    assert!(err.message.contains("7 seconds"));
    assert_eq!(
        outcome.hint(),
        Some("API quota exceeded. Please wait a moment and try again.")
    );
}

#[tokio::test]
async fn test_invalid_key_is_reported() {
    let server = MockGemini::start(
        StatusCode::BAD_REQUEST,
        json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        }),
    )
    .await;
    let provider = server.provider();

    let err = provider
        .complete(&ChatRequest::from_prompt("hi"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalAuthFailed);

    assert!(!provider.health_check().await.unwrap());
    assert!(server.requests()[1].path.ends_with("/v1beta/models"));
}

#[tokio::test]
async fn test_health_check_accepts_key() {
    let server = MockGemini::start(StatusCode::OK, json!({ "models": [] })).await;
    assert!(server.provider().health_check().await.unwrap());
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let server = MockGemini::start(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": { "message": "Internal error encountered." } }),
    )
    .await;
    let client = GenerationClient::new(Arc::new(server.provider()));

    let outcome = client.generate("hi", &GenerationSettings::default()).await;
    let GenerationOutcome::Failed(err) = outcome else {
        panic!("expected a failure");
    };
    assert_eq!(err.kind, FailureKind::Transport);
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}
