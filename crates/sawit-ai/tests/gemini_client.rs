//! Gemini client tests against a `wiremock` server.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sawit_ai::persona::CONNECTION_APOLOGY;
use sawit_ai::{
    AiClient, AiError, ChatSession, DisplayEntry, GeminiClient, GeminiConfig, PageContext,
    SendOutcome, Turn,
};
use sawit_common::MemoryStore;

const GENERATE_PATH: &str = "/gemma-3-4b-it:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(GeminiConfig::new("test-key").with_base_url(server.uri()))
        .expect("client should build")
}

fn reply_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }],
        "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 3 }
    })
}

#[tokio::test]
async fn posts_history_with_generation_config_and_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [
                { "role": "user", "parts": [{ "text": "preamble" }] },
                { "role": "model", "parts": [{ "text": "hello" }] },
                { "role": "user", "parts": [{ "text": "hi" }] }
            ],
            "generationConfig": { "temperature": 0.85, "maxOutputTokens": 1024, "topP": 0.9 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("yo")))
        .expect(1)
        .mount(&server)
        .await;

    let turns = [
        Turn::user("preamble"),
        Turn::model("hello"),
        Turn::user("hi"),
    ];
    let response = client_for(&server)
        .send_message(&turns)
        .await
        .expect("request should succeed");

    assert_eq!(response.content, "yo");
    assert_eq!(response.usage.input_tokens, 12);
    assert_eq!(response.usage.output_tokens, 3);
}

#[tokio::test]
async fn error_object_is_reported_even_with_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "error": { "code": 429, "message": "quota exceeded" } })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&[Turn::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(err, AiError::ApiError(Some(ref m)) if m == "quota exceeded"));
}

#[tokio::test]
async fn error_status_with_error_object_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error": { "message": "API key not valid" } })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&[Turn::user("hi")])
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "API error: API key not valid");
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&[Turn::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(err, AiError::ParseError(_)), "got {err:?}");
    assert!(err.is_transport());
}

#[tokio::test]
async fn json_without_text_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "candidates": [{ "finishReason": "SAFETY" }] })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&[Turn::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(err, AiError::UnexpectedResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(reply_body("too late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::new(
        GeminiConfig::new("test-key")
            .with_base_url(server.uri())
            .with_request_timeout(Duration::from_millis(200)),
    )
    .expect("client should build");

    let err = client.send_message(&[Turn::user("hi")]).await.unwrap_err();

    assert!(matches!(err, AiError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on the discard port.
    let client = GeminiClient::new(
        GeminiConfig::new("test-key").with_base_url("http://127.0.0.1:9"),
    )
    .expect("client should build");

    let err = client.send_message(&[Turn::user("hi")]).await.unwrap_err();

    assert!(err.is_transport(), "got {err:?}");
}

#[tokio::test]
async fn empty_key_is_not_configured() {
    let client = GeminiClient::new(GeminiConfig::new("  ")).expect("client should build");
    assert!(!client.is_configured());
    let client = GeminiClient::new(GeminiConfig::new("abc")).expect("client should build");
    assert!(client.is_configured());
}

#[tokio::test]
async fn session_round_trip_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("**yo** bestie")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let store = Arc::new(MemoryStore::new());
    let session = ChatSession::new(PageContext::Projects, Box::new(store.clone()));
    session.initialize();

    let outcome = session.send(&client, "hi").await;

    assert!(matches!(outcome, SendOutcome::Replied(ref r) if r == "**yo** bestie"));
    let history = session.history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[3], Turn::model("**yo** bestie"));
    assert_eq!(
        sawit_ai::render_markdown(&session.display_log()[2].text),
        "<strong>yo</strong> bestie"
    );
}

#[tokio::test]
async fn session_rolls_back_when_server_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;
    let client = client_for(&server);
    let session = ChatSession::new(PageContext::Contact, Box::new(MemoryStore::new()));
    session.initialize();
    let before = session.history();

    let outcome = session.send(&client, "halo").await;

    assert!(matches!(outcome, SendOutcome::Failed { .. }));
    assert_eq!(session.history(), before);
    assert_eq!(
        session.display_log().last(),
        Some(&DisplayEntry::bot(CONNECTION_APOLOGY))
    );
    assert!(!session.is_busy());
}
