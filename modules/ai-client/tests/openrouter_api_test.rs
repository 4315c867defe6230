//! OpenRouter client wire contract tests.
//!
//! These run against a local mock server and verify:
//! - Auth and attribution headers reach the endpoint
//! - The first choice's content comes back from `complete`
//! - Error statuses, timeouts, and empty responses map to the right variants

use std::time::Duration;

use ai_client::{AiError, ChatMessage, ChatModel, ChatRequest, OpenRouter};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> ChatRequest {
    ChatRequest::new("openai/gpt-4.1-mini", vec![ChatMessage::user("Say hello")])
        .with_temperature(0.0)
}

#[tokio::test]
async fn complete_returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("X-Title", "leanscope"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "hello"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 1, "total_tokens": 11}
        })))
        .mount(&server)
        .await;

    let client = OpenRouter::new("test-key")
        .with_base_url(server.uri())
        .with_app_name("leanscope");

    let reply = client
        .complete(&request(), None)
        .await
        .expect("completion should succeed");
    assert_eq!(reply, "hello");
}

#[tokio::test]
async fn error_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let client = OpenRouter::new("test-key").with_base_url(server.uri());

    let error = client.complete(&request(), None).await.expect_err("should fail");
    match error {
        AiError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "rate limited");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_times_out_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(serde_json::json!({
                    "choices": [{"message": {"role": "assistant", "content": "late"}}]
                })),
        )
        .mount(&server)
        .await;

    let client = OpenRouter::new("test-key").with_base_url(server.uri());

    let error = client
        .complete(&request(), Some(Duration::from_millis(50)))
        .await
        .expect_err("should time out");
    assert!(matches!(error, AiError::Network(_)), "got {error:?}");
}

#[tokio::test]
async fn empty_choices_maps_to_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": []
        })))
        .mount(&server)
        .await;

    let client = OpenRouter::new("test-key").with_base_url(server.uri());

    let error = client.complete(&request(), None).await.expect_err("should fail");
    assert!(matches!(error, AiError::Parse(_)), "got {error:?}");
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = OpenRouter::new("test-key").with_base_url(server.uri());

    let error = client.complete(&request(), None).await.expect_err("should fail");
    assert!(matches!(error, AiError::Parse(_)), "got {error:?}");
}
