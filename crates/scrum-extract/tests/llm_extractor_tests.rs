//! crates/scrum-extract/tests/llm_extractor_tests.rs
//!
//! Drives `LlmScrumExtractor` against an in-process fake of the
//! chat-completions endpoint.

use axum::{
  Json, Router,
  http::{HeaderMap, StatusCode},
  routing::post,
};
use serde_json::{Value, json};

use scrum_extract::{ExtractError, ExtractorConfig, LlmScrumExtractor, ScrumExtractor};

/// Starts `router` on an ephemeral port and returns its base URL
async fn spawn_fake_llm(router: Router) -> String {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
  let addr = listener.local_addr().expect("local addr");
  tokio::spawn(async move {
    axum::serve(listener, router).await.expect("fake server");
  });
  format!("http://{addr}/v1")
}

fn completion(content: &str) -> Value {
  json!({
    "id": "chatcmpl-test",
    "choices": [
      { "index": 0, "message": { "role": "assistant", "content": content } }
    ]
  })
}

fn extractor_for(base_url: &str) -> LlmScrumExtractor {
  LlmScrumExtractor::new(
    ExtractorConfig::new("sk-test")
      .with_base_url(base_url)
      .with_model("gpt-test"),
  )
}

#[tokio::test]
async fn extract_returns_model_json() {
  let router = Router::new().route(
    "/v1/chat/completions",
    post(|headers: HeaderMap, Json(body): Json<Value>| async move {
      assert_eq!(headers["authorization"], "Bearer sk-test");
      assert_eq!(body["model"], "gpt-test");
      let system = body["messages"][0]["content"].as_str().unwrap_or_default().to_string();
      assert!(system.contains("2024-01-15"));
      Json(completion(r#"{"completed": ["fix bug"], "blockers": []}"#))
    }),
  );
  let base_url = spawn_fake_llm(router).await;

  let update = extractor_for(&base_url)
    .extract("Today I fixed a bug", "2024-01-15")
    .await
    .expect("extraction should succeed");

  assert_eq!(update.into_value(), json!({"completed": ["fix bug"], "blockers": []}));
}

#[tokio::test]
async fn extract_maps_error_status_to_api_error() {
  let router = Router::new().route(
    "/v1/chat/completions",
    post(|| async { (StatusCode::TOO_MANY_REQUESTS, "rate limited") }),
  );
  let base_url = spawn_fake_llm(router).await;

  let err = extractor_for(&base_url)
    .extract("Today I fixed a bug", "2024-01-15")
    .await
    .unwrap_err();

  assert_eq!(
    err,
    ExtractError::Api {
      status: 429,
      message: "rate limited".to_string(),
    }
  );
}

#[tokio::test]
async fn extract_rejects_non_json_content() {
  let router = Router::new().route(
    "/v1/chat/completions",
    post(|| async { Json(completion("I could not find a scrum update here.")) }),
  );
  let base_url = spawn_fake_llm(router).await;

  let err = extractor_for(&base_url).extract("hello", "2024-01-15").await.unwrap_err();

  assert!(matches!(err, ExtractError::Parse(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn extract_rejects_empty_choices() {
  let router = Router::new().route(
    "/v1/chat/completions",
    post(|| async { Json(json!({ "choices": [] })) }),
  );
  let base_url = spawn_fake_llm(router).await;

  let err = extractor_for(&base_url).extract("hello", "2024-01-15").await.unwrap_err();

  assert!(matches!(err, ExtractError::Parse(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn extract_reports_unreachable_endpoint_as_network_error() {
  // bind then drop to get a port nobody listens on
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
  let addr = listener.local_addr().expect("local addr");
  drop(listener);

  let err = extractor_for(&format!("http://{addr}/v1"))
    .extract("hello", "2024-01-15")
    .await
    .unwrap_err();

  assert!(matches!(err, ExtractError::Network(_)), "unexpected error: {err:?}");
}
