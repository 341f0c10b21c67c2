use std::sync::{Arc, Mutex};

use super::*;
use crate::llm::LlmChat;

struct MockLlm {
    reply: Result<String, fn() -> LlmError>,
    seen: Mutex<Vec<Vec<Message>>>,
}

impl MockLlm {
    fn replying(text: &str) -> Self {
        Self { reply: Ok(text.to_owned()), seen: Mutex::new(Vec::new()) }
    }

    fn failing(make: fn() -> LlmError) -> Self {
        Self { reply: Err(make), seen: Mutex::new(Vec::new()) }
    }
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(&self, messages: &[Message]) -> Result<String, LlmError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}

fn msg(role: &str, content: &str) -> Message {
    Message { role: role.into(), content: content.into() }
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================
// Success
// =============================================================

#[tokio::test]
async fn relays_reply_text() {
    let llm = Arc::new(MockLlm::replying("Hi there"));
    let state = AppState::new(llm.clone());
    let request = ChatRequest { messages: vec![msg("system", "be brief"), msg("user", "hello")] };

    let response = chat(State(state), Ok(Json(request))).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "message": "Hi there" }));
}

#[tokio::test]
async fn forwards_messages_in_order() {
    let llm = Arc::new(MockLlm::replying("ok"));
    let state = AppState::new(llm.clone());
    let messages = vec![msg("system", "s"), msg("user", "a"), msg("assistant", "b"), msg("user", "c")];

    let _response = chat(State(state), Ok(Json(ChatRequest { messages: messages.clone() }))).await;

    let seen = llm.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], messages);
}

// =============================================================
// Failures
// =============================================================

#[tokio::test]
async fn upstream_status_becomes_structured_500() {
    let llm = Arc::new(MockLlm::failing(|| LlmError::ApiResponse { status: 401, body: "bad key".into() }));
    let state = AppState::new(llm);

    let response = chat(State(state), Ok(Json(ChatRequest { messages: vec![msg("user", "hi")] })))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["name"], "ApiResponseError");
    assert_eq!(body["error"]["message"], "API response error: status 401");
    assert!(body["error"]["stack"].as_str().unwrap().contains("401"));
}

#[tokio::test]
async fn transport_failure_becomes_structured_500() {
    let llm = Arc::new(MockLlm::failing(|| LlmError::ApiRequest("connection refused".into())));
    let state = AppState::new(llm);

    let response = chat(State(state), Ok(Json(ChatRequest { messages: Vec::new() })))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["name"], "ApiRequestError");
    assert!(body["error"]["message"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn invalid_body_becomes_structured_500() {
    let response = RelayError::InvalidBody("expected value at line 1 column 1".into()).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["name"], "InvalidBodyError");
    assert!(body["error"]["message"].as_str().unwrap().starts_with("invalid request body"));
}

#[test]
fn request_accepts_extra_fields() {
    let request: ChatRequest =
        serde_json::from_str(r#"{"messages":[{"role":"user","content":"hi"}],"stream":false}"#).unwrap();
    assert_eq!(request.messages, vec![msg("user", "hi")]);
}
