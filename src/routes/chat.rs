//! Chat relay endpoint.
//!
//! `POST /api/chat` forwards `{"messages": [...]}` to the configured LLM and
//! answers `{"message": "<reply>"}`. Every failure, including an unreadable
//! request body, becomes a 500 with an `{"error": {message, name, stack}}`
//! payload; the process never crashes on a bad request.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::llm::{LlmError, Message};
use crate::state::AppState;

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub name: String,
    pub stack: String,
}

/// Per-request relay failure.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl RelayError {
    fn name(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "InvalidBodyError",
            Self::Llm(e) => e.name(),
        }
    }

    fn detail(&self) -> ErrorDetail {
        ErrorDetail { message: self.to_string(), name: self.name().to_owned(), stack: format!("{self:?}") }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorPayload { error: self.detail() })).into_response()
    }
}

/// `POST /api/chat`.
///
/// # Errors
///
/// Returns [`RelayError`] (rendered as a 500) when the body cannot be parsed
/// or the upstream call fails.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, RelayError> {
    let result = relay(&state, payload).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, name = e.name(), "chat relay failed");
    }
    result
}

async fn relay(
    state: &AppState,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, RelayError> {
    let Json(request) = payload.map_err(|e| RelayError::InvalidBody(e.body_text()))?;
    tracing::debug!(messages = request.messages.len(), "chat relay request");

    let message = state.llm.chat(&request.messages).await?;
    Ok(Json(ChatReply { message }))
}
