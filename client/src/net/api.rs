//! HTTP client for the chat relay.
//!
//! Client-side (hydrate): real request via `gloo-net`.
//! Server-side (SSR): returns an error; the terminal only sends from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as display strings so the terminal can print them
//! inline instead of aborting the conversation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ChatMessage;
#[cfg(feature = "hydrate")]
use super::types::{ChatErrorBody, ChatReply, ChatRequest};

#[cfg(feature = "hydrate")]
const CHAT_ENDPOINT: &str = "/api/chat";

#[cfg(any(test, feature = "hydrate"))]
fn chat_failed_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("chat request failed ({status}): {detail}"),
        _ => format!("chat request failed: {status}"),
    }
}

/// Send the conversation to `POST /api/chat` and return the assistant reply.
///
/// # Errors
///
/// Returns a display string on transport failure, non-success status, or an
/// unparseable body.
pub async fn send_chat(messages: Vec<ChatMessage>) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = ChatRequest { messages };
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = match resp.json::<ChatErrorBody>().await {
                Ok(body) => Some(body.error.message),
                Err(e) => {
                    log::debug!("chat error body unreadable: {e}");
                    None
                }
            };
            return Err(chat_failed_message(status, detail.as_deref()));
        }
        let reply: ChatReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(reply.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = messages;
        Err("not available on server".to_owned())
    }
}
