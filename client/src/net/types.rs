//! Wire types for `POST /api/chat`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Request body: the full ordered conversation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Success body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
}

/// Failure body (`500`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatErrorBody {
    pub error: ChatErrorDetail,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatErrorDetail {
    pub message: String,
    pub name: String,
    #[serde(default)]
    pub stack: Option<String>,
}
