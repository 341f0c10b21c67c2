//! LLM types: relay messages, errors, and the chat trait.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM configuration and client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set or empty.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be interpreted.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// Short error class name reported to relay clients.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "ConfigParseError",
            Self::MissingApiKey { .. } => "MissingApiKeyError",
            Self::ApiRequest(_) => "ApiRequestError",
            Self::ApiResponse { .. } => "ApiResponseError",
            Self::ApiParse(_) => "ApiParseError",
            Self::HttpClientBuild(_) => "HttpClientBuildError",
        }
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

/// One chat message, forwarded to the provider unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

// =============================================================================
// LLM CHAT TRAIT
// =============================================================================

/// Provider-neutral async chat. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Send the ordered conversation and return the assistant's reply text.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or the response is
    /// malformed.
    async fn chat(&self, messages: &[Message]) -> Result<String, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
