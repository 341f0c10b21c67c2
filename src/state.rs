//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no per-user state; the only shared resource is the LLM client.

use std::sync::Arc;

use crate::llm::LlmChat;

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmChat>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Arc<dyn LlmChat>) -> Self {
        Self { llm }
    }
}
