//! LLM: OpenAI-compatible chat client behind the `/api/chat` relay.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables ([`config::LlmConfig`]).
//! Handlers depend on the [`LlmChat`] trait so tests can swap in a mock.

pub mod config;
pub mod openai;
pub mod types;

pub use types::{LlmChat, LlmError, Message};
