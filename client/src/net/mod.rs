//! Networking for the chat relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and `types` defines the JSON schema shared
//! with the server's `/api/chat` route.

pub mod api;
pub mod types;
