//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data types and pure transitions used by components. Reactive
//! wrappers (`RwSignal`) are created by the page and handed down as props.

pub mod dock;
pub mod projects;
pub mod shell;
pub mod terminal;
pub mod window;
