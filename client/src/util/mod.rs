//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, body styling, document
//! listeners, timers) from component logic. Modules that only make sense in
//! the browser are compiled for `hydrate` alone.

pub mod background;
pub mod body_effects;
pub mod clock;
#[cfg(feature = "hydrate")]
pub mod listeners;
pub mod markdown;
pub mod ui_persistence;
#[cfg(feature = "hydrate")]
pub mod window_driver;
#[cfg(feature = "hydrate")]
pub mod window_input;
