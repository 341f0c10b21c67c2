//! Draggable overlay window engine for the desktop shell.
//!
//! This crate owns the behavior shared by every floating window on the page:
//! the open/close lifecycle with its exit-animation delay, handle-driven drag
//! tracking, and the dismissal triggers (close control, Escape, outside
//! press). It has no browser dependencies. The `client` crate forwards DOM
//! events into [`engine::WindowCore`] and applies the returned
//! [`engine::Action`]s (listeners, timers, body styling, re-render).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::WindowCore`] state machine and the actions it emits |
//! | [`geom`] | Viewport points and window offsets |
//! | [`input`] | Press targets, input sources, keys, and the drag session |
//! | [`lifecycle`] | Open state, close reasons, and per-window close policy |
//! | [`render`] | CSS transform/transition strings derived from engine state |
//! | [`consts`] | Animation durations and transition values |

pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod lifecycle;
pub mod render;
