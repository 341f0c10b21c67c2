//! Shared constants for the windowing crate.

// ── Close animation ─────────────────────────────────────────────

/// Exit-animation length of the project detail modal, in milliseconds.
///
/// Must equal the modal's CSS `animation-duration`.
pub const MODAL_CLOSE_MS: u32 = 200;

/// Exit-animation length of the project list panel, in milliseconds.
///
/// Must equal the panel's CSS `animation-duration`.
pub const PANEL_CLOSE_MS: u32 = 300;

// ── Transform transitions ───────────────────────────────────────

/// Transition applied to the offset transform when the window is not being dragged.
pub const TRANSFORM_TRANSITION: &str = "transform 0.2s ease-out";

/// Transition applied while dragging so the window follows the pointer 1:1.
pub const NO_TRANSITION: &str = "none";

// ── Keys ────────────────────────────────────────────────────────

/// Browser key name that dismisses an open window.
pub const ESCAPE_KEY: &str = "Escape";
