//! Input model: press targets, input sources, keys, and the drag session.
//!
//! The host classifies each press before handing it to the engine. A press on
//! the title bar is a [`PressTarget::Handle`]; a press on a button inside the
//! title bar is a [`PressTarget::HandleControl`] and never starts a drag.
//! `DragState` is the gesture tracked between press and release, carrying the
//! anchors every move is recomputed from.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::ESCAPE_KEY;
use crate::geom::{Offset, Point};

/// Which device produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Mouse button / mouse movement.
    Mouse,
    /// Single-finger touch. Only the first touch point is consulted.
    Touch,
}

/// Where a press landed relative to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The drag handle (title bar), outside any interactive control.
    Handle,
    /// An interactive control (button) embedded in the drag handle.
    HandleControl,
    /// Inside the window, outside the handle.
    Body,
    /// Outside the window bounds.
    Outside,
}

/// A keyboard key as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this is the dismiss key.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == ESCAPE_KEY
    }
}

/// Anchors captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at the press that started the drag.
    pub pointer_origin: Point,
    /// Window offset at the press that started the drag.
    pub window_origin_at_start: Offset,
    /// Device that started the drag.
    pub source: InputSource,
}

impl DragSession {
    #[must_use]
    pub fn new(pointer_origin: Point, window_origin_at_start: Offset, source: InputSource) -> Self {
        Self { pointer_origin, window_origin_at_start, source }
    }

    /// Window offset for the pointer at `pointer`.
    ///
    /// Always derived from the session anchors, never from the previous move.
    #[must_use]
    pub fn offset_at(&self, pointer: Point) -> Offset {
        self.window_origin_at_start + (pointer - self.pointer_origin)
    }
}

/// Drag gesture state, orthogonal to the open/close lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The window follows the pointer.
    Dragging(DragSession),
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
