//! CSS derived from engine state.
//!
//! The host writes these straight into the window element's `style`
//! attribute; nothing here touches the DOM.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{NO_TRANSITION, TRANSFORM_TRANSITION};
use crate::geom::Offset;

/// `transform` value placing the window at `offset` from its layout position.
#[must_use]
pub fn transform_css(offset: Offset) -> String {
    format!("translate3d({}px, {}px, 0)", offset.x, offset.y)
}

/// `transition` value for the transform: immediate while dragging, eased otherwise.
#[must_use]
pub fn transition_css(dragging: bool) -> &'static str {
    if dragging { NO_TRANSITION } else { TRANSFORM_TRANSITION }
}

/// Full inline style for a window at `offset`.
#[must_use]
pub fn window_style(offset: Offset, dragging: bool) -> String {
    format!("transform: {}; transition: {};", transform_css(offset), transition_css(dragging))
}
