//! Open/close lifecycle types and the per-window close policy.
//!
//! `OpenState` is the single authoritative lifecycle field. `Closing` keeps the
//! window mounted while its exit animation plays; the host is notified only
//! when the close timer identified by a [`CloseTicket`] elapses.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use crate::consts::{MODAL_CLOSE_MS, PANEL_CLOSE_MS};

/// Lifecycle of an overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenState {
    /// Not rendered.
    #[default]
    Closed,
    /// Rendered and interactive.
    Open,
    /// Exit animation in progress; still rendered until the close timer fires.
    Closing,
}

impl OpenState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Whether the window should be in the DOM (open or animating out).
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Open | Self::Closing)
    }
}

/// What asked the window to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The close control in the title bar.
    CloseButton,
    /// The Escape key.
    Escape,
    /// A press outside the window bounds.
    OutsidePress,
    /// The owning host (dock toggle, menu entry, etc.).
    External,
}

/// Close timing and dismissal triggers for one window kind.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosePolicy {
    /// Exit-animation length; the close timer runs for exactly this long.
    pub close_ms: u32,
    /// Escape closes the window while it is open.
    pub escape_closes: bool,
    /// A press outside the window closes it while it is open and not dragging.
    pub outside_press_closes: bool,
    /// Page scroll is disabled while the window is open.
    pub lock_scroll: bool,
}

impl ClosePolicy {
    /// Project detail modal: 200 ms fade/scale, all dismissal triggers, scroll lock.
    #[must_use]
    pub const fn modal() -> Self {
        Self { close_ms: MODAL_CLOSE_MS, escape_closes: true, outside_press_closes: true, lock_scroll: true }
    }

    /// Project list panel: 300 ms exit, closed only through its control or its host.
    #[must_use]
    pub const fn panel() -> Self {
        Self { close_ms: PANEL_CLOSE_MS, escape_closes: false, outside_press_closes: false, lock_scroll: false }
    }

    /// Whether `reason` may close a window governed by this policy.
    #[must_use]
    pub fn allows(&self, reason: CloseReason) -> bool {
        match reason {
            CloseReason::CloseButton | CloseReason::External => true,
            CloseReason::Escape => self.escape_closes,
            CloseReason::OutsidePress => self.outside_press_closes,
        }
    }
}

/// Identifies one scheduled close timer.
///
/// A timer whose ticket no longer matches the engine's pending close is stale
/// (reopened, torn down) and is ignored when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseTicket(pub u64);
