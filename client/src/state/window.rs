//! Host-facing handle for one draggable window.
//!
//! DESIGN
//! ======
//! Owners never touch the window engine directly. They queue requests on a
//! [`WindowControl`]; the mounted `DraggableWindow` drains the queue in order
//! and publishes a [`WindowView`] snapshot back after every engine step.
//! An `open` followed by a `close` in the same tick are both applied.

#[cfg(test)]
#[path = "window_test.rs"]
mod window_test;

use leptos::prelude::*;
use windowing::engine::WindowCore;
use windowing::geom::Offset;
use windowing::lifecycle::OpenState;

/// Something an owner asks of its window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRequest {
    Open,
    Close,
    ResetOffset,
}

/// Pending owner requests, in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowRequests {
    queue: Vec<WindowRequest>,
}

impl WindowRequests {
    pub fn push(&mut self, request: WindowRequest) {
        self.queue.push(request);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Remove and return every pending request.
    pub fn drain(&mut self) -> Vec<WindowRequest> {
        std::mem::take(&mut self.queue)
    }
}

/// Render snapshot of a window engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowView {
    pub open_state: OpenState,
    pub offset: Offset,
    pub dragging: bool,
}

impl WindowView {
    pub fn of(core: &WindowCore) -> Self {
        Self { open_state: core.open_state(), offset: core.offset(), dragging: core.is_dragging() }
    }

    /// CSS modifier for the current phase, driving the enter/exit animation.
    pub fn phase_class(&self) -> &'static str {
        match self.open_state {
            OpenState::Open => "window--open",
            OpenState::Closing => "window--closing",
            OpenState::Closed => "window--closed",
        }
    }
}

/// Copyable handle shared between a window's owner and the window itself.
#[derive(Clone, Copy)]
pub struct WindowControl {
    requests: RwSignal<WindowRequests>,
    view: RwSignal<WindowView>,
}

impl WindowControl {
    pub fn new() -> Self {
        Self { requests: RwSignal::new(WindowRequests::default()), view: RwSignal::new(WindowView::default()) }
    }

    pub fn open(&self) {
        self.requests.update(|r| r.push(WindowRequest::Open));
    }

    /// Ask for an animated close. Ignored by the engine unless the window is open.
    pub fn close(&self) {
        self.requests.update(|r| r.push(WindowRequest::Close));
    }

    pub fn reset_offset(&self) {
        self.requests.update(|r| r.push(WindowRequest::ResetOffset));
    }

    /// Tracked read of the latest snapshot.
    pub fn view(&self) -> WindowView {
        self.view.get()
    }

    pub fn view_untracked(&self) -> WindowView {
        self.view.get_untracked()
    }

    /// Tracked drain of the request queue. Draining does not re-notify.
    pub fn take_requests(&self) -> Vec<WindowRequest> {
        if self.requests.with(WindowRequests::is_empty) {
            return Vec::new();
        }
        let mut drained = Vec::new();
        self.requests.update_untracked(|r| drained = r.drain());
        drained
    }

    /// Store a new snapshot; subscribers re-render only when it changed.
    pub fn publish(&self, view: WindowView) {
        if self.view.try_with_untracked(|current| *current != view) == Some(true) {
            self.view.set(view);
        }
    }
}

impl Default for WindowControl {
    fn default() -> Self {
        Self::new()
    }
}
