use crate::geom::{Offset, Point};
use crate::input::{DragSession, DragState, InputSource, Key, PressTarget};
use crate::lifecycle::{CloseReason, ClosePolicy, CloseTicket, OpenState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from event handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Window state changed; re-read the view.
    RenderNeeded,
    /// Suppress the browser default for the current event.
    PreventDefault,
    /// Install document-level move/release listeners for `source`.
    AttachDragListeners(InputSource),
    /// Remove the document-level move/release listeners.
    DetachDragListeners,
    /// Install document-level keydown and outside-press listeners.
    AttachDismissListeners,
    /// Remove the document-level keydown and outside-press listeners.
    DetachDismissListeners,
    /// Toggle the global grabbing cursor.
    SetGrabCursor(bool),
    /// Toggle page scrolling (`true` disables it).
    LockScroll(bool),
    /// Schedule [`WindowCore::on_close_timer`] with `ticket` after `ms` milliseconds.
    StartCloseTimer { ticket: CloseTicket, ms: u32 },
    /// Drop any scheduled close timer.
    CancelCloseTimer,
    /// The exit animation finished; notify the owner exactly once.
    Closed,
}

/// Window engine state: lifecycle, offset, and drag gesture.
///
/// Browser-free so every transition can be exercised in plain unit tests.
/// Each handler returns the side effects the host must perform, in order.
#[derive(Debug, Clone)]
pub struct WindowCore {
    policy: ClosePolicy,
    state: OpenState,
    offset: Offset,
    drag: DragState,
    next_ticket: u64,
    pending_close: Option<CloseTicket>,
    dismiss_attached: bool,
    scroll_locked: bool,
}

impl WindowCore {
    #[must_use]
    pub fn new(policy: ClosePolicy) -> Self {
        Self {
            policy,
            state: OpenState::Closed,
            offset: Offset::ZERO,
            drag: DragState::Idle,
            next_ticket: 0,
            pending_close: None,
            dismiss_attached: false,
            scroll_locked: false,
        }
    }

    // --- Lifecycle ---

    /// Show the window. Reopening during the exit animation cancels the close.
    pub fn open(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        match self.state {
            OpenState::Open => return actions,
            OpenState::Closing => {
                self.pending_close = None;
                actions.push(Action::CancelCloseTimer);
            }
            OpenState::Closed => {}
        }

        self.state = OpenState::Open;
        if self.policy.lock_scroll && !self.scroll_locked {
            self.scroll_locked = true;
            actions.push(Action::LockScroll(true));
        }
        self.attach_dismiss(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Put the window back at its natural layout position.
    pub fn reset_offset(&mut self) -> Vec<Action> {
        if self.offset == Offset::ZERO {
            return Vec::new();
        }
        self.offset = Offset::ZERO;
        vec![Action::RenderNeeded]
    }

    /// Begin the exit animation if `reason` is allowed and the window is open.
    ///
    /// Requests made while closing or closed are ignored, so the owner's
    /// close notification fires at most once per opening.
    pub fn request_close(&mut self, reason: CloseReason) -> Vec<Action> {
        if !self.state.is_open() || !self.policy.allows(reason) {
            return Vec::new();
        }

        let mut actions = Vec::new();
        self.end_drag(&mut actions);
        self.detach_dismiss(&mut actions);

        self.state = OpenState::Closing;
        let ticket = CloseTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending_close = Some(ticket);

        actions.push(Action::StartCloseTimer { ticket, ms: self.policy.close_ms });
        actions.push(Action::RenderNeeded);
        actions
    }

    /// The close timer identified by `ticket` elapsed.
    pub fn on_close_timer(&mut self, ticket: CloseTicket) -> Vec<Action> {
        if self.state != OpenState::Closing || self.pending_close != Some(ticket) {
            return Vec::new();
        }

        let mut actions = Vec::new();
        self.pending_close = None;
        self.end_drag(&mut actions);
        self.state = OpenState::Closed;
        self.unlock_scroll(&mut actions);
        actions.push(Action::Closed);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// The host is unmounting the window. Releases every global effect.
    ///
    /// Idempotent. Does not emit [`Action::Closed`]; a pending close timer is
    /// invalidated and emits nothing if it fires afterwards.
    pub fn teardown(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.end_drag(&mut actions);
        self.detach_dismiss(&mut actions);
        if self.pending_close.take().is_some() {
            actions.push(Action::CancelCloseTimer);
        }
        self.unlock_scroll(&mut actions);
        self.state = OpenState::Closed;
        actions
    }

    // --- Pointer input ---

    /// A mousedown/touchstart at `point`, classified by the host as `target`.
    pub fn on_press(&mut self, point: Point, target: PressTarget, source: InputSource) -> Vec<Action> {
        match target {
            PressTarget::Handle => self.start_drag(point, source),
            PressTarget::HandleControl | PressTarget::Body => Vec::new(),
            PressTarget::Outside => {
                if self.drag.is_dragging() {
                    return Vec::new();
                }
                self.request_close(CloseReason::OutsidePress)
            }
        }
    }

    /// Pointer moved. `None` means the event carried no usable position
    /// (e.g. a touch event with an empty touch list).
    pub fn on_move(&mut self, point: Option<Point>, source: InputSource) -> Vec<Action> {
        let Some(session) = self.drag.session().copied() else {
            return Vec::new();
        };
        let Some(point) = point else {
            return Vec::new();
        };

        self.offset = session.offset_at(point);
        let mut actions = Vec::new();
        if source == InputSource::Touch {
            actions.push(Action::PreventDefault);
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// mouseup/touchend anywhere in the document.
    pub fn on_release(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.end_drag(&mut actions);
        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Keyboard input ---

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_escape() {
            return Vec::new();
        }
        self.request_close(CloseReason::Escape)
    }

    // --- Queries ---

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn open_state(&self) -> OpenState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    #[must_use]
    pub fn policy(&self) -> ClosePolicy {
        self.policy
    }

    // --- Internal helpers ---

    fn start_drag(&mut self, point: Point, source: InputSource) -> Vec<Action> {
        if !self.state.is_visible() || self.drag.is_dragging() {
            return Vec::new();
        }

        self.drag = DragState::Dragging(DragSession::new(point, self.offset, source));
        let mut actions = Vec::new();
        if source == InputSource::Mouse {
            actions.push(Action::PreventDefault);
        }
        actions.push(Action::AttachDragListeners(source));
        actions.push(Action::SetGrabCursor(true));
        actions.push(Action::RenderNeeded);
        actions
    }

    fn end_drag(&mut self, actions: &mut Vec<Action>) {
        if !self.drag.is_dragging() {
            return;
        }
        self.drag = DragState::Idle;
        actions.push(Action::DetachDragListeners);
        actions.push(Action::SetGrabCursor(false));
    }

    fn attach_dismiss(&mut self, actions: &mut Vec<Action>) {
        let wants = self.policy.escape_closes || self.policy.outside_press_closes;
        if wants && !self.dismiss_attached {
            self.dismiss_attached = true;
            actions.push(Action::AttachDismissListeners);
        }
    }

    fn detach_dismiss(&mut self, actions: &mut Vec<Action>) {
        if self.dismiss_attached {
            self.dismiss_attached = false;
            actions.push(Action::DetachDismissListeners);
        }
    }

    fn unlock_scroll(&mut self, actions: &mut Vec<Action>) {
        if self.scroll_locked {
            self.scroll_locked = false;
            actions.push(Action::LockScroll(false));
        }
    }
}
