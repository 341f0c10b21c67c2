//! Browser host for one [`WindowCore`].
//!
//! ARCHITECTURE
//! ============
//! Every DOM event, owner request and timer callback becomes one engine
//! step: call the engine, apply the returned actions to the page, publish
//! the new [`WindowView`], and only then notify the owner of a completed
//! close. Listener and timer closures hold a `Weak` reference to the driver,
//! so dropping the driver cancels everything it scheduled.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use windowing::engine::{Action, WindowCore};
use windowing::geom::Point;
use windowing::input::{InputSource, Key, PressTarget};
use windowing::lifecycle::{CloseReason, ClosePolicy};

use crate::state::window::{WindowControl, WindowRequest, WindowView};
use crate::util::body_effects::{GrabCursor, ScrollLock};
use crate::util::listeners::{DocumentListeners, ListenerSpec};
use crate::util::window_input::{document_press_target, first_touch_point, mouse_point};

const MOUSE_DRAG: &[ListenerSpec] = &[ListenerSpec::passive("mousemove"), ListenerSpec::passive("mouseup")];
// `touchmove` must be able to cancel page scrolling.
const TOUCH_DRAG: &[ListenerSpec] =
    &[ListenerSpec::active("touchmove"), ListenerSpec::passive("touchend"), ListenerSpec::passive("touchcancel")];
const DISMISS: &[ListenerSpec] =
    &[ListenerSpec::passive("keydown"), ListenerSpec::passive("mousedown"), ListenerSpec::passive("touchstart")];

/// Page-level resources currently held on behalf of the engine.
#[derive(Default)]
struct HostEffects {
    drag: Option<DocumentListeners>,
    dismiss: Option<DocumentListeners>,
    grab: Option<GrabCursor>,
    scroll: Option<ScrollLock>,
    close_timer: Option<Timeout>,
}

struct DriverInner {
    core: RefCell<WindowCore>,
    effects: RefCell<HostEffects>,
    control: WindowControl,
    root: NodeRef<leptos::html::Div>,
    on_closed: Option<Callback<()>>,
}

#[derive(Clone)]
pub struct WindowDriver {
    inner: Rc<DriverInner>,
}

impl WindowDriver {
    pub fn new(
        policy: ClosePolicy,
        control: WindowControl,
        root: NodeRef<leptos::html::Div>,
        on_closed: Option<Callback<()>>,
    ) -> Self {
        let core = WindowCore::new(policy);
        control.publish(WindowView::of(&core));
        let inner = DriverInner {
            core: RefCell::new(core),
            effects: RefCell::new(HostEffects::default()),
            control,
            root,
            on_closed,
        };
        Self { inner: Rc::new(inner) }
    }

    pub fn apply_request(&self, request: WindowRequest) {
        match request {
            WindowRequest::Open => step(&self.inner, None, WindowCore::open),
            WindowRequest::Close => step(&self.inner, None, |core| core.request_close(CloseReason::External)),
            WindowRequest::ResetOffset => step(&self.inner, None, WindowCore::reset_offset),
        }
    }

    pub fn close_button(&self) {
        step(&self.inner, None, |core| core.request_close(CloseReason::CloseButton));
    }

    /// A press on the window's drag handle.
    pub fn press(&self, ev: &web_sys::Event, point: Point, target: PressTarget, source: InputSource) {
        step(&self.inner, Some(ev), |core| core.on_press(point, target, source));
    }

    /// Release every page-level effect; the owner is not notified.
    pub fn teardown(&self) {
        step(&self.inner, None, WindowCore::teardown);
    }
}

fn step(inner: &Rc<DriverInner>, ev: Option<&web_sys::Event>, f: impl FnOnce(&mut WindowCore) -> Vec<Action>) {
    let (actions, view) = {
        let Ok(mut core) = inner.core.try_borrow_mut() else {
            log::warn!("window engine busy; event dropped");
            return;
        };
        let actions = f(&mut core);
        (actions, WindowView::of(&core))
    };
    if actions.is_empty() {
        return;
    }

    let closed = apply(inner, ev, actions);
    inner.control.publish(view);
    if closed {
        if let Some(on_closed) = inner.on_closed {
            on_closed.run(());
        }
    }
}

/// Perform `actions` in order. Returns whether the close completed.
fn apply(inner: &Rc<DriverInner>, ev: Option<&web_sys::Event>, actions: Vec<Action>) -> bool {
    let Ok(mut fx) = inner.effects.try_borrow_mut() else {
        log::warn!("window effects busy; {} actions dropped", actions.len());
        return false;
    };

    let mut closed = false;
    for action in actions {
        match action {
            Action::RenderNeeded => {}
            Action::PreventDefault => {
                if let Some(ev) = ev {
                    ev.prevent_default();
                }
            }
            Action::AttachDragListeners(source) => {
                let specs = match source {
                    InputSource::Mouse => MOUSE_DRAG,
                    InputSource::Touch => TOUCH_DRAG,
                };
                fx.drag = DocumentListeners::attach(specs, document_handler(Rc::downgrade(inner)));
            }
            Action::DetachDragListeners => fx.drag = None,
            Action::AttachDismissListeners => {
                fx.dismiss = DocumentListeners::attach(DISMISS, document_handler(Rc::downgrade(inner)));
            }
            Action::DetachDismissListeners => fx.dismiss = None,
            Action::SetGrabCursor(true) => {
                fx.grab.get_or_insert_with(GrabCursor::acquire);
            }
            Action::SetGrabCursor(false) => fx.grab = None,
            Action::LockScroll(true) => {
                fx.scroll.get_or_insert_with(ScrollLock::acquire);
            }
            Action::LockScroll(false) => fx.scroll = None,
            Action::StartCloseTimer { ticket, ms } => {
                let weak = Rc::downgrade(inner);
                fx.close_timer = Some(Timeout::new(ms, move || {
                    if let Some(inner) = weak.upgrade() {
                        step(&inner, None, |core| core.on_close_timer(ticket));
                    }
                }));
            }
            Action::CancelCloseTimer => fx.close_timer = None,
            Action::Closed => closed = true,
        }
    }
    closed
}

fn document_handler(weak: Weak<DriverInner>) -> impl Fn(&'static str, web_sys::Event) + 'static {
    move |name, ev| {
        if let Some(inner) = weak.upgrade() {
            on_document_event(&inner, name, &ev);
        }
    }
}

fn on_document_event(inner: &Rc<DriverInner>, name: &str, ev: &web_sys::Event) {
    match name {
        "mousemove" => {
            let point = mouse_point(ev.unchecked_ref());
            step(inner, Some(ev), |core| core.on_move(Some(point), InputSource::Mouse));
        }
        "touchmove" => {
            let point = first_touch_point(ev.unchecked_ref());
            step(inner, Some(ev), |core| core.on_move(point, InputSource::Touch));
        }
        "mouseup" | "touchend" | "touchcancel" => step(inner, Some(ev), WindowCore::on_release),
        "keydown" => {
            let key = Key(ev.unchecked_ref::<web_sys::KeyboardEvent>().key());
            step(inner, Some(ev), |core| core.on_key_down(&key));
        }
        "mousedown" => {
            let target = press_target(inner, ev);
            let point = mouse_point(ev.unchecked_ref());
            step(inner, Some(ev), |core| core.on_press(point, target, InputSource::Mouse));
        }
        "touchstart" => {
            let target = press_target(inner, ev);
            let point = first_touch_point(ev.unchecked_ref()).unwrap_or_default();
            step(inner, Some(ev), |core| core.on_press(point, target, InputSource::Touch));
        }
        other => log::debug!("unexpected document event {other}"),
    }
}

fn press_target(inner: &DriverInner, ev: &web_sys::Event) -> PressTarget {
    let root = inner.root.get_untracked();
    document_press_target(root.as_ref().map(|el| el.unchecked_ref::<web_sys::Element>()), ev)
}
