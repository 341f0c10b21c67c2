//! Document-level event listeners owned by an RAII handle.
//!
//! Used for the gestures that must keep tracking after the pointer leaves the
//! element that started them (drag move/release) and for page-wide dismissal
//! (Escape, press outside). Dropping the handle removes every listener.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// One listener to install.
#[derive(Clone, Copy, Debug)]
pub struct ListenerSpec {
    pub event: &'static str,
    /// Passive listeners cannot call `preventDefault`.
    pub passive: bool,
}

impl ListenerSpec {
    pub const fn passive(event: &'static str) -> Self {
        Self { event, passive: true }
    }

    pub const fn active(event: &'static str) -> Self {
        Self { event, passive: false }
    }
}

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Listeners attached to `document`; removed on drop.
pub struct DocumentListeners {
    target: web_sys::EventTarget,
    entries: Vec<(&'static str, Listener)>,
}

impl DocumentListeners {
    /// Attach `handler` for every spec. `handler` receives the event name it
    /// was registered under. Returns `None` without a document.
    pub fn attach<F>(specs: &[ListenerSpec], handler: F) -> Option<Self>
    where
        F: Fn(&'static str, web_sys::Event) + 'static,
    {
        let document = web_sys::window()?.document()?;
        let target: web_sys::EventTarget = document.into();
        let handler = Rc::new(handler);

        let mut entries = Vec::with_capacity(specs.len());
        for spec in specs {
            let name = spec.event;
            let handler = Rc::clone(&handler);
            let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| handler(name, ev));

            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(spec.passive);
            if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
                name,
                listener.as_ref().unchecked_ref(),
                &options,
            ) {
                log::warn!("attach {name} listener failed: {e:?}");
                continue;
            }
            entries.push((name, listener));
        }
        Some(Self { target, entries })
    }
}

impl Drop for DocumentListeners {
    fn drop(&mut self) {
        for (name, listener) in &self.entries {
            if let Err(e) = self.target.remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref()) {
                log::warn!("detach {name} listener failed: {e:?}");
            }
        }
        // The handle is often dropped from inside one of its own listeners
        // (release ends the drag); free the closures after the event returns.
        let entries = std::mem::take(&mut self.entries);
        if !entries.is_empty() {
            Timeout::new(0, move || drop(entries)).forget();
        }
    }
}
