//! # client
//!
//! Leptos + WASM frontend for the desktop-style portfolio.
//!
//! The page is a mock desktop: menu bar, chat terminal, docks, and draggable
//! windows for the project catalog and project details. Window behavior comes
//! from the browser-free `windowing` crate; `util::window_driver` applies its
//! actions to the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
