//! Draggable, animated overlay window chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the title bar (traffic-light controls + title) and body, and in
//! the browser forwards handle presses and the close control into a
//! `WindowDriver`. Position, phase and drag state are read back from the
//! owner's [`WindowControl`] snapshot. The window stays in the DOM while
//! closing so the exit animation can play.

use leptos::prelude::*;
use windowing::lifecycle::ClosePolicy;
use windowing::render::window_style;

#[cfg(feature = "hydrate")]
use windowing::input::InputSource;

use crate::state::window::WindowControl;
#[cfg(feature = "hydrate")]
use crate::util::window_driver::WindowDriver;
#[cfg(feature = "hydrate")]
use crate::util::window_input::{first_touch_point, handle_press_target, mouse_point};

/// Window frame driven by `control`.
///
/// `on_closed` fires once per opening, after the exit animation has finished.
#[component]
pub fn DraggableWindow(
    control: WindowControl,
    policy: ClosePolicy,
    #[prop(into)] title: Signal<String>,
    /// Extra class on the window root.
    #[prop(optional, into)]
    class: String,
    /// Render a dimming backdrop behind the window.
    #[prop(optional)]
    backdrop: bool,
    #[prop(optional)] on_closed: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let root = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let driver = StoredValue::new_local(WindowDriver::new(policy, control, root, on_closed));
    #[cfg(not(feature = "hydrate"))]
    let _ = (policy, on_closed);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            for request in control.take_requests() {
                driver.with_value(|d| d.apply_request(request));
            }
        });
        on_cleanup(move || {
            if driver.try_with_value(WindowDriver::teardown).is_none() {
                log::debug!("window driver already disposed");
            }
        });
    }

    let on_handle_mousedown = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                if ev.button() != 0 {
                    return;
                }
                let target = handle_press_target(&ev);
                let point = mouse_point(&ev);
                driver.with_value(|d| d.press(&ev, point, target, InputSource::Mouse));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_handle_touchstart = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::TouchEvent| {
                let Some(point) = first_touch_point(&ev) else {
                    return;
                };
                let target = handle_press_target(&ev);
                driver.with_value(|d| d.press(&ev, point, target, InputSource::Touch));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_close_click = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| driver.with_value(WindowDriver::close_button)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let visible = move || control.view().open_state.is_visible();
    let window_class = move || format!("window {class} {}", control.view().phase_class());
    let window_css = move || {
        let view = control.view();
        window_style(view.offset, view.dragging)
    };

    view! {
        <Show when=visible>
            {backdrop.then(|| view! { <div class="window-backdrop"></div> })}
            <div class=window_class.clone() node_ref=root style=window_css role="dialog" aria-label=move || title.get()>
                <div class="window__titlebar" on:mousedown=on_handle_mousedown on:touchstart=on_handle_touchstart>
                    <div class="window__controls">
                        <button
                            class="window__control window__control--close"
                            aria-label="Close window"
                            on:click=on_close_click
                        ></button>
                        <span class="window__control window__control--minimize"></span>
                        <span class="window__control window__control--zoom"></span>
                    </div>
                    <h2 class="window__title">{move || title.get()}</h2>
                    <div class="window__titlebar-spacer"></div>
                </div>
                <div class="window__body">{children()}</div>
            </div>
        </Show>
    }
}
