//! Top menu bar with the projects menu entry and a live clock.

use leptos::prelude::*;

use crate::util::clock::now_label;
#[cfg(feature = "hydrate")]
use crate::util::clock::CLOCK_TICK_MS;

const OWNER: &str = "Dante Silva";

#[component]
pub fn MacToolbar(on_toggle_projects: Callback<()>) -> impl IntoView {
    // Empty during SSR so hydration matches; filled on the client.
    let clock = RwSignal::new(String::new());

    Effect::new(move || {
        clock.set(now_label());
    });

    #[cfg(feature = "hydrate")]
    {
        let tick = gloo_timers::callback::Interval::new(CLOCK_TICK_MS, move || {
            let label = now_label();
            if clock.get_untracked() != label {
                clock.set(label);
            }
        });
        // Dropped (and cancelled) with the toolbar's owner.
        let _tick = StoredValue::new_local(tick);
    }

    view! {
        <header class="menu-bar">
            <div class="menu-bar__left">
                <span class="menu-bar__owner">{OWNER}</span>
                <button class="menu-bar__item" on:click=move |_| on_toggle_projects.run(())>
                    "Projects"
                </button>
            </div>
            <div class="menu-bar__right">
                <time class="menu-bar__clock">{move || clock.get()}</time>
            </div>
        </header>
    }
}
