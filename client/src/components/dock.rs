//! Application docks: a floating bar on wide screens, a bottom tray on phones.

use leptos::prelude::*;

use crate::state::dock::{DOCK_ITEMS, DockAction, DockItem};

/// Dock shown from the `md` breakpoint up.
#[component]
pub fn DesktopDock(on_toggle_projects: Callback<()>) -> impl IntoView {
    view! {
        <nav class="dock dock--desktop" aria-label="Dock">
            {DOCK_ITEMS.iter().map(|item| dock_entry(*item, on_toggle_projects)).collect_view()}
        </nav>
    }
}

/// Dock shown below the `md` breakpoint.
#[component]
pub fn MobileDock(on_toggle_projects: Callback<()>) -> impl IntoView {
    view! {
        <nav class="dock dock--mobile" aria-label="Dock">
            {DOCK_ITEMS.iter().map(|item| dock_entry(*item, on_toggle_projects)).collect_view()}
        </nav>
    }
}

fn dock_entry(item: DockItem, on_toggle_projects: Callback<()>) -> impl IntoView {
    let tile = view! { <span class=format!("dock__tile {}", item.tile)>{item.glyph}</span> };

    match item.action {
        DockAction::Link { href, .. } => view! {
            <a class="dock__item" href=href target=item.target() rel=item.rel() title=item.label aria-label=item.label>
                {tile}
            </a>
        }
        .into_any(),
        DockAction::ToggleProjects => view! {
            <button
                class="dock__item"
                title=item.label
                aria-label=item.label
                on:click=move |_| on_toggle_projects.run(())
            >
                {tile}
            </button>
        }
        .into_any(),
    }
}
