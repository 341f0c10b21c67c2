//! Desktop shell page: background, menu bar, terminal, docks and windows.
//!
//! ARCHITECTURE
//! ============
//! The page owns one [`WindowControl`] per window. The projects window is
//! mounted on demand and unmounted from its `on_closed` notification, so its
//! offset resets on every reopen. The project modal stays mounted and keeps
//! its offset between openings.

use leptos::prelude::*;

use crate::components::dock::{DesktopDock, MobileDock};
use crate::components::mac_terminal::MacTerminal;
use crate::components::mac_toolbar::MacToolbar;
use crate::components::project_modal::ProjectModal;
use crate::components::projects_window::ProjectsWindow;
use crate::state::projects::ProjectId;
use crate::state::shell::{ProjectsToggle, projects_toggle};
use crate::state::window::WindowControl;
use crate::util::background::{
    LAST_BACKGROUND_KEY, background_keys, background_url, initial_background, pick_background, random_roll,
};
use crate::util::ui_persistence::{load_item, save_item};

#[component]
pub fn DesktopPage() -> impl IntoView {
    let background = RwSignal::new(initial_background());
    let show_projects = RwSignal::new(false);
    let selection = RwSignal::new(None::<ProjectId>);
    let projects = WindowControl::new();
    let modal = WindowControl::new();

    // Runs once after hydration; never on the server.
    Effect::new(move || {
        let current = background.get_untracked();
        let last = load_item(LAST_BACKGROUND_KEY);
        if let Some(next) = pick_background(initial_background(), last.as_deref(), &background_keys(), random_roll()) {
            background.set(next);
        }
        save_item(LAST_BACKGROUND_KEY, current);
    });

    let toggle_projects = Callback::new(move |()| {
        match projects_toggle(show_projects.get_untracked(), projects.view_untracked().open_state) {
            ProjectsToggle::Mount => {
                show_projects.set(true);
                projects.open();
            }
            ProjectsToggle::Open => projects.open(),
            ProjectsToggle::Close => projects.close(),
        }
    });
    let on_projects_closed = Callback::new(move |()| show_projects.set(false));
    let on_select = Callback::new(move |id: ProjectId| {
        selection.set(Some(id));
        modal.open();
    });

    let background_style = move || {
        background_url(background.get()).map_or_else(String::new, |url| format!("background-image: url('{url}');"))
    };

    view! {
        <div class="desktop">
            <div class="desktop__background" style=background_style></div>
            <MacToolbar on_toggle_projects=toggle_projects/>
            <main class="desktop__stage">
                <MacTerminal/>
                <Show when=move || show_projects.get()>
                    <div class="desktop__projects">
                        <ProjectsWindow control=projects on_select on_closed=on_projects_closed/>
                    </div>
                </Show>
            </main>
            <ProjectModal control=modal selection/>
            <DesktopDock on_toggle_projects=toggle_projects/>
            <MobileDock on_toggle_projects=toggle_projects/>
        </div>
    }
}
