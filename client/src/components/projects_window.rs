//! Projects panel: the catalog grid inside a draggable window.

use leptos::prelude::*;
use windowing::lifecycle::ClosePolicy;

use crate::components::draggable_window::DraggableWindow;
use crate::state::projects::{PROJECTS, Project, ProjectId, display_title, icon_letter};
use crate::state::window::WindowControl;

/// Draggable "Projects" window.
///
/// Activating an entry reports its id through `on_select`; the owner decides
/// what to show. `on_closed` fires after the exit animation.
#[component]
pub fn ProjectsWindow(control: WindowControl, on_select: Callback<ProjectId>, on_closed: Callback<()>) -> impl IntoView {
    let title = Signal::derive(|| "Projects".to_owned());

    view! {
        <DraggableWindow control policy=ClosePolicy::panel() title class="projects-window" on_closed>
            <div class="projects-grid">
                {PROJECTS.iter().map(|project| project_tile(project, on_select)).collect_view()}
            </div>
        </DraggableWindow>
    }
}

fn project_tile(project: &'static Project, on_select: Callback<ProjectId>) -> impl IntoView {
    let id = project.id;
    let icon = match project.icon {
        Some(src) => view! { <img class="projects-grid__icon-img" src=src alt=project.title/> }.into_any(),
        None => view! { <div class="projects-grid__letter">{icon_letter(project.title)}</div> }.into_any(),
    };

    view! {
        <button class="projects-grid__item" title=project.title on:click=move |_| on_select.run(id)>
            <div class="projects-grid__icon">{icon}</div>
            <span class="projects-grid__label">{display_title(project.title)}</span>
        </button>
    }
}
