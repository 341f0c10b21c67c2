//! Project detail modal.
//!
//! DESIGN
//! ======
//! The selection is cleared only after the exit animation finishes, so the
//! content stays on screen while the window fades out.

use leptos::prelude::*;
use windowing::lifecycle::ClosePolicy;

use crate::components::draggable_window::DraggableWindow;
use crate::state::projects::{Project, ProjectId, find_project};
use crate::state::window::WindowControl;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ProjectModal(control: WindowControl, selection: RwSignal<Option<ProjectId>>) -> impl IntoView {
    let project = move || selection.get().and_then(find_project);
    let title = Signal::derive(move || project().map(|p| p.title.to_owned()).unwrap_or_default());
    let on_closed = Callback::new(move |()| selection.set(None));

    view! {
        <DraggableWindow control policy=ClosePolicy::modal() title class="project-modal" backdrop=true on_closed>
            {move || project().map(project_details)}
        </DraggableWindow>
    }
}

fn project_details(project: &'static Project) -> impl IntoView {
    let description = render_markdown_html(project.description);

    view! {
        <div class="project-modal__content">
            <div class="project-modal__media">
                <img class="project-modal__image" src=project.image alt=project.title/>
            </div>
            <div class="project-modal__details">
                <h2 class="project-modal__title">{project.title}</h2>
                <div class="project-modal__stack">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| view! { <span class="project-modal__badge">{*tech}</span> })
                        .collect_view()}
                </div>
                <div class="project-modal__description" inner_html=description></div>
                <div class="project-modal__links">
                    {project
                        .live_url
                        .map(|href| {
                            view! {
                                <a class="btn btn--primary" href=href target="_blank" rel="noopener noreferrer">
                                    "Live Site"
                                </a>
                            }
                        })}
                    {project
                        .github_url
                        .map(|href| {
                            view! {
                                <a class="btn btn--secondary" href=href target="_blank" rel="noopener noreferrer">
                                    "GitHub"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
