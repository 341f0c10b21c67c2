//! Static project catalog shown in the projects window.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Labels longer than this are shortened in the project grid.
const MAX_LABEL_CHARS: usize = 15;
/// Characters kept when a label is shortened.
const SHORT_LABEL_CHARS: usize = 12;

const PLACEHOLDER_ICON: &str = "/images/icons/placeholder-icon.svg";

/// Stable identifier of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProjectId(pub u32);

/// One portfolio entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    /// Grid icon; `None` renders the title's first letter instead.
    pub icon: Option<&'static str>,
    pub image: &'static str,
    /// Markdown.
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: ProjectId(1),
        title: "Portfolio Website",
        icon: Some(PLACEHOLDER_ICON),
        image: PLACEHOLDER_ICON,
        description: "A personal portfolio website built with modern web technologies to showcase my projects and skills.",
        tech_stack: &["Astro", "React", "TailwindCSS", "TypeScript"],
        live_url: Some("https://example.com/portfolio"),
        github_url: Some("https://github.com/username/portfolio"),
    },
    Project {
        id: ProjectId(2),
        title: "E-commerce Platform",
        icon: Some(PLACEHOLDER_ICON),
        image: PLACEHOLDER_ICON,
        description: "A full-featured e-commerce platform with shopping cart, user authentication, and payment processing.",
        tech_stack: &["Next.js", "Node.js", "MongoDB", "Stripe"],
        live_url: Some("https://example.com/ecommerce"),
        github_url: Some("https://github.com/username/ecommerce"),
    },
    Project {
        id: ProjectId(3),
        title: "Weather App",
        icon: Some(PLACEHOLDER_ICON),
        image: PLACEHOLDER_ICON,
        description: "A weather application that provides real-time weather information based on user location or search.",
        tech_stack: &["React", "OpenWeather API", "TailwindCSS"],
        live_url: Some("https://example.com/weather"),
        github_url: Some("https://github.com/username/weather-app"),
    },
    Project {
        id: ProjectId(4),
        title: "Task Manager",
        icon: Some(PLACEHOLDER_ICON),
        image: PLACEHOLDER_ICON,
        description: "A productivity application for managing tasks, projects, and deadlines with a clean and intuitive UI.",
        tech_stack: &["Vue.js", "Firebase", "Vuetify"],
        live_url: Some("https://example.com/taskmanager"),
        github_url: Some("https://github.com/username/task-manager"),
    },
];

/// Look up a catalog entry by id.
pub fn find_project(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Grid label: titles over 15 characters become their first 12 plus `...`.
pub fn display_title(title: &str) -> String {
    if title.chars().count() > MAX_LABEL_CHARS {
        let head: String = title.chars().take(SHORT_LABEL_CHARS).collect();
        format!("{head}...")
    } else {
        title.to_owned()
    }
}

/// Fallback icon text for entries without an icon.
pub fn icon_letter(title: &str) -> String {
    title.chars().next().map(String::from).unwrap_or_default()
}
