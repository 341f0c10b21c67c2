use super::*;

#[test]
fn catalog_has_four_entries_with_unique_ids() {
    assert_eq!(PROJECTS.len(), 4);
    for (i, a) in PROJECTS.iter().enumerate() {
        for b in &PROJECTS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn find_project_by_id() {
    let project = find_project(ProjectId(3)).map(|p| p.title);
    assert_eq!(project, Some("Weather App"));
    assert!(find_project(ProjectId(99)).is_none());
}

#[test]
fn every_entry_has_stack_and_links() {
    for project in PROJECTS {
        assert!(!project.tech_stack.is_empty(), "{} has no stack", project.title);
        assert!(project.live_url.is_some());
        assert!(project.github_url.is_some());
    }
}

#[test]
fn display_title_keeps_short_titles() {
    assert_eq!(display_title("Weather App"), "Weather App");
    assert_eq!(display_title("Portfolio Websi"), "Portfolio Websi");
}

#[test]
fn display_title_shortens_long_titles() {
    assert_eq!(display_title("Portfolio Website"), "Portfolio We...");
    assert_eq!(display_title("E-commerce Platform"), "E-commerce P...");
}

#[test]
fn display_title_counts_characters_not_bytes() {
    assert_eq!(display_title("Café Café Café Café"), "Café Café Ca...");
}

#[test]
fn icon_letter_is_first_character() {
    assert_eq!(icon_letter("Task Manager"), "T");
    assert_eq!(icon_letter("Élan"), "É");
    assert_eq!(icon_letter(""), "");
}
