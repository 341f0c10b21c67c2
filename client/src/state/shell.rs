//! Desktop shell decisions that do not need the DOM.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use windowing::lifecycle::OpenState;

/// What a projects toggle (toolbar, dock) should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectsToggle {
    /// Window is not mounted: mount it and open it.
    Mount,
    /// Window is mounted but not open (closing, or not yet opened): open it.
    Open,
    /// Window is open: start its animated close. The shell unmounts it once closed.
    Close,
}

pub fn projects_toggle(mounted: bool, state: OpenState) -> ProjectsToggle {
    if !mounted {
        return ProjectsToggle::Mount;
    }
    match state {
        OpenState::Open => ProjectsToggle::Close,
        OpenState::Closing | OpenState::Closed => ProjectsToggle::Open,
    }
}
