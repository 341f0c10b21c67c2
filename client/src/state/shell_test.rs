use super::*;

#[test]
fn unmounted_window_is_mounted() {
    for state in [OpenState::Closed, OpenState::Open, OpenState::Closing] {
        assert_eq!(projects_toggle(false, state), ProjectsToggle::Mount);
    }
}

#[test]
fn open_window_is_closed() {
    assert_eq!(projects_toggle(true, OpenState::Open), ProjectsToggle::Close);
}

#[test]
fn closing_window_is_reopened() {
    assert_eq!(projects_toggle(true, OpenState::Closing), ProjectsToggle::Open);
}

#[test]
fn mounted_but_unopened_window_is_opened() {
    assert_eq!(projects_toggle(true, OpenState::Closed), ProjectsToggle::Open);
}
