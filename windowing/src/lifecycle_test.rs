use super::*;

// =============================================================
// OpenState
// =============================================================

#[test]
fn open_state_default_is_closed() {
    assert_eq!(OpenState::default(), OpenState::Closed);
}

#[test]
fn only_open_reports_open() {
    assert!(OpenState::Open.is_open());
    assert!(!OpenState::Closing.is_open());
    assert!(!OpenState::Closed.is_open());
}

#[test]
fn closing_is_still_visible() {
    assert!(OpenState::Open.is_visible());
    assert!(OpenState::Closing.is_visible());
    assert!(!OpenState::Closed.is_visible());
}

// =============================================================
// ClosePolicy
// =============================================================

#[test]
fn modal_policy_matches_modal_animation() {
    let policy = ClosePolicy::modal();
    assert_eq!(policy.close_ms, 200);
    assert!(policy.escape_closes);
    assert!(policy.outside_press_closes);
    assert!(policy.lock_scroll);
}

#[test]
fn panel_policy_matches_panel_animation() {
    let policy = ClosePolicy::panel();
    assert_eq!(policy.close_ms, 300);
    assert!(!policy.escape_closes);
    assert!(!policy.outside_press_closes);
    assert!(!policy.lock_scroll);
}

#[test]
fn close_button_and_external_always_allowed() {
    for policy in [ClosePolicy::modal(), ClosePolicy::panel()] {
        assert!(policy.allows(CloseReason::CloseButton));
        assert!(policy.allows(CloseReason::External));
    }
}

#[test]
fn escape_and_outside_follow_policy_flags() {
    let modal = ClosePolicy::modal();
    assert!(modal.allows(CloseReason::Escape));
    assert!(modal.allows(CloseReason::OutsidePress));

    let panel = ClosePolicy::panel();
    assert!(!panel.allows(CloseReason::Escape));
    assert!(!panel.allows(CloseReason::OutsidePress));
}

#[test]
fn close_tickets_compare_by_value() {
    assert_eq!(CloseTicket(3), CloseTicket(3));
    assert_ne!(CloseTicket(3), CloseTicket(4));
}
