use super::*;

fn id(n: u32) -> String {
    format!("line-{n}")
}

#[test]
fn default_shows_welcome_and_is_idle() {
    let state = TerminalState::default();
    assert_eq!(state.lines.len(), 1);
    assert_eq!(state.lines[0].kind, LineKind::Welcome);
    assert!(!state.pending);
}

#[test]
fn history_starts_with_system_prompt() {
    let history = TerminalState::default().history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].role, Role::System);
    assert_eq!(history[0].content, SYSTEM_PROMPT);
}

#[test]
fn submit_trims_and_marks_pending() {
    let mut state = TerminalState::default();
    let sent = state.submit("  hello  ", id(1)).unwrap();
    assert!(state.pending);
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1], ChatMessage { role: Role::User, content: "hello".to_owned() });
}

#[test]
fn blank_input_is_ignored() {
    let mut state = TerminalState::default();
    assert!(state.submit("   ", id(1)).is_none());
    assert!(!state.pending);
    assert_eq!(state.lines.len(), 1);
}

#[test]
fn submit_while_pending_is_ignored() {
    let mut state = TerminalState::default();
    assert!(state.submit("first", id(1)).is_some());
    assert!(state.submit("second", id(2)).is_none());
    assert_eq!(state.lines.len(), 2);
}

#[test]
fn reply_is_appended_and_included_in_next_history() {
    let mut state = TerminalState::default();
    let _ = state.submit("who are you?", id(1));
    state.receive(Ok("A terminal.".to_owned()), id(2));
    assert!(!state.pending);

    let sent = state.submit("and?", id(3)).unwrap();
    let roles: Vec<Role> = sent.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant, Role::User]);
    assert_eq!(sent[2].content, "A terminal.");
}

#[test]
fn errors_are_shown_but_never_sent() {
    let mut state = TerminalState::default();
    let _ = state.submit("hi", id(1));
    state.receive(Err("request failed: 500".to_owned()), id(2));
    assert!(!state.pending);

    let last = state.lines.last().unwrap();
    assert_eq!(last.kind, LineKind::Error);
    assert_eq!(last.text, "Error: request failed: 500");

    let history = state.history();
    assert!(history.iter().all(|m| !m.content.contains("request failed")));
}
