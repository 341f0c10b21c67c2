//! Chat terminal transcript.
//!
//! DESIGN
//! ======
//! The transcript is the source of truth for what is sent: every request
//! carries the system prompt followed by all user/assistant turns so far.
//! Welcome and error lines are display-only.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use crate::net::types::{ChatMessage, Role};

pub const SYSTEM_PROMPT: &str = "You are the terminal on Dante Silva's portfolio desktop. \
Answer questions about Dante, his projects and his experience in a friendly, concise tone. \
Keep replies short enough to read in a terminal window.";

pub const WELCOME: &str = "Welcome to my portfolio. Ask me anything about my work.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Welcome,
    User,
    Assistant,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalLine {
    pub id: String,
    pub kind: LineKind,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct TerminalState {
    pub lines: Vec<TerminalLine>,
    /// A request is in flight; input is disabled.
    pub pending: bool,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self {
            lines: vec![TerminalLine { id: "welcome".to_owned(), kind: LineKind::Welcome, text: WELCOME.to_owned() }],
            pending: false,
        }
    }
}

impl TerminalState {
    /// Record the user's input and return the conversation to send.
    ///
    /// Returns `None` (and records nothing) for blank input or while a
    /// request is already pending.
    pub fn submit(&mut self, input: &str, id: String) -> Option<Vec<ChatMessage>> {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.lines.push(TerminalLine { id, kind: LineKind::User, text: text.to_owned() });
        self.pending = true;
        Some(self.history())
    }

    /// Apply the relay outcome for the pending request.
    pub fn receive(&mut self, result: Result<String, String>, id: String) {
        self.pending = false;
        let line = match result {
            Ok(text) => TerminalLine { id, kind: LineKind::Assistant, text },
            Err(e) => TerminalLine { id, kind: LineKind::Error, text: format!("Error: {e}") },
        };
        self.lines.push(line);
    }

    /// System prompt, then user/assistant turns in transcript order.
    pub fn history(&self) -> Vec<ChatMessage> {
        let turns = self.lines.iter().filter_map(|line| {
            let role = match line.kind {
                LineKind::User => Role::User,
                LineKind::Assistant => Role::Assistant,
                LineKind::Welcome | LineKind::Error => return None,
            };
            Some(ChatMessage { role, content: line.text.clone() })
        });
        std::iter::once(ChatMessage { role: Role::System, content: SYSTEM_PROMPT.to_owned() }).chain(turns).collect()
    }
}
