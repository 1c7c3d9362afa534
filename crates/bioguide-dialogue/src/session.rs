//! Per-conversation context: controller state, transcript, busy flag.

use chrono::{DateTime, Utc};

use crate::controller::{Controller, Turn};
use crate::types::{ConversationState, Message};
use bioguide_core::{Error, Result};

/// Opening lines of every conversation.
pub const WELCOME_SCRIPT: &[&str] = &[
    "Namaste! I'm your AI Guide for India's Biomaterials Sector",
    "I have comprehensive data on India's $5.74B biomaterials market (2024)",
    "Let me help you navigate partnerships, policies, and market entry strategies",
];

pub const READY_PROMPT: &str = "Type 'ready' when you want to begin exploring opportunities";

/// One conversation.
///
/// History is append-only. At most one turn is outstanding at a time:
/// [`Session::begin_turn`] refuses input while `pending` is set, and only
/// [`Session::complete_turn`] clears it.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    state: ConversationState,
    history: Vec<Message>,
    pending: bool,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Start a conversation with the welcome script. A `notice` (e.g. a
    /// knowledge-loading warning) is shown just before the ready prompt.
    pub fn new(notice: Option<&str>) -> Self {
        let mut history: Vec<Message> = WELCOME_SCRIPT
            .iter()
            .map(|line| Message::assistant(*line))
            .collect();
        if let Some(notice) = notice {
            history.push(Message::assistant(notice));
        }
        history.push(Message::assistant(READY_PROMPT));

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            state: ConversationState::default(),
            history,
            pending: false,
            created_at: Utc::now(),
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Accept user input and mark the session busy.
    pub fn begin_turn(&mut self, input: &str) -> Result<()> {
        if self.pending {
            return Err(Error::Busy);
        }
        if input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        self.history.push(Message::user(input));
        self.pending = true;
        Ok(())
    }

    /// Record the controller's answer and clear the busy flag.
    pub fn complete_turn(&mut self, turn: Turn) -> &Message {
        self.state = turn.state;
        self.pending = false;
        self.history.push(Message::assistant(turn.reply));
        &self.history[self.history.len() - 1]
    }

    /// Run a whole turn synchronously (no cosmetic delay).
    pub fn respond(&mut self, controller: &Controller, input: &str) -> Result<&Message> {
        self.begin_turn(input)?;
        let turn = controller.step(&self.state, input);
        Ok(self.complete_turn(turn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Role, Stage};
    use bioguide_core::FormatLimits;
    use bioguide_store::builtin_store;
    use std::sync::Arc;

    fn controller() -> Controller {
        Controller::new(Arc::new(builtin_store()), FormatLimits::default())
    }

    #[test]
    fn test_new_session_has_welcome_script() {
        let session = Session::new(None);
        assert_eq!(session.history().len(), WELCOME_SCRIPT.len() + 1);
        assert!(session
            .history()
            .iter()
            .all(|m| m.role == Role::Assistant));
        assert_eq!(session.history().last().unwrap().content, READY_PROMPT);
        assert_eq!(session.state().stage(), Stage::AwaitingReady);
    }

    #[test]
    fn test_notice_precedes_ready_prompt() {
        let session = Session::new(Some("Report unavailable"));
        let history = session.history();
        assert_eq!(history[history.len() - 2].content, "Report unavailable");
    }

    #[test]
    fn test_pending_turn_rejects_new_input() {
        let mut session = Session::new(None);
        session.begin_turn("ready").unwrap();
        assert!(session.is_pending());
        assert!(matches!(session.begin_turn("again"), Err(Error::Busy)));

        let turn = controller().step(session.state(), "ready");
        session.complete_turn(turn);
        assert!(!session.is_pending());
        assert!(session.begin_turn("market").is_ok());
    }

    #[test]
    fn test_blank_input_rejected_without_touching_history() {
        let mut session = Session::new(None);
        let before = session.history().len();
        assert!(matches!(session.begin_turn("   "), Err(Error::EmptyInput)));
        assert_eq!(session.history().len(), before);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_respond_appends_both_messages() {
        let c = controller();
        let mut session = Session::new(None);
        let before = session.history().len();
        let reply = session.respond(&c, "ready").unwrap().content.clone();
        assert!(reply.contains("Market Overview"));
        assert_eq!(session.history().len(), before + 2);
        assert_eq!(session.history()[before].role, Role::User);
        assert_eq!(session.state().stage(), Stage::AwaitingTopic);
    }
}
