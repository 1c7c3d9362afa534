//! Conversation types: stages, state, transcript messages.

use bioguide_store::Sector;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the fixed-depth dialogue script currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    /// Waiting for the user to type "ready". Other input goes to keyword search.
    #[default]
    AwaitingReady,
    /// Top-level menu shown; waiting for a topic (or "sector").
    AwaitingTopic,
    /// Sector sub-menu shown; waiting for a sector choice.
    AwaitingSector,
    /// Sector content shown; waiting for the venture's funding stage.
    AwaitingFundingStage,
}

impl Stage {
    /// Numeric stage marker, always in `0..=3`.
    pub fn index(&self) -> u8 {
        match self {
            Self::AwaitingReady => 0,
            Self::AwaitingTopic => 1,
            Self::AwaitingSector => 2,
            Self::AwaitingFundingStage => 3,
        }
    }
}

/// Controller-owned state. Only [`crate::Controller::step`] produces new values.
///
/// `selected_sector` is `Some` only at [`Stage::AwaitingFundingStage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationState {
    stage: Stage,
    selected_sector: Option<Sector>,
}

impl ConversationState {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn selected_sector(&self) -> Option<Sector> {
        self.selected_sector
    }

    pub(crate) fn at(stage: Stage) -> Self {
        Self {
            stage,
            selected_sector: None,
        }
    }

    pub(crate) fn awaiting_funding_stage(sector: Sector) -> Self {
        Self {
            stage: Stage::AwaitingFundingStage,
            selected_sector: Some(sector),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            at: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_indices() {
        assert_eq!(Stage::AwaitingReady.index(), 0);
        assert_eq!(Stage::AwaitingTopic.index(), 1);
        assert_eq!(Stage::AwaitingSector.index(), 2);
        assert_eq!(Stage::AwaitingFundingStage.index(), 3);
    }

    #[test]
    fn test_default_state() {
        let state = ConversationState::default();
        assert_eq!(state.stage(), Stage::AwaitingReady);
        assert!(state.selected_sector().is_none());
    }

    #[test]
    fn test_message_serializes_lowercase_role() {
        let json = serde_json::to_value(Message::assistant("hi")).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hi");
    }
}
