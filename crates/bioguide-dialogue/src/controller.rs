//! Conversation controller: the stage transition function.

use std::sync::Arc;

use bioguide_core::FormatLimits;
use bioguide_store::{KnowledgeStore, Topic};
use tracing::debug;

use crate::classifier::{classify_sector, classify_topic};
use crate::formatter::{self, HELP_MESSAGE};
use crate::types::{ConversationState, Stage};

/// Result of one controller step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub state: ConversationState,
    pub reply: String,
}

/// Decides the next stage and reply for a user input.
///
/// Holds the frozen knowledge store and formatting limits; all
/// per-conversation state is passed in, so one controller serves every
/// session.
#[derive(Debug, Clone)]
pub struct Controller {
    store: Arc<KnowledgeStore>,
    limits: FormatLimits,
}

impl Controller {
    pub fn new(store: Arc<KnowledgeStore>, limits: FormatLimits) -> Self {
        Self { store, limits }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    pub fn limits(&self) -> &FormatLimits {
        &self.limits
    }

    /// Advance the script by one input. Total: never fails, never does I/O.
    pub fn step(&self, state: &ConversationState, input: &str) -> Turn {
        let turn = match state.stage() {
            Stage::AwaitingReady => self.on_ready_prompt(input),
            Stage::AwaitingTopic => self.on_topic(input),
            Stage::AwaitingSector => self.on_sector(input),
            Stage::AwaitingFundingStage => self.on_funding_stage(state, input),
        };
        debug!(
            "Stage {} -> {}",
            state.stage().index(),
            turn.state.stage().index()
        );
        turn
    }

    fn on_ready_prompt(&self, input: &str) -> Turn {
        if input.to_lowercase().contains("ready") {
            return Turn {
                state: ConversationState::at(Stage::AwaitingTopic),
                reply: formatter::top_menu(),
            };
        }
        let reply = bioguide_store::search(input, &self.store, &self.limits)
            .unwrap_or_else(|| HELP_MESSAGE.to_string());
        Turn {
            state: ConversationState::at(Stage::AwaitingReady),
            reply,
        }
    }

    fn on_topic(&self, input: &str) -> Turn {
        match classify_topic(input) {
            Topic::Sector => Turn {
                state: ConversationState::at(Stage::AwaitingSector),
                reply: formatter::sector_menu(&self.store),
            },
            topic => Turn {
                state: ConversationState::at(Stage::AwaitingReady),
                reply: formatter::format_topic(topic, &self.store, &self.limits),
            },
        }
    }

    fn on_sector(&self, input: &str) -> Turn {
        let sector = classify_sector(input);
        Turn {
            state: ConversationState::awaiting_funding_stage(sector),
            reply: formatter::format_sector(sector, &self.store, &self.limits),
        }
    }

    fn on_funding_stage(&self, state: &ConversationState, input: &str) -> Turn {
        // The sector is always set at this stage; the default only guards
        // against a hand-built state.
        let sector = state
            .selected_sector()
            .unwrap_or(crate::classifier::DEFAULT_SECTOR);
        Turn {
            state: ConversationState::at(Stage::AwaitingReady),
            reply: formatter::format_roadmap(sector, input, &self.store, &self.limits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioguide_store::{builtin_store, Sector};

    fn controller() -> Controller {
        Controller::new(Arc::new(builtin_store()), FormatLimits::default())
    }

    fn run(controller: &Controller, inputs: &[&str]) -> (ConversationState, Vec<String>) {
        let mut state = ConversationState::default();
        let mut replies = Vec::new();
        for input in inputs {
            let turn = controller.step(&state, input);
            state = turn.state;
            replies.push(turn.reply);
        }
        (state, replies)
    }

    #[test]
    fn test_ready_opens_menu_in_any_case() {
        let c = controller();
        for input in ["ready", "READY", "I'm Ready now"] {
            let turn = c.step(&ConversationState::default(), input);
            assert_eq!(turn.state.stage(), Stage::AwaitingTopic);
            assert_eq!(turn.reply, formatter::top_menu());
            assert!(turn.reply.contains("Healthcare"));
            assert!(turn.reply.contains("Packaging"));
        }
    }

    #[test]
    fn test_stage_zero_falls_back_to_search_then_help() {
        let c = controller();
        let turn = c.step(&ConversationState::default(), "tell me about bioplastics");
        assert_eq!(turn.state.stage(), Stage::AwaitingReady);
        assert!(turn.reply.starts_with("Here's relevant information:"));

        let turn = c.step(&ConversationState::default(), "qwxz");
        assert_eq!(turn.state.stage(), Stage::AwaitingReady);
        assert_eq!(turn.reply, HELP_MESSAGE);
    }

    #[test]
    fn test_topic_choice_returns_to_start() {
        let c = controller();
        let (state, replies) = run(&c, &["ready", "partners please"]);
        assert_eq!(state.stage(), Stage::AwaitingReady);
        assert!(replies[1].starts_with("ESSENTIAL PARTNERSHIPS:"));
    }

    #[test]
    fn test_unmatched_topic_defaults_to_sector_menu() {
        let c = controller();
        let (state, replies) = run(&c, &["ready", "I want healthcare"]);
        assert_eq!(state.stage(), Stage::AwaitingSector);
        assert!(state.selected_sector().is_none());
        assert!(replies[1].contains("$9.44B"));
    }

    #[test]
    fn test_full_cycle_scenario() {
        let c = controller();
        let (state, replies) = run(
            &c,
            &["ready", "I want healthcare", "healthcare", "series A"],
        );
        assert!(replies[0].contains("Healthcare") && replies[0].contains("Packaging"));
        assert!(replies[1].contains("$9.44B"));
        assert!(replies[2].contains("$9.44B"));
        assert!(replies[2].contains("What's your venture stage?"));
        assert!(replies[3].contains("ESSENTIAL PARTNERSHIPS"));
        assert!(replies[3].contains("series A"));
        assert!(replies[3].contains("HEALTHCARE"));
        assert_eq!(state, ConversationState::default());
    }

    #[test]
    fn test_sector_is_remembered_until_roadmap() {
        let c = controller();
        let (state, _) = run(&c, &["ready", "sectors", "farm waste"]);
        assert_eq!(state.stage(), Stage::AwaitingFundingStage);
        assert_eq!(state.selected_sector(), Some(Sector::Agriculture));

        let turn = c.step(&state, "pre-seed");
        assert!(turn.reply.starts_with("STRATEGIC ROADMAP FOR AGRICULTURE (pre-seed):"));
        assert!(turn.state.selected_sector().is_none());
    }

    #[test]
    fn test_cycle_always_returns_to_start() {
        let c = controller();
        for sector_input in ["", "textiles", "???", "medical"] {
            for funding in ["", "growth stage", "\n\t"] {
                let (state, _) = run(&c, &["ready", "opportunity", sector_input, funding]);
                assert_eq!(state.stage(), Stage::AwaitingReady);
                assert!(state.selected_sector().is_none());
            }
        }
    }

    #[test]
    fn test_empty_input_never_panics_and_stage_stays_in_range() {
        let c = controller();
        let mut state = ConversationState::default();
        for input in ["", " ", "ready", "", "", "", "\u{feff}", "ready", "\0"] {
            let turn = c.step(&state, input);
            assert!(turn.state.stage().index() <= 3);
            if turn.state.selected_sector().is_some() {
                assert_eq!(turn.state.stage(), Stage::AwaitingFundingStage);
            }
            state = turn.state;
        }
    }

    #[test]
    fn test_empty_store_degrades_gracefully() {
        let c = Controller::new(Arc::new(KnowledgeStore::empty()), FormatLimits::default());
        let (state, replies) = run(&c, &["hello", "ready", "policy", "ready", "x", "y", "z"]);
        assert_eq!(replies[0], HELP_MESSAGE);
        assert!(replies[2].starts_with("GOVERNMENT POLICIES:"));
        assert!(replies[6].contains("NEXT STEPS"));
        assert_eq!(state.stage(), Stage::AwaitingReady);
    }
}
