//! Shared application state.

use std::sync::Arc;

use bioguide_chat::LLMConfig;
use bioguide_core::BioGuideConfig;
use bioguide_dialogue::{Controller, Session};
use parking_lot::RwLock;

use crate::knowledge::Knowledge;
use crate::session_store::SessionStore;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: BioGuideConfig,
    pub controller: Controller,
    pub llm_config: RwLock<LLMConfig>,
    /// Live conversations, capped at `config.max_sessions`.
    pub sessions: SessionStore,
    /// Report text handed to the language model as context.
    pub corpus: String,
    pub ingest_warning: Option<String>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: BioGuideConfig, knowledge: Knowledge, llm_config: LLMConfig) -> Self {
        let controller = Controller::new(Arc::new(knowledge.store), config.limits);
        let sessions = SessionStore::new(config.max_sessions);
        Self {
            config,
            controller,
            llm_config: RwLock::new(llm_config),
            sessions,
            corpus: knowledge.corpus,
            ingest_warning: knowledge.warning,
            http: reqwest::Client::new(),
        }
    }

    /// Start a conversation and register it.
    pub fn create_session(&self) -> Session {
        let session = Session::new(self.ingest_warning.as_deref());
        self.sessions.insert(session.clone());
        session
    }
}
