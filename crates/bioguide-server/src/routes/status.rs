//! Service status route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

/// GET /api/status: knowledge source and model availability.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let store = state.controller.store();
    let resolved = state.llm_config.read().resolve_provider();

    Json(serde_json::json!({
        "knowledgeSource": store.source(),
        "entries": store.len(),
        "ingestWarning": state.ingest_warning,
        "sessions": state.sessions.len(),
        "llmAvailable": resolved.is_some(),
        "llmProvider": resolved.as_ref().map(|r| r.provider.to_string()),
        "llmModel": resolved.as_ref().map(|r| r.model.clone()),
    }))
}
