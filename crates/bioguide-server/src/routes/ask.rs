//! Report Q&A routes: question plus report context to a hosted model.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use super::error_response;
use crate::state::AppState;
use bioguide_chat::context::MAX_CONTEXT_SENTENCES;
use bioguide_chat::types::*;
use bioguide_chat::{build_prompt, extract_relevant_context, providers};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ask", post(ask))
        .route("/ask/config", get(get_config).put(update_config))
}

/// POST /api/ask: answer a question from the report via the model.
async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> impl IntoResponse {
    let (resolved, params) = {
        let config = state.llm_config.read();
        match config.resolve_provider() {
            Some(resolved) => (resolved, config.params),
            None => {
                return error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "No LLM provider configured",
                );
            }
        }
    };

    let context = extract_relevant_context(&req.question, &state.corpus, MAX_CONTEXT_SENTENCES);
    let prompt = build_prompt(&context, &req.question);

    match providers::generate(&state.http, &resolved, &prompt, &params).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(serde_json::to_value(AskResponse { answer }).unwrap_or_default()),
        ),
        Err(e) => {
            error!("Ask failed via {}: {}", resolved.provider, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// GET /api/ask/config: current config, keys masked.
async fn get_config(State(state): State<Arc<AppState>>) -> Json<LLMConfigResponse> {
    Json(state.llm_config.read().to_response())
}

/// PUT /api/ask/config: merge and persist an update.
async fn update_config(
    State(state): State<Arc<AppState>>,
    Json(update): Json<LLMConfigUpdate>,
) -> impl IntoResponse {
    let mut config = state.llm_config.write();
    config.apply_update(&update);
    if let Err(e) = config.save() {
        error!("Failed to save LLM config: {}", e);
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save config");
    }
    info!("LLM config updated (provider: {})", config.preferred_provider);
    (
        StatusCode::OK,
        Json(serde_json::to_value(config.to_response()).unwrap_or_default()),
    )
}
