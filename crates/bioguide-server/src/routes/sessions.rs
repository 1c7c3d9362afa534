//! Conversation routes: the scripted advisor over HTTP.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::Rng;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::error_response;
use crate::state::AppState;
use bioguide_core::{DelayRange, Error};
use bioguide_dialogue::{ConversationState, Session};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", get(get_session))
        .route("/sessions/{id}/messages", post(send_message))
}

#[derive(Debug, Deserialize)]
struct MessageRequest {
    content: String,
}

fn session_json(session: &Session) -> serde_json::Value {
    json!({
        "id": session.id,
        "stage": session.state().stage().index(),
        "selectedSector": session.state().selected_sector(),
        "pending": session.is_pending(),
        "createdAt": session.created_at,
        "messages": session.history(),
    })
}

/// Random pause before a reply is shown. Purely cosmetic.
fn thinking_delay(range: &DelayRange) -> Option<Duration> {
    if range.is_disabled() {
        return None;
    }
    let sample: f64 = rand::thread_rng().gen();
    Some(range.pick(sample))
}

/// POST /api/sessions: start a conversation with the welcome script.
async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.create_session();
    (StatusCode::CREATED, Json(session_json(&session)))
}

/// GET /api/sessions/{id}: transcript and stage.
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.sessions.read(&id, session_json) {
        Some(body) => (StatusCode::OK, Json(body)),
        None => error_response(StatusCode::NOT_FOUND, "Session not found"),
    }
}

/// POST /api/sessions/{id}/messages: run one turn of the script.
async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<MessageRequest>,
) -> impl IntoResponse {
    let gate = state.sessions.update(&id, |session| {
        session.begin_turn(&req.content).map(|()| *session.state())
    });
    let conversation = match gate {
        Some(Ok(conversation)) => conversation,
        Some(Err(Error::Busy)) => {
            return error_response(StatusCode::CONFLICT, "A reply is still pending")
        }
        Some(Err(Error::EmptyInput)) => {
            return error_response(StatusCode::BAD_REQUEST, "Message is empty")
        }
        Some(Err(e)) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
        None => return error_response(StatusCode::NOT_FOUND, "Session not found"),
    };

    // The turn finishes on its own task so a dropped request cannot leave
    // the session pending.
    let delay = thinking_delay(&state.config.delay);
    let task_state = state.clone();
    let handle = tokio::spawn(async move {
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        finish_turn(&task_state, &id, &conversation, &req.content)
    });

    match handle.await {
        Ok(Some(body)) => (StatusCode::OK, Json(body)),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Session not found"),
        Err(e) => {
            error!("Turn task failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Turn failed")
        }
    }
}

/// Compute the reply and record it. `None` if the session was evicted
/// while the turn was in flight.
fn finish_turn(
    state: &AppState,
    id: &str,
    conversation: &ConversationState,
    input: &str,
) -> Option<serde_json::Value> {
    let turn = state.controller.step(conversation, input);
    state.sessions.update(id, |session| {
        let reply = session.complete_turn(turn).content.clone();
        json!({
            "reply": reply,
            "stage": session.state().stage().index(),
            "selectedSector": session.state().selected_sector(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_delay_is_skipped() {
        assert!(thinking_delay(&DelayRange::disabled()).is_none());
    }

    #[test]
    fn test_delay_within_range() {
        let range = DelayRange::new(10, 20);
        for _ in 0..50 {
            let d = thinking_delay(&range).unwrap();
            assert!(d >= Duration::from_millis(10) && d <= Duration::from_millis(20));
        }
    }
}
