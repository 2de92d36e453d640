//! Conversation history handlers.
//!
//! Endpoints:
//! - GET    /api/conversation/{sessionId} - Full history for a session
//! - DELETE /api/conversation/{sessionId} - Drop a session's history

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::state::AppState;

pub async fn get_conversation(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<Value> {
    let history = state.game_master.history(&session_id);
    Json(json!({
        "history": history,
        "sessionId": session_id,
    }))
}

pub async fn clear_conversation(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<Value> {
    state.game_master.clear(&session_id);
    Json(json!({
        "message": "Conversation history cleared",
        "sessionId": session_id,
    }))
}
