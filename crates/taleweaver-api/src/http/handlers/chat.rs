//! POST /api/chat -- one Game Master exchange.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::Deserialize;
use tracing::Instrument;
use uuid::Uuid;

use taleweaver_types::chat::{ChatReply, DEFAULT_SESSION_ID};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for a chat exchange.
///
/// `message` stays optional so a missing field reaches the service and
/// produces the same 400 as an empty one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for ChatRequest {
    fn default() -> Self {
        Self {
            message: None,
            language: default_language(),
            session_id: None,
        }
    }
}

impl ChatRequest {
    /// Decode a raw request body. An empty body is a request with no
    /// fields, so it fails validation as a missing message.
    fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.trim_ascii().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| AppError::InvalidBody(e.to_string()))
    }

    fn session_id(&self) -> &str {
        match self.session_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => DEFAULT_SESSION_ID,
        }
    }
}

pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    let req = ChatRequest::from_body(&body)?;
    let request_id = Uuid::now_v7();
    let session_id = req.session_id();
    let span = tracing::info_span!("chat_request", %request_id, session_id, language = %req.language);

    let message = req.message.as_deref().unwrap_or_default();
    let reply = state
        .game_master
        .chat(message, &req.language, session_id)
        .instrument(span)
        .await?;
    Ok(Json(reply))
}
