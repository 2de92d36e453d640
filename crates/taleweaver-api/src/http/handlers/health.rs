//! Liveness and backend connectivity probes.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use serde_json::{Value, json};

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "Server is running",
        "timestamp": Utc::now(),
    }))
}

/// GET /api/test-ollama -- lists installed models to prove the backend answers.
pub async fn test_ollama(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let models = state.game_master.list_models().await.map_err(|e| {
        tracing::warn!(error = %e, "Ollama connectivity check failed");
        AppError::BackendProbe(e)
    })?;

    Ok(Json(json!({
        "status": "Ollama connected",
        "models": models,
        "timestamp": Utc::now(),
    })))
}
