//! Application error type mapping to HTTP status codes and JSON bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use taleweaver_types::error::ChatError;
use taleweaver_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// A chat exchange failed.
    Chat(ChatError),
    /// The request body could not be decoded.
    InvalidBody(String),
    /// The backend connectivity probe failed.
    BackendProbe(LlmError),
    /// No route under `/api` matched.
    NotFound,
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::BackendProbe(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Chat(ChatError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::Chat(ChatError::BackendUnavailable { details }) => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "error": "AI service unavailable",
                    "details": details,
                    "suggestion": "Run: ollama serve",
                }),
            ),
            AppError::Chat(ChatError::BackendModelMissing { model, details }) => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "error": "AI model not found",
                    "details": details,
                    "suggestion": format!("Run: ollama pull {model}"),
                }),
            ),
            AppError::Chat(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Internal server error",
                    "details": e.to_string(),
                }),
            ),
            AppError::InvalidBody(details) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Invalid request body",
                    "details": details,
                }),
            ),
            AppError::BackendProbe(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Cannot connect to Ollama",
                    "details": e.to_string(),
                    "suggestion": "Make sure Ollama is running with: ollama serve",
                }),
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Endpoint not found" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
