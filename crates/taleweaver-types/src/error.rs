use thiserror::Error;

use crate::llm::LlmError;

/// Errors surfaced to the caller of a chat exchange.
///
/// Every variant is request-scoped. None of them are retried and none are
/// fatal to the process.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("model backend unavailable: {details}")]
    BackendUnavailable { details: String },

    #[error("model '{model}' is not available: {details}")]
    BackendModelMissing { model: String, details: String },

    #[error("model backend returned no textual response")]
    MalformedBackendResponse,

    #[error("model backend error: {0}")]
    Backend(String),
}

impl ChatError {
    /// Map a backend error, attaching the model that was requested.
    pub fn from_llm(err: LlmError, model: &str) -> Self {
        match err {
            LlmError::Unreachable(details) => ChatError::BackendUnavailable { details },
            LlmError::Timeout { after_secs } => ChatError::BackendUnavailable {
                details: format!("no response from the model backend within {after_secs}s"),
            },
            LlmError::ModelNotFound(details) => ChatError::BackendModelMissing {
                model: model.to_string(),
                details,
            },
            other => ChatError::Backend(other.to_string()),
        }
    }
}
