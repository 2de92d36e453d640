//! ModelBackend trait definition.
//!
//! The text-generation service is an opaque collaborator: it takes a fully
//! composed prompt and hands back its raw JSON body. Reply extraction lives in
//! [`crate::prompt::extract_reply`] so malformed bodies are classified in one place.

use serde_json::Value;

use taleweaver_types::llm::{GenerateRequest, LlmError};

/// Trait for model backends (Ollama, test doubles).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in taleweaver-infra (e.g., `OllamaBackend`).
pub trait ModelBackend: Send + Sync {
    /// Human-readable backend name (e.g., "ollama").
    fn name(&self) -> &str;

    /// Run a single non-streaming generation and return the raw response body.
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl std::future::Future<Output = Result<Value, LlmError>> + Send;

    /// List the models installed on the backend.
    fn list_models(&self) -> impl std::future::Future<Output = Result<Vec<Value>, LlmError>> + Send;
}
