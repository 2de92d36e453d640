//! Model backend implementations.
//!
//! Contains the Ollama implementation of the [`ModelBackend`] trait defined
//! in `taleweaver-core`, plus a factory ([`create_backend`]) that builds the
//! boxed backend from configuration.
//!
//! [`ModelBackend`]: taleweaver_core::llm::backend::ModelBackend

pub mod ollama;

use std::time::Duration;

use taleweaver_core::llm::box_backend::BoxModelBackend;
use taleweaver_types::config::BackendConfig;
use taleweaver_types::llm::LlmError;

use self::ollama::OllamaBackend;

/// Create a [`BoxModelBackend`] from a [`BackendConfig`].
///
/// The HTTP client gets one extra second over the configured timeout so the
/// service-level timeout is the one callers observe.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn create_backend(config: &BackendConfig) -> Result<BoxModelBackend, LlmError> {
    let timeout = Duration::from_secs(config.timeout_secs.saturating_add(1));
    let backend = OllamaBackend::new(config.base_url.clone(), timeout)?;
    tracing::debug!(base_url = %backend.base_url(), model = %config.model, "Ollama backend configured");
    Ok(BoxModelBackend::new(backend))
}
