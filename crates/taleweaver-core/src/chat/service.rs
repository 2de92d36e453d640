//! Game Master chat service.
//!
//! One exchange: validate input -> (optionally) take the per-session guard ->
//! read trailing history -> compose prompt -> call the backend under a
//! timeout -> extract the reply -> append the turn. History only grows once
//! the backend has produced a usable reply.

use std::time::{Duration, Instant};

use chrono::Utc;
use serde_json::Value;
use tracing::{Instrument, debug, info, info_span, warn};

use taleweaver_observe::genai_attrs::{OP_GENERATE, OP_LIST_MODELS};
use taleweaver_types::chat::{ChatReply, Locale, Turn};
use taleweaver_types::config::GlobalConfig;
use taleweaver_types::error::ChatError;
use taleweaver_types::llm::{GenerateRequest, LlmError, SamplingOptions};

use crate::llm::box_backend::BoxModelBackend;
use crate::prompt::{build_prompt, extract_reply, persona_template};
use crate::session::store::SessionStore;

/// Knobs the service needs from the global configuration.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub model: String,
    pub sampling: SamplingOptions,
    pub timeout: Duration,
    pub context_turns: usize,
    pub serialize_requests: bool,
}

impl ChatSettings {
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            model: config.backend.model.clone(),
            sampling: config.backend.sampling.clone(),
            timeout: Duration::from_secs(config.backend.timeout_secs),
            context_turns: config.session.context_turns,
            serialize_requests: config.session.serialize_requests,
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::from_config(&GlobalConfig::default())
    }
}

/// Orchestrates chat exchanges against a model backend.
pub struct GameMasterService {
    store: SessionStore,
    backend: BoxModelBackend,
    settings: ChatSettings,
}

impl GameMasterService {
    pub fn new(store: SessionStore, backend: BoxModelBackend, settings: ChatSettings) -> Self {
        Self {
            store,
            backend,
            settings,
        }
    }

    /// Access the session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Run one exchange for `session_id`.
    ///
    /// # Errors
    ///
    /// - [`ChatError::Validation`] for an empty message or unsupported language
    /// - [`ChatError::BackendUnavailable`] if the backend is unreachable or times out
    /// - [`ChatError::BackendModelMissing`] if the configured model is not installed
    /// - [`ChatError::MalformedBackendResponse`] / [`ChatError::Backend`] otherwise
    ///
    /// On any error the session history is left untouched. If the session is
    /// cleared while the backend is working, the reply is still returned but
    /// the turn is not recorded.
    pub async fn chat(
        &self,
        message: &str,
        language: &str,
        session_id: &str,
    ) -> Result<ChatReply, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::Validation("Message is required".to_string()));
        }
        let locale: Locale = language.parse().map_err(ChatError::Validation)?;

        let _guard = if self.settings.serialize_requests {
            Some(self.store.sequence(session_id).await)
        } else {
            None
        };

        self.store.get_or_create(session_id);
        let history = self.store.recent(session_id, self.settings.context_turns);
        let prompt = build_prompt(persona_template(locale), &history, message);

        info!(session_id, %locale, context_turns = history.len(), "Player: {message}");

        let request = GenerateRequest::new(&self.settings.model, prompt, self.settings.sampling.clone());
        let raw = self.generate(&request, session_id).await?;
        let reply = extract_reply(&raw)?;

        info!(session_id, "GM: {reply}");

        // The session was registered above; if it is gone now, a clear
        // arrived while the backend was working and must stand.
        if !self
            .store
            .append_if_present(session_id, Turn::new(message, reply.clone()))
        {
            info!(session_id, "Session cleared during exchange, turn not recorded");
        }

        Ok(ChatReply {
            response: reply,
            timestamp: Utc::now(),
            session_id: session_id.to_string(),
        })
    }

    /// Call the backend under the configured timeout, classifying failures.
    async fn generate(&self, request: &GenerateRequest, session_id: &str) -> Result<Value, ChatError> {
        let span = info_span!(
            "gen_ai.generate",
            gen_ai.operation.name = OP_GENERATE,
            gen_ai.provider.name = self.backend.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.options.max_tokens,
            gen_ai.request.temperature = request.options.temperature,
            session_id,
        );

        let start = Instant::now();
        let outcome = tokio::time::timeout(self.settings.timeout, self.backend.generate(request))
            .instrument(span)
            .await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(Ok(raw)) => {
                debug!(session_id, elapsed_ms, "Backend responded");
                Ok(raw)
            }
            Ok(Err(err)) => {
                warn!(session_id, elapsed_ms, error = %err, "Backend call failed");
                Err(ChatError::from_llm(err, &request.model))
            }
            Err(_) => {
                let after_secs = self.settings.timeout.as_secs();
                warn!(session_id, elapsed_ms, after_secs, "Backend call timed out");
                Err(ChatError::from_llm(LlmError::Timeout { after_secs }, &request.model))
            }
        }
    }

    /// Full history for a session (empty if unknown).
    pub fn history(&self, session_id: &str) -> Vec<Turn> {
        self.store.get(session_id)
    }

    /// Drop a session's history. Idempotent.
    pub fn clear(&self, session_id: &str) {
        self.store.clear(session_id);
        info!(session_id, "Conversation history cleared");
    }

    /// Models installed on the backend.
    pub async fn list_models(&self) -> Result<Vec<Value>, LlmError> {
        let span = info_span!(
            "gen_ai.list_models",
            gen_ai.operation.name = OP_LIST_MODELS,
            gen_ai.provider.name = self.backend.name(),
        );
        self.backend.list_models().instrument(span).await
    }
}
