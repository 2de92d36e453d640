//! Application state wiring the services together.
//!
//! AppState holds the concrete service instances used by both the CLI and
//! the HTTP handlers. The model backend is injected as a `BoxModelBackend`
//! so tests can run the router against a scripted double.

use std::sync::Arc;

use taleweaver_core::chat::service::{ChatSettings, GameMasterService};
use taleweaver_core::llm::box_backend::BoxModelBackend;
use taleweaver_core::session::store::SessionStore;
use taleweaver_infra::llm::create_backend;
use taleweaver_types::config::GlobalConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub game_master: Arc<GameMasterService>,
    pub config: Arc<GlobalConfig>,
}

impl AppState {
    /// Build the state against the configured Ollama server.
    pub fn init(config: GlobalConfig) -> anyhow::Result<Self> {
        let backend = create_backend(&config.backend)?;
        Ok(Self::with_backend(config, backend))
    }

    /// Build the state around an already constructed backend.
    pub fn with_backend(config: GlobalConfig, backend: BoxModelBackend) -> Self {
        let store = SessionStore::new(config.session.max_turns);
        let settings = ChatSettings::from_config(&config);
        let game_master = GameMasterService::new(store, backend, settings);

        Self {
            game_master: Arc::new(game_master),
            config: Arc::new(config),
        }
    }
}
