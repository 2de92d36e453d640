//! Global configuration types for Taleweaver.
//!
//! `GlobalConfig` represents the top-level `taleweaver.toml` that controls
//! the listening address, the model backend, and session windowing.

use serde::{Deserialize, Serialize};

use crate::llm::SamplingOptions;

/// Top-level configuration for the relay.
///
/// Every section and field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the browser client. Skipped if it does not exist.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "frontend".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Model backend (Ollama) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on a single generation call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub sampling: SamplingOptions,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.1:8b".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            sampling: SamplingOptions::default(),
        }
    }
}

/// Conversation history windowing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum turns retained per session before FIFO eviction.
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,
    /// Trailing turns included in each prompt.
    #[serde(default = "default_context_turns")]
    pub context_turns: usize,
    /// Serialize concurrent requests for the same session.
    #[serde(default = "default_serialize_requests")]
    pub serialize_requests: bool,
}

fn default_max_turns() -> usize {
    10
}

fn default_context_turns() -> usize {
    6
}

fn default_serialize_requests() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
            context_turns: default_context_turns(),
            serialize_requests: default_serialize_requests(),
        }
    }
}
