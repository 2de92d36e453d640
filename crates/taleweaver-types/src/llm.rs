//! Model backend request types for Taleweaver.
//!
//! These types model the data shapes sent to the text-generation backend:
//! a single prompt string plus a fixed sampling configuration.

use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the backend with every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f64 {
    0.8
}

fn default_top_p() -> f64 {
    0.9
}

fn default_top_k() -> u32 {
    40
}

fn default_max_tokens() -> u32 {
    200
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Request to the backend for a single non-streaming generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    #[serde(default)]
    pub stream: bool,
    pub options: SamplingOptions,
}

impl GenerateRequest {
    /// Build a non-streaming request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, options: SamplingOptions) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            options,
        }
    }
}

/// Errors from model backend operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}
