//! Ollama wire types that the client decodes itself.
//!
//! The `/api/generate` body is passed through untouched as a JSON value;
//! only the tag listing and error envelope are typed here.

use serde::Deserialize;
use serde_json::Value;

/// `GET /api/tags` response.
#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<Value>,
}

/// Error envelope returned on non-2xx responses, e.g.
/// `{"error": "model \"llama3.1:8b\" not found, try pulling it first"}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
