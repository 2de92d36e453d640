//! OllamaBackend -- concrete [`ModelBackend`] implementation for Ollama.
//!
//! Sends non-streaming requests to `/api/generate` and lists installed
//! models via `/api/tags`. Transport failures are classified so callers can
//! tell "start the service" apart from "install the model".

pub mod types;

use std::time::Duration;

use serde_json::Value;

use taleweaver_core::llm::backend::ModelBackend;
use taleweaver_observe::genai_attrs::PROVIDER_OLLAMA;
use taleweaver_types::llm::{GenerateRequest, LlmError};

use self::types::{ErrorBody, TagsResponse};

/// Ollama text-generation backend.
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OllamaBackend {
    /// Create a backend for the Ollama server at `base_url`.
    ///
    /// `timeout` bounds every HTTP request made by this client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Classify a transport-level failure.
    fn transport_error(&self, err: reqwest::Error) -> LlmError {
        if err.is_timeout() {
            LlmError::Timeout {
                after_secs: self.timeout.as_secs(),
            }
        } else if err.is_connect() {
            LlmError::Unreachable(format!(
                "Cannot connect to Ollama at {}. Make sure it's running.",
                self.base_url
            ))
        } else {
            LlmError::Provider {
                message: format!("HTTP request failed: {err}"),
            }
        }
    }

    /// Turn a non-2xx response into an error, reading Ollama's error envelope.
    async fn status_error(response: reqwest::Response) -> LlmError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or(body);

        match status.as_u16() {
            404 => LlmError::ModelNotFound(message),
            _ => LlmError::Provider {
                message: format!("HTTP {status}: {message}"),
            },
        }
    }
}

impl ModelBackend for OllamaBackend {
    fn name(&self) -> &str {
        PROVIDER_OLLAMA
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<Value, LlmError> {
        let response = self
            .client
            .post(self.url("/api/generate"))
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))
    }

    async fn list_models(&self) -> Result<Vec<Value>, LlmError> {
        let response = self
            .client
            .get(self.url("/api/tags"))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse tags: {e}")))?;
        Ok(tags.models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use taleweaver_types::llm::SamplingOptions;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> GenerateRequest {
        GenerateRequest::new("llama3.1:8b", "You are a GM. Player action: look", SamplingOptions::default())
    }

    fn backend(uri: &str) -> OllamaBackend {
        OllamaBackend::new(uri, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_backend_name_and_url() {
        let b = backend("http://localhost:11434/");
        assert_eq!(b.name(), PROVIDER_OLLAMA);
        assert_eq!(b.base_url(), "http://localhost:11434");
        assert_eq!(b.url("/api/generate"), "http://localhost:11434/api/generate");
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_options() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(json!({
                "model": "llama3.1:8b",
                "prompt": "You are a GM. Player action: look",
                "stream": false,
                "options": { "top_k": 40, "max_tokens": 200 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "llama3.1:8b",
                "response": " A torch flickers. ",
                "done": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let raw = backend(&server.uri()).generate(&request()).await.unwrap();
        assert_eq!(raw["response"], " A torch flickers. ");
    }

    #[tokio::test]
    async fn test_generate_missing_model_maps_to_model_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "model \"llama3.1:8b\" not found, try pulling it first"
            })))
            .mount(&server)
            .await;

        let err = backend(&server.uri()).generate(&request()).await.unwrap_err();
        match err {
            LlmError::ModelNotFound(msg) => assert!(msg.contains("try pulling it first")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_server_error_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("out of memory"))
            .mount(&server)
            .await;

        let err = backend(&server.uri()).generate(&request()).await.unwrap_err();
        match err {
            LlmError::Provider { message } => {
                assert!(message.contains("500"));
                assert!(message.contains("out of memory"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_non_json_body_is_deserialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = backend(&server.uri()).generate(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_generate_unreachable() {
        // Port 1 is reserved and nothing listens there.
        let err = backend("http://127.0.0.1:1").generate(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Unreachable(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_generate_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"response": "late"}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let b = OllamaBackend::new(server.uri(), Duration::from_millis(200)).unwrap();
        let err = b.generate(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Timeout { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_list_models() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{"name": "llama3.1:8b"}, {"name": "mistral:7b"}]
            })))
            .mount(&server)
            .await;

        let models = backend(&server.uri()).list_models().await.unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0]["name"], "llama3.1:8b");
    }

    #[tokio::test]
    async fn test_list_models_empty_body_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let models = backend(&server.uri()).list_models().await.unwrap();
        assert!(models.is_empty());
    }
}
