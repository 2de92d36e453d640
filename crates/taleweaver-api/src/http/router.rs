//! Axum router configuration with middleware.
//!
//! All API routes live under `/api/`; unknown `/api/*` paths get a JSON 404.
//! Middleware: CORS (any origin), request tracing.
//!
//! The browser client is served from `server.static_dir` when that directory
//! exists. API routes take priority over static files.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::error::AppError;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config.server.static_dir.clone();

    let api_routes = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route(
            "/conversation/{session_id}",
            get(handlers::conversation::get_conversation)
                .delete(handlers::conversation::clear_conversation),
        )
        .route("/health", get(handlers::health::health))
        .route("/test-ollama", get(handlers::health::test_ollama))
        .route("/character", get(handlers::character::default_character))
        .route(
            "/character/{session_id}",
            get(handlers::character::session_character),
        )
        .fallback(api_not_found);

    let mut router = Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if std::path::Path::new(&static_dir).is_dir() {
        router = router.fallback_service(ServeDir::new(&static_dir));
        tracing::info!(path = %static_dir, "Static file serving enabled");
    } else {
        tracing::debug!(path = %static_dir, "Static directory not found, serving API only");
    }

    router
}

async fn api_not_found() -> AppError {
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use taleweaver_core::llm::backend::ModelBackend;
    use taleweaver_core::llm::box_backend::BoxModelBackend;
    use taleweaver_types::config::GlobalConfig;
    use taleweaver_types::llm::{GenerateRequest, LlmError};

    /// Backend double: replies with a canned body or fails with a fixed error.
    #[derive(Clone)]
    struct MockBackend {
        outcome: Arc<dyn Fn() -> Result<Value, LlmError> + Send + Sync>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl MockBackend {
        fn replying(text: &'static str) -> Self {
            Self::with(move || Ok(json!({ "response": text })))
        }

        fn failing(make: fn() -> LlmError) -> Self {
            Self::with(move || Err(make()))
        }

        fn with(f: impl Fn() -> Result<Value, LlmError> + Send + Sync + 'static) -> Self {
            Self {
                outcome: Arc::new(f),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl ModelBackend for MockBackend {
        fn name(&self) -> &str {
            "mock"
        }

        async fn generate(&self, request: &GenerateRequest) -> Result<Value, LlmError> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            (self.outcome)()
        }

        async fn list_models(&self) -> Result<Vec<Value>, LlmError> {
            (self.outcome)().map(|_| vec![json!({ "name": "llama3.1:8b" })])
        }
    }

    fn config() -> GlobalConfig {
        let mut config = GlobalConfig::default();
        config.server.static_dir = "/nonexistent/taleweaver-static".to_string();
        config
    }

    fn app(backend: MockBackend) -> Router {
        build_router(AppState::with_backend(config(), BoxModelBackend::new(backend)))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        dispatch(app, request).await
    }

    async fn post_raw(app: &Router, content_type: Option<&str>, body: &'static str) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::POST).uri("/api/chat");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        dispatch(app, builder.body(Body::from(body)).unwrap()).await
    }

    async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_chat_success_and_history() {
        let app = app(MockBackend::replying("  You see a dark corridor.  "));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/chat",
            Some(json!({ "message": "I look around", "sessionId": "s1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "You see a dark corridor.");
        assert_eq!(body["sessionId"], "s1");
        assert!(body["timestamp"].is_string());

        let (status, body) = send(&app, Method::GET, "/api/conversation/s1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sessionId"], "s1");
        assert_eq!(
            body["history"],
            json!([{ "player": "I look around", "ai": "You see a dark corridor." }])
        );
    }

    #[tokio::test]
    async fn test_chat_defaults_to_default_session() {
        let app = app(MockBackend::replying("Welcome."));

        let (status, body) =
            send(&app, Method::POST, "/api/chat", Some(json!({ "message": "hi" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sessionId"], "default");

        let (_, body) = send(&app, Method::GET, "/api/conversation/default", None).await;
        assert_eq!(body["history"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_chat_missing_message_is_400() {
        let backend = MockBackend::replying("unused");
        let prompts = backend.prompts.clone();
        let app = app(backend);

        let (status, body) =
            send(&app, Method::POST, "/api/chat", Some(json!({ "sessionId": "s1" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Message is required" }));

        let (status, _) =
            send(&app, Method::POST, "/api/chat", Some(json!({ "message": "" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_empty_body_is_missing_message() {
        let app = app(MockBackend::replying("unused"));

        for content_type in [None, Some("application/json")] {
            let (status, body) = post_raw(&app, content_type, "").await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "Message is required" }));
        }
    }

    #[tokio::test]
    async fn test_chat_undecodable_body_is_json_400() {
        let app = app(MockBackend::replying("unused"));

        for raw in ["not json", r#"{"message": 42}"#] {
            let (status, body) = post_raw(&app, Some("application/json"), raw).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Invalid request body");
            assert!(body["details"].is_string());
        }
    }

    #[tokio::test]
    async fn test_chat_unsupported_language_is_400() {
        let app = app(MockBackend::replying("unused"));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/chat",
            Some(json!({ "message": "hola", "language": "es" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unsupported language: es");
    }

    #[tokio::test]
    async fn test_chat_french_persona() {
        let backend = MockBackend::replying("Bienvenue.");
        let prompts = backend.prompts.clone();
        let app = app(backend);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/chat",
            Some(json!({ "message": "Je regarde", "language": "fr" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let prompt = prompts.lock().unwrap()[0].clone();
        assert!(prompt.ends_with("Je regarde"));
        assert!(prompt.contains("Action du joueur"));
    }

    #[tokio::test]
    async fn test_chat_backend_unreachable_is_503() {
        let app = app(MockBackend::failing(|| {
            LlmError::Unreachable("connection refused".to_string())
        }));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/chat",
            Some(json!({ "message": "attack", "sessionId": "s1" })),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "AI service unavailable");
        assert_eq!(body["details"], "connection refused");
        assert_eq!(body["suggestion"], "Run: ollama serve");

        let (_, body) = send(&app, Method::GET, "/api/conversation/s1", None).await;
        assert_eq!(body["history"], json!([]));
    }

    #[tokio::test]
    async fn test_chat_model_missing_is_503_with_pull_hint() {
        let app = app(MockBackend::failing(|| {
            LlmError::ModelNotFound("model not found".to_string())
        }));

        let (status, body) =
            send(&app, Method::POST, "/api/chat", Some(json!({ "message": "hi" }))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "AI model not found");
        assert_eq!(body["suggestion"], "Run: ollama pull llama3.1:8b");
    }

    #[tokio::test]
    async fn test_chat_malformed_reply_is_500() {
        let app = app(MockBackend::with(|| Ok(json!({ "done": true }))));

        let (status, body) =
            send(&app, Method::POST, "/api/chat", Some(json!({ "message": "hi" }))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn test_clear_conversation_is_idempotent() {
        let app = app(MockBackend::replying("ok"));
        send(&app, Method::POST, "/api/chat", Some(json!({ "message": "hi", "sessionId": "s1" }))).await;

        for _ in 0..2 {
            let (status, body) = send(&app, Method::DELETE, "/api/conversation/s1", None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(
                body,
                json!({ "message": "Conversation history cleared", "sessionId": "s1" })
            );
        }

        let (_, body) = send(&app, Method::GET, "/api/conversation/s1", None).await;
        assert_eq!(body["history"], json!([]));
    }

    #[tokio::test]
    async fn test_unknown_conversation_is_empty() {
        let app = app(MockBackend::replying("ok"));
        let (status, body) = send(&app, Method::GET, "/api/conversation/nobody", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "history": [], "sessionId": "nobody" }));
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(MockBackend::replying("ok"));
        let (status, body) = send(&app, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Server is running");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_ollama_probe() {
        let app = app(MockBackend::replying("ok"));
        let (status, body) = send(&app, Method::GET, "/api/test-ollama", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Ollama connected");
        assert_eq!(body["models"][0]["name"], "llama3.1:8b");

        let app = app_failing_probe();
        let (status, body) = send(&app, Method::GET, "/api/test-ollama", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Cannot connect to Ollama");
        assert_eq!(
            body["suggestion"],
            "Make sure Ollama is running with: ollama serve"
        );
    }

    fn app_failing_probe() -> Router {
        app(MockBackend::failing(|| LlmError::Unreachable("refused".to_string())))
    }

    #[tokio::test]
    async fn test_character_sheet() {
        let app = app(MockBackend::replying("ok"));

        let (status, body) = send(&app, Method::GET, "/api/character", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sessionId"], "default");
        assert_eq!(body["hitPoints"]["maximum"], 35);

        let (_, body) = send(&app, Method::GET, "/api/character/s9", None).await;
        assert_eq!(body["sessionId"], "s9");
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        let app = app(MockBackend::replying("ok"));
        let (status, body) = send(&app, Method::GET, "/api/spells", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Endpoint not found" }));
    }

    #[tokio::test]
    async fn test_history_is_bounded() {
        let app = app(MockBackend::replying("ok"));
        for i in 0..12 {
            send(
                &app,
                Method::POST,
                "/api/chat",
                Some(json!({ "message": format!("action{i}"), "sessionId": "s1" })),
            )
            .await;
        }

        let (_, body) = send(&app, Method::GET, "/api/conversation/s1", None).await;
        let history = body["history"].as_array().unwrap();
        assert_eq!(history.len(), 10);
        assert_eq!(history[0]["player"], "action2");
        assert_eq!(history[9]["player"], "action11");
    }
}
