//! BoxModelBackend -- object-safe dynamic dispatch wrapper for ModelBackend.
//!
//! 1. Define an object-safe `ModelBackendDyn` trait with boxed futures
//! 2. Blanket-impl `ModelBackendDyn` for all `T: ModelBackend`
//! 3. `BoxModelBackend` wraps `Box<dyn ModelBackendDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use taleweaver_types::llm::{GenerateRequest, LlmError};

use super::backend::ModelBackend;

/// Object-safe version of [`ModelBackend`] with boxed futures.
pub trait ModelBackendDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerateRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Value, LlmError>> + Send + 'a>>;

    fn list_models_boxed(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Value>, LlmError>> + Send + '_>>;
}

impl<T: ModelBackend> ModelBackendDyn for T {
    fn name(&self) -> &str {
        ModelBackend::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerateRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Value, LlmError>> + Send + 'a>> {
        Box::pin(self.generate(request))
    }

    fn list_models_boxed(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Value>, LlmError>> + Send + '_>> {
        Box::pin(self.list_models())
    }
}

/// Type-erased model backend, so the service is not generic over it and
/// tests can swap in a scripted double.
pub struct BoxModelBackend {
    inner: Box<dyn ModelBackendDyn + Send + Sync>,
}

impl BoxModelBackend {
    /// Wrap a concrete `ModelBackend` in a type-erased box.
    pub fn new<T: ModelBackend + 'static>(backend: T) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn generate(&self, request: &GenerateRequest) -> Result<Value, LlmError> {
        self.inner.generate_boxed(request).await
    }

    pub async fn list_models(&self) -> Result<Vec<Value>, LlmError> {
        self.inner.list_models_boxed().await
    }
}
