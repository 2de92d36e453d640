//! OpenTelemetry GenAI Semantic Convention attribute values.
//!
//! `tracing` span field names must be literal identifiers, so spans spell
//! out the keys (`gen_ai.operation.name`, `gen_ai.provider.name`,
//! `gen_ai.request.model`) directly. This module holds the shared values.
//!
//! Span naming convention: `"gen_ai.{operation}"` (e.g., `"gen_ai.generate"`)

// --- Operation name values (`gen_ai.operation.name`) ---

/// Single-prompt text generation.
pub const OP_GENERATE: &str = "generate";

/// Installed-model listing.
pub const OP_LIST_MODELS: &str = "list_models";

// --- Provider name values (`gen_ai.provider.name`) ---

/// Ollama provider identifier.
pub const PROVIDER_OLLAMA: &str = "ollama";
