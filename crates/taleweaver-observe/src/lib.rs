//! Observability for Taleweaver: tracing subscriber setup and the GenAI
//! semantic-convention names used on backend spans.

pub mod genai_attrs;
pub mod tracing_setup;
