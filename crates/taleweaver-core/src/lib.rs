//! Business logic for Taleweaver.
//!
//! Session history, prompt composition, and chat orchestration. The model
//! backend is reached only through the `ModelBackend` trait defined here;
//! this crate never depends on `taleweaver-infra` or any HTTP client.

pub mod chat;
pub mod llm;
pub mod prompt;
pub mod session;
