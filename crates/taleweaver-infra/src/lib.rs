//! Infrastructure layer for Taleweaver.
//!
//! Contains the Ollama implementation of the `ModelBackend` trait defined in
//! `taleweaver-core`, and configuration loading (TOML file, `.env`,
//! environment overrides).

pub mod config;
pub mod llm;
