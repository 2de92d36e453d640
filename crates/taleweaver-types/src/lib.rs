//! Shared domain types for Taleweaver.
//!
//! This crate contains the domain types used across the relay: conversation
//! turns, locales, backend request shapes, configuration, and the error
//! taxonomy surfaced to callers.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod character;
pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
