//! In-memory conversation history, scoped per session.

pub mod store;
