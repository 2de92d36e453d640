//! HTTP request handlers, one module per resource.

pub mod character;
pub mod chat;
pub mod conversation;
pub mod health;
