//! HTTP layer for Taleweaver.
//!
//! Axum routes under `/api/` with flat JSON bodies, permissive CORS and an
//! optional static frontend.

pub mod error;
pub mod handlers;
pub mod router;
