//! Chat orchestration for Taleweaver.
//!
//! `GameMasterService` ties the session store, the prompt composer and the
//! model backend into a single request-scoped exchange.

pub mod service;
