//! Model backend abstractions for Taleweaver.
//!
//! - `ModelBackend`: RPITIT trait for concrete backend implementations
//! - `BoxModelBackend`: Object-safe wrapper for dynamic dispatch

pub mod backend;
pub mod box_backend;
