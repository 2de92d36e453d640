//! Prompt assembly for the model backend.
//!
//! - `persona`: the locale-keyed Game Master preambles
//! - `composer`: pure prompt construction and reply extraction

pub mod composer;
pub mod persona;

pub use composer::{build_prompt, extract_reply};
pub use persona::persona_template;
