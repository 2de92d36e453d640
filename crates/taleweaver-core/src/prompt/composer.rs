//! Prompt composition and reply extraction.
//!
//! Both functions are pure: no clock, no randomness, no I/O. The backend
//! call is the only non-deterministic step of an exchange, so everything
//! around it stays reproducible.

use serde_json::Value;

use taleweaver_types::chat::Turn;
use taleweaver_types::error::ChatError;

const TRANSCRIPT_HEADER: &str = "\n\nPrevious conversation:\n";
const CURRENT_ACTION_MARKER: &str = "\n\nCurrent action:\n";

/// Build the exact text submitted to the backend.
///
/// Layout: `persona`, then (only when `history` is non-empty) a transcript of
/// `Player:`/`GM:` pairs followed by a current-action marker, then `input`.
pub fn build_prompt(persona: &str, history: &[Turn], input: &str) -> String {
    let mut prompt = String::with_capacity(persona.len() + input.len() + history.len() * 128);
    prompt.push_str(persona);

    if !history.is_empty() {
        prompt.push_str(TRANSCRIPT_HEADER);
        let transcript = history
            .iter()
            .map(|turn| format!("Player: {}\nGM: {}", turn.player, turn.ai))
            .collect::<Vec<_>>()
            .join("\n");
        prompt.push_str(&transcript);
        prompt.push_str(CURRENT_ACTION_MARKER);
    }

    prompt.push_str(input);
    prompt
}

/// Pull the generated text out of a raw backend body.
///
/// # Errors
///
/// [`ChatError::MalformedBackendResponse`] if `response` is missing or not a string.
pub fn extract_reply(raw: &Value) -> Result<String, ChatError> {
    raw.get("response")
        .and_then(Value::as_str)
        .map(|text| text.trim().to_string())
        .ok_or(ChatError::MalformedBackendResponse)
}
