//! Character sheet handlers. Every session gets the same starting adventurer.

use axum::Json;
use axum::extract::Path;

use taleweaver_types::character::CharacterSheet;
use taleweaver_types::chat::DEFAULT_SESSION_ID;

/// GET /api/character
pub async fn default_character() -> Json<CharacterSheet> {
    Json(CharacterSheet::starter(DEFAULT_SESSION_ID))
}

/// GET /api/character/{sessionId}
pub async fn session_character(Path(session_id): Path<String>) -> Json<CharacterSheet> {
    Json(CharacterSheet::starter(session_id))
}
