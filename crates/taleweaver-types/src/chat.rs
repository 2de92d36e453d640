//! Conversation turn, locale, and chat reply types for Taleweaver.
//!
//! A session's history is an ordered list of [`Turn`]s. The [`Locale`]
//! selects which Game Master persona frames the prompt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Session identifier used when the caller does not supply one.
pub const DEFAULT_SESSION_ID: &str = "default";

/// One exchange between the player and the Game Master.
///
/// Immutable once created. Serialized as `{ "player": ..., "ai": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub player: String,
    pub ai: String,
}

impl Turn {
    pub fn new(player: impl Into<String>, ai: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            ai: ai.into(),
        }
    }
}

/// Supported persona locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Fr => write!(f, "fr"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(format!("Unsupported language: {other}")),
        }
    }
}

/// Successful result of a chat exchange, returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    pub timestamp: DateTime<Utc>,
    pub session_id: String,
}
