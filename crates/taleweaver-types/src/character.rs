//! Character sheet shown next to the chat.
//!
//! There is no character persistence: every session receives the same
//! starting adventurer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    pub name: String,
    pub level: u32,
    pub hit_points: HitPoints,
    pub stats: AbilityScores,
    pub inventory: Vec<InventoryItem>,
    pub quests: Vec<Quest>,
    pub session_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    pub current: u32,
    pub maximum: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable,
    Currency,
    Quest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    pub emoji: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: u32,
    pub name: String,
    pub status: QuestStatus,
    pub emoji: String,
}

fn item(id: u32, name: &str, kind: ItemKind, quantity: Option<u32>, emoji: &str) -> InventoryItem {
    InventoryItem {
        id,
        name: name.to_string(),
        kind,
        quantity,
        emoji: emoji.to_string(),
    }
}

fn quest(id: u32, name: &str, status: QuestStatus, emoji: &str) -> Quest {
    Quest {
        id,
        name: name.to_string(),
        status,
        emoji: emoji.to_string(),
    }
}

impl CharacterSheet {
    /// The starting adventurer, tagged with the requesting session.
    pub fn starter(session_id: impl Into<String>) -> Self {
        Self {
            name: "Adventurer".to_string(),
            level: 1,
            hit_points: HitPoints {
                current: 28,
                maximum: 35,
            },
            stats: AbilityScores {
                strength: 14,
                dexterity: 16,
                constitution: 13,
                intelligence: 15,
                wisdom: 12,
                charisma: 11,
            },
            inventory: vec![
                item(1, "Longsword", ItemKind::Weapon, None, "⚔️"),
                item(2, "Wooden shield", ItemKind::Armor, None, "🛡️"),
                item(3, "Healing potion", ItemKind::Consumable, Some(3), "🧪"),
                item(4, "Gold coins", ItemKind::Currency, Some(50), "💰"),
                item(5, "Mysterious key", ItemKind::Quest, None, "🗝️"),
            ],
            quests: vec![
                quest(1, "Explore the cursed dungeon", QuestStatus::Active, "🎯"),
                quest(2, "Find the mysterious key", QuestStatus::Completed, "✅"),
            ],
            session_id: session_id.into(),
        }
    }
}
