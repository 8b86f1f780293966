use serde::{Deserialize, Serialize};
use std::fmt;

/// Player directory file (bundled `data/players.json` or a refreshed copy)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDirectory {
    /// Where and when the directory was captured
    pub source: String,

    pub players: Vec<DirectoryEntry>,
}

/// One player in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// NBA person id (e.g., 1628369)
    pub id: i64,

    /// Display name, with diacritics as the league spells it
    pub full_name: String,

    #[serde(default)]
    pub is_active: bool,
}

/// A resolved NBA player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: i64,

    /// Canonical full name (e.g., "Jayson Tatum")
    pub full_name: String,
}

impl From<&DirectoryEntry> for Player {
    fn from(entry: &DirectoryEntry) -> Self {
        Self { player_id: entry.id, full_name: entry.full_name.clone() }
    }
}

/// Errors that can occur while resolving a player name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No directory entry matches the query
    PlayerNotFound(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::PlayerNotFound(name) => {
                write!(f, "Player '{name}' not found in directory")
            }
        }
    }
}

impl std::error::Error for ResolveError {}
