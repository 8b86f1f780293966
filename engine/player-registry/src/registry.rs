use crate::policy::ResolvePolicy;
use crate::types::{DirectoryEntry, Player, PlayerDirectory, ResolveError};
use anyhow::Context;
use deunicode::deunicode;
use std::path::Path;
use tracing::{debug, info};

/// Directory compiled into the binary so resolving a name needs no network
const BUNDLED_DIRECTORY: &str = include_str!("../data/players.json");

/// Lowercase ASCII form of a name ("Nikola Jokić" -> "nikola jokic")
pub fn fold_name(name: &str) -> String {
    deunicode(name.trim()).to_lowercase()
}

/// Player Registry - the NBA player directory in directory order
pub struct PlayerRegistry {
    entries: Vec<DirectoryEntry>,

    /// `fold_name` of each entry, same order as `entries`
    folded_names: Vec<String>,
}

impl PlayerRegistry {
    /// Create a registry from directory entries
    pub fn from_entries(entries: Vec<DirectoryEntry>) -> Self {
        let folded_names = entries.iter().map(|entry| fold_name(&entry.full_name)).collect();
        Self { entries, folded_names }
    }

    /// Parse a directory JSON document
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let directory: PlayerDirectory =
            serde_json::from_str(json).context("Failed to parse player directory JSON")?;
        info!("Loaded {} players from {}", directory.players.len(), directory.source);
        Ok(Self::from_entries(directory.players))
    }

    /// The directory shipped with the crate
    pub fn bundled() -> anyhow::Result<Self> {
        Self::from_json(BUNDLED_DIRECTORY)
    }

    /// Load a directory file written by `refresh-players`
    pub async fn load_from_file<P: AsRef<Path>>(file_path: P) -> anyhow::Result<Self> {
        info!("Loading player directory from: {:?}", file_path.as_ref());

        let json_content = tokio::fs::read_to_string(&file_path)
            .await
            .with_context(|| format!("Failed to read {:?}", file_path.as_ref()))?;
        Self::from_json(&json_content)
    }

    /// Search for players by partial name, ignoring case and accents
    pub fn search_players(&self, query: &str) -> Vec<&DirectoryEntry> {
        let query_folded = fold_name(query);
        if query_folded.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .zip(&self.folded_names)
            .filter(|(_, folded)| folded.contains(&query_folded))
            .map(|(entry, _)| entry)
            .collect()
    }

    /// Resolve a name to exactly one player using the given policy
    pub fn resolve(&self, query: &str, policy: &dyn ResolvePolicy) -> Result<Player, ResolveError> {
        let candidates = self.search_players(query);
        debug!("{} directory candidates for '{}'", candidates.len(), query);

        let chosen = policy
            .choose(query, &candidates)
            .ok_or_else(|| ResolveError::PlayerNotFound(query.trim().to_string()))?;

        let player = Player::from(chosen);
        info!("Resolved '{}' to {} (id {})", query, player.full_name, player.player_id);
        Ok(player)
    }

    /// Get player count
    pub fn player_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
