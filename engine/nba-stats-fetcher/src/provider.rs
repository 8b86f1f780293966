use crate::models::RawGameRow;
use anyhow::Result;
use async_trait::async_trait;

/// Parameters of a single game log request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLogQuery {
    pub player_id: i64,
    /// Season label (e.g., "2025-26")
    pub season: String,
    /// Season type filter (e.g., "Regular Season")
    pub season_type: String,
}

/// Source of game log data
///
/// The HTTP client implements this for stats.nba.com; tests substitute an
/// in-memory provider.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Every boxscore row available for the query, in source order
    async fn player_game_log(&self, query: &GameLogQuery) -> Result<Vec<RawGameRow>>;
}
