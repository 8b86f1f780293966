use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Configuration for the NBA stats fetcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// stats.nba.com API configuration
    pub nba_stats: NbaStatsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NbaStatsConfig {
    /// Base URL of the stats API (no trailing slash)
    pub base_url: String,

    /// Season label (e.g., "2025-26")
    pub season: String,

    /// Season type filter sent to the game log endpoint
    pub season_type: String,

    /// League identifier ("00" = NBA)
    pub league_id: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// Referer/Origin sent with every request
    pub referer: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            nba_stats: NbaStatsConfig {
                base_url: "https://stats.nba.com/stats".to_string(),
                season: "2025-26".to_string(),
                season_type: "Regular Season".to_string(),
                league_id: "00".to_string(),
                timeout_secs: 30,
                user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
                referer: "https://www.nba.com".to_string(),
            },
        }
    }
}

impl FetcherConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("NBA_STATS_BASE_URL") {
            config.nba_stats.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(season) = std::env::var("NBA_STATS_SEASON") {
            config.nba_stats.season = season;
        }

        if let Ok(timeout) = std::env::var("NBA_STATS_TIMEOUT_SECS") {
            config.nba_stats.timeout_secs = timeout
                .parse()
                .with_context(|| format!("Invalid NBA_STATS_TIMEOUT_SECS '{timeout}'"))?;
        }

        Ok(config)
    }

    /// Full URL for a stats endpoint (e.g., "playergamelog")
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.nba_stats.base_url.trim_end_matches('/'), endpoint)
    }

    /// Season type as shown to users (e.g., "regular season")
    pub fn season_type_display(&self) -> String {
        self.nba_stats.season_type.to_lowercase()
    }
}
