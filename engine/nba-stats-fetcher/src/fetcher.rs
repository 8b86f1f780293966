use crate::config::FetcherConfig;
use crate::models::*;
use crate::provider::{GameLogQuery, StatsProvider};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER};
use reqwest::Client;
use std::time::Duration as StdDuration;
use tracing::{debug, info};

const PLAYER_DIRECTORY_ENDPOINT: &str = "commonallplayers";
const PLAYER_DIRECTORY_SET: &str = "CommonAllPlayers";
const GAME_LOG_ENDPOINT: &str = "playergamelog";
const GAME_LOG_SET: &str = "PlayerGameLog";

/// HTTP client for stats.nba.com
pub struct NbaStatsFetcher {
    config: FetcherConfig,
    client: Client,
}

impl NbaStatsFetcher {
    /// Create a new fetcher instance
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(config.nba_stats.timeout_secs))
            .user_agent(config.nba_stats.user_agent.clone())
            .default_headers(Self::default_headers(&config)?)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    /// Headers stats.nba.com expects from a browser session
    fn default_headers(config: &FetcherConfig) -> Result<HeaderMap> {
        let referer = format!("{}/", config.nba_stats.referer.trim_end_matches('/'));

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(
            ORIGIN,
            HeaderValue::from_str(config.nba_stats.referer.trim_end_matches('/'))
                .context("Invalid origin header")?,
        );
        headers.insert(REFERER, HeaderValue::from_str(&referer).context("Invalid referer header")?);
        Ok(headers)
    }

    /// Issue one GET against a stats endpoint and decode the envelope
    async fn get_result_sets(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<StatsResponse> {
        let url = self.config.endpoint_url(endpoint);
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {endpoint}"))?;

        if !response.status().is_success() {
            anyhow::bail!("API request to {} failed with status: {}", endpoint, response.status());
        }

        response
            .json::<StatsResponse>()
            .await
            .with_context(|| format!("Failed to parse {endpoint} JSON"))
    }

    /// Fetch the full player directory for the configured season
    ///
    /// Only `refresh-players` calls this; name resolution uses the bundled copy.
    pub async fn fetch_player_directory(&self) -> Result<Vec<DirectoryEntry>> {
        let stats = &self.config.nba_stats;
        info!("Fetching player directory for season {}", stats.season);

        let response = self
            .get_result_sets(
                PLAYER_DIRECTORY_ENDPOINT,
                &[
                    ("LeagueID", stats.league_id.as_str()),
                    ("Season", stats.season.as_str()),
                    ("IsOnlyCurrentSeason", "0"),
                ],
            )
            .await?;

        let entries: Vec<DirectoryEntry> = response.result_set(PLAYER_DIRECTORY_SET)?.rows()?;

        info!("Successfully fetched {} directory entries", entries.len());
        Ok(entries)
    }

    /// Fetch every game log row for one player and season
    pub async fn fetch_player_game_log(&self, query: &GameLogQuery) -> Result<Vec<RawGameRow>> {
        info!(
            "Fetching {} game log for player {} ({})",
            query.season_type, query.player_id, query.season
        );

        let player_id = query.player_id.to_string();
        let response = self
            .get_result_sets(
                GAME_LOG_ENDPOINT,
                &[
                    ("PlayerID", player_id.as_str()),
                    ("Season", query.season.as_str()),
                    ("SeasonType", query.season_type.as_str()),
                    ("LeagueID", ""),
                    ("DateFrom", ""),
                    ("DateTo", ""),
                ],
            )
            .await?;

        let rows: Vec<RawGameRow> = response.result_set(GAME_LOG_SET)?.rows()?;

        info!("Successfully fetched {} game log rows for player {}", rows.len(), query.player_id);
        Ok(rows)
    }

    /// Build the game log query for a player using the configured season
    pub fn game_log_query(&self, player_id: i64) -> GameLogQuery {
        GameLogQuery {
            player_id,
            season: self.config.nba_stats.season.clone(),
            season_type: self.config.nba_stats.season_type.clone(),
        }
    }

    /// Get the configured season label
    pub fn season(&self) -> &str {
        &self.config.nba_stats.season
    }
}

#[async_trait]
impl StatsProvider for NbaStatsFetcher {
    async fn player_game_log(&self, query: &GameLogQuery) -> Result<Vec<RawGameRow>> {
        self.fetch_player_game_log(query).await
    }
}
