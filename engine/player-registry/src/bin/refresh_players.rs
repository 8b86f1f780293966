use nba_stats_fetcher::{FetcherConfig, NbaStatsFetcher};
use player_registry::{DirectoryEntry, PlayerDirectory, PlayerRegistry};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let output = std::env::args().nth(1).unwrap_or_else(|| "data/players.json".to_string());

    // Load configuration
    let config = FetcherConfig::from_env()?;
    let season = config.nba_stats.season.clone();
    let fetcher = NbaStatsFetcher::new(config)?;
    info!("Refreshing player directory for season {}", season);

    let entries = match fetcher.fetch_player_directory().await {
        Ok(entries) => entries,
        Err(e) => {
            error!("❌ Failed to fetch player directory: {:#}", e);
            return Err(e);
        }
    };

    let players: Vec<DirectoryEntry> = entries
        .into_iter()
        .map(|entry| DirectoryEntry {
            id: entry.person_id,
            full_name: entry.display_first_last,
            is_active: entry.team_abbreviation.is_some_and(|team| !team.trim().is_empty()),
        })
        .collect();

    let directory = PlayerDirectory {
        source: format!("stats.nba.com commonallplayers, season {season}"),
        players,
    };
    let json = serde_json::to_string_pretty(&directory)?;

    // Round-trip through the registry before replacing the file
    let registry = PlayerRegistry::from_json(&json)?;
    tokio::fs::write(&output, json).await?;

    info!("✅ Wrote {} players to {}", registry.player_count(), output);
    Ok(())
}
