use anyhow::Context;
use nba_stats_fetcher::{FetcherConfig, NbaStatsFetcher};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Jayson Tatum unless another person id is given
    let player_id: i64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().with_context(|| format!("Invalid player id '{arg}'"))?,
        None => 1628369,
    };
    info!("Testing NBA stats fetcher with player {}", player_id);

    // Load configuration
    let config = FetcherConfig::from_env()?;
    let fetcher = NbaStatsFetcher::new(config)?;
    info!("Created fetcher instance");

    // Test fetching the game log
    let query = fetcher.game_log_query(player_id);
    match fetcher.fetch_player_game_log(&query).await {
        Ok(rows) => {
            info!("✅ Successfully fetched {} game log rows", rows.len());

            for (i, row) in rows.iter().take(3).enumerate() {
                info!(
                    "  {}. {} {} - {} pts, {} reb, {} ast",
                    i + 1,
                    row.game_date,
                    row.matchup,
                    row.points,
                    row.rebounds,
                    row.assists
                );
            }
        }
        Err(e) => {
            error!("❌ Failed to fetch game log: {:#}", e);
            return Err(e);
        }
    }

    info!("Test completed!");
    Ok(())
}
