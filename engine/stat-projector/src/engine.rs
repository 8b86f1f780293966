use nba_stats_fetcher::{GameLogQuery, StatsProvider};
use player_registry::{FirstMatch, Player, PlayerRegistry, ResolveError, ResolvePolicy};
use tracing::{info, warn};

use crate::{
    calculator::project_next_game,
    chart::{self, PlotSeries},
    config::ProjectorConfig,
    error::{ProjectionError, Result},
    gamelog::GameLog,
    models::Projection,
    table::RecentGamesTable,
};

/// Everything shown to the user for one resolved player
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionReport {
    pub player: Player,
    pub season: String,
    /// Season type as shown in the heading (e.g., "regular season")
    pub season_type: String,
    /// Configured table and chart length, used in the heading and title
    pub recent_games: usize,
    pub table: RecentGamesTable,
    pub projection: Projection,
    pub series: PlotSeries,
}

impl ProjectionReport {
    /// "Last 10 regular season games for Jayson Tatum (2025-26):"
    pub fn heading(&self) -> String {
        format!(
            "Last {} {} games for {} ({}):",
            self.recent_games,
            self.season_type,
            self.player.full_name,
            self.season
        )
    }

    pub fn chart_title(&self) -> String {
        chart::chart_title(&self.player.full_name, self.recent_games)
    }
}

/// Result of one projection run
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The name matched nobody; nothing was fetched
    PlayerNotFound { query: String },
    Completed(ProjectionReport),
}

/// Resolves a player, reshapes their season and projects the next game
pub struct ProjectionEngine<P: StatsProvider> {
    config: ProjectorConfig,
    registry: PlayerRegistry,
    provider: P,
    policy: Box<dyn ResolvePolicy>,
}

impl<P: StatsProvider> ProjectionEngine<P> {
    pub fn new(config: ProjectorConfig, registry: PlayerRegistry, provider: P) -> Self {
        Self { config, registry, provider, policy: Box::new(FirstMatch) }
    }

    /// Replace the rule that picks one player among several matches
    pub fn with_policy(mut self, policy: Box<dyn ResolvePolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Run the full pipeline for a typed player name
    ///
    /// The game log request is the only network call, made after the name
    /// resolves.
    pub async fn run(&self, name: &str) -> Result<RunOutcome> {
        let player = match self.registry.resolve(name, self.policy.as_ref()) {
            Ok(player) => player,
            Err(ResolveError::PlayerNotFound(query)) => {
                warn!(
                    "No player matching '{}' among {} players",
                    query,
                    self.registry.player_count()
                );
                return Ok(RunOutcome::PlayerNotFound { query });
            }
        };

        let stats = &self.config.fetcher.nba_stats;
        let query = GameLogQuery {
            player_id: player.player_id,
            season: stats.season.clone(),
            season_type: stats.season_type.clone(),
        };
        let rows = self
            .provider
            .player_game_log(&query)
            .await
            .map_err(ProjectionError::Upstream)?;
        info!("Fetched {} game log rows for {}", rows.len(), player.full_name);

        let log = GameLog::from_rows(&rows)?;
        let recent_games = self.config.display.recent_games;
        let table = RecentGamesTable::from_log(&log, recent_games);

        let chronological = log.chronological();
        let projection = project_next_game(&chronological)?;
        let series = PlotSeries::build(&chronological, &projection, recent_games);

        Ok(RunOutcome::Completed(ProjectionReport {
            player,
            season: stats.season.clone(),
            season_type: self.config.fetcher.season_type_display(),
            recent_games,
            table,
            projection,
            series,
        }))
    }
}
