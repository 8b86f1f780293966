use crate::error::Result;
use config::{Config, Environment, File};
use nba_stats_fetcher::FetcherConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file, read from the working directory if present
pub const DEFAULT_CONFIG_FILE: &str = "nba-projection.toml";

/// Prefix for environment overrides (e.g., NBA_PROJECTION__FETCHER__NBA_STATS__SEASON)
pub const ENV_PREFIX: &str = "NBA_PROJECTION";

/// Configuration for the stat projector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectorConfig {
    /// Upstream stats API configuration
    pub fetcher: FetcherConfig,

    /// Player directory source
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Recent-games table configuration
    pub display: DisplayConfig,

    /// Chart output configuration
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Directory file from `refresh-players`; the bundled copy when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of most recent games shown in the table and chart
    pub recent_games: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Where the SVG chart is written
    pub output_path: PathBuf,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Open the written chart in the system viewer
    pub open_viewer: bool,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            fetcher: FetcherConfig::default(),
            registry: RegistryConfig::default(),
            display: DisplayConfig { recent_games: 10 },
            chart: ChartConfig {
                output_path: PathBuf::from("player_projection.svg"),
                width: 1000,
                height: 600,
                open_viewer: true,
            },
        }
    }
}

impl ProjectorConfig {
    /// Load defaults, then the optional config file, then environment overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file = config_file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(file).required(config_file.is_some()))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Season label used for the game log
    pub fn season(&self) -> &str {
        &self.fetcher.nba_stats.season
    }
}
