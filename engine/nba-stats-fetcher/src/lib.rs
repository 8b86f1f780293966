//! NBA Stats Fetcher
//!
//! Client for two stats.nba.com endpoints: a player's season game log
//! (`playergamelog`), which the projector fetches once per run, and the player
//! directory (`commonallplayers`), used to regenerate the bundled registry
//! file. Both return the same tabular `resultSets` envelope.

pub mod config;
pub mod fetcher;
pub mod models;
pub mod provider;

pub use config::FetcherConfig;
pub use fetcher::NbaStatsFetcher;
pub use models::*;
pub use provider::{GameLogQuery, StatsProvider};
