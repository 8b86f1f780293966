//! NBA Stat Projector
//!
//! Takes a player's season-to-date game log, shows the most recent games as a
//! table, fits a straight-line trend per statistic against game number and
//! extrapolates it one game ahead. The recent games and the projection are
//! also charted to SVG.

pub mod calculator;
pub mod chart;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod gamelog;
pub mod models;
pub mod table;

#[cfg(test)]
mod tests;

pub use calculator::{fit_line, project_next_game, LinearFit};
pub use chart::{render_chart, PlotSeries};
pub use cli::Cli;
pub use config::ProjectorConfig;
pub use engine::{ProjectionEngine, ProjectionReport, RunOutcome};
pub use error::{ProjectionError, Result};
pub use gamelog::{ChronologicalLog, GameLog, GameRecord};
pub use models::*;
pub use table::RecentGamesTable;
