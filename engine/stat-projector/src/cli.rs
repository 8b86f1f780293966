//! # Command Line Interface
//!
//! Flags for the interactive projection binary. Anything set here wins over
//! the config file and environment.

use crate::config::ProjectorConfig;
use crate::error::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Recent games and next-game projection for an NBA player
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "nba-projection")]
#[command(about = "Show a player's last 10 games and project the next one")]
pub struct Cli {
    /// Player name; prompts on stdin when omitted
    #[arg(short, long)]
    pub player: Option<String>,

    /// Season label (e.g., 2024-25)
    #[arg(short, long)]
    pub season: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the SVG chart
    #[arg(long)]
    pub chart_path: Option<PathBuf>,

    /// Write the SVG chart without opening a viewer
    #[arg(long)]
    pub save_only: bool,

    /// Skip chart rendering
    #[arg(long)]
    pub no_chart: bool,

    /// Player directory file written by refresh-players
    #[arg(long)]
    pub players_file: Option<PathBuf>,
}

impl Cli {
    /// Apply flag overrides on top of a loaded config
    pub fn apply(&self, config: &mut ProjectorConfig) {
        if let Some(season) = &self.season {
            config.fetcher.nba_stats.season = season.clone();
        }
        if let Some(path) = &self.chart_path {
            config.chart.output_path = path.clone();
        }
        if self.save_only {
            config.chart.open_viewer = false;
        }
        if let Some(path) = &self.players_file {
            config.registry.directory_file = Some(path.clone());
        }
    }
}

/// Print `prompt` and read one trimmed line
pub fn prompt_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
