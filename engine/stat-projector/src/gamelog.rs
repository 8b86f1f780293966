//! Game log reshaping: raw boxscore rows into typed, ordered game records.
//!
//! [`GameLog`] keeps games newest first for display. [`ChronologicalLog`] is
//! its exact reverse with 1-based game numbers, for the trend fit and chart.

use crate::error::{ProjectionError, Result};
use crate::models::TrackedStat;
use chrono::NaiveDate;
use nba_stats_fetcher::RawGameRow;
use std::fmt;
use thiserror::Error;

/// Upstream date format, e.g. "Jan 05, 2026" or "JAN 05, 2026"
pub const GAME_DATE_FORMAT: &str = "%b %d, %Y";

/// Display date format
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d";

/// Why a single field of a row could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("date '{0}' does not match format {GAME_DATE_FORMAT}")]
    Date(String),

    #[error("matchup '{0}' has fewer than two tokens")]
    TooFewTokens(String),

    #[error("unknown venue marker '{marker}' in matchup '{raw}'")]
    UnknownVenue { marker: String, raw: String },
}

/// Home or away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    /// Marker used in matchup strings
    pub fn marker(self) -> &'static str {
        match self {
            Venue::Home => "vs.",
            Venue::Away => "@",
        }
    }

    fn from_marker(token: &str) -> Option<Self> {
        match token {
            "@" => Some(Venue::Away),
            "vs." | "vs" => Some(Venue::Home),
            _ => None,
        }
    }
}

/// Decomposed matchup: venue plus opponent team code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub venue: Venue,
    pub opponent: String,
}

impl Matchup {
    /// Parse a raw ("BOS @ LAL") or normalized ("@ LAL") matchup string
    pub fn parse(raw: &str) -> std::result::Result<Self, FieldError> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(FieldError::TooFewTokens(raw.to_string()));
        }

        // Raw strings lead with the player's own team; normalized ones do not
        let marker = if tokens.len() == 2 { tokens[0] } else { tokens[1] };
        let venue = Venue::from_marker(marker).ok_or_else(|| FieldError::UnknownVenue {
            marker: marker.to_string(),
            raw: raw.to_string(),
        })?;

        Ok(Self { venue, opponent: tokens[tokens.len() - 1].to_string() })
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.venue.marker(), self.opponent)
    }
}

/// Parse an upstream game date
pub fn parse_game_date(text: &str) -> std::result::Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(text.trim(), GAME_DATE_FORMAT)
        .map_err(|_| FieldError::Date(text.to_string()))
}

/// One played game
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub game_id: Option<String>,
    pub date: NaiveDate,
    pub matchup: Matchup,
    pub minutes: f64,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub field_goals_attempted: u32,
    pub field_goal_pct: Option<f64>,
    pub threes_attempted: u32,
    pub three_point_pct: Option<f64>,
    pub turnovers: u32,
    pub steals: u32,
    pub blocks: u32,
}

impl GameRecord {
    /// Convert a raw upstream row
    pub fn from_raw(row: &RawGameRow) -> std::result::Result<Self, FieldError> {
        Ok(Self {
            game_id: row.game_id.clone(),
            date: parse_game_date(&row.game_date)?,
            matchup: Matchup::parse(&row.matchup)?,
            minutes: row.minutes,
            points: row.points,
            rebounds: row.rebounds,
            assists: row.assists,
            field_goals_attempted: row.field_goals_attempted,
            field_goal_pct: row.field_goal_pct,
            threes_attempted: row.threes_attempted,
            three_point_pct: row.three_point_pct,
            turnovers: row.turnovers,
            steals: row.steals,
            blocks: row.blocks,
        })
    }

    /// Combined steals and blocks
    pub fn steals_blocks(&self) -> u32 {
        self.steals + self.blocks
    }

    /// Date as "MM/DD"
    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// Season game log, newest game first
#[derive(Debug, Clone, PartialEq)]
pub struct GameLog {
    newest_first: Vec<GameRecord>,
}

impl GameLog {
    /// Parse and order raw rows; any unparseable row fails the whole log
    pub fn from_rows(rows: &[RawGameRow]) -> Result<Self> {
        let mut records = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                GameRecord::from_raw(row).map_err(|e| ProjectionError::malformed(index, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        // Stable sort: same-day games keep fetch order
        records.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(Self { newest_first: records })
    }

    /// All games, newest first
    pub fn newest_first(&self) -> &[GameRecord] {
        &self.newest_first
    }

    /// Up to `limit` most recent games, newest first
    pub fn recent(&self, limit: usize) -> &[GameRecord] {
        &self.newest_first[..limit.min(self.newest_first.len())]
    }

    pub fn len(&self) -> usize {
        self.newest_first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.newest_first.is_empty()
    }

    /// Oldest-first view with 1-based game numbers
    pub fn chronological(&self) -> ChronologicalLog {
        let games = self
            .newest_first
            .iter()
            .rev()
            .enumerate()
            .map(|(i, record)| IndexedGame { game_number: i + 1, record: record.clone() })
            .collect();

        ChronologicalLog { games }
    }
}

/// A game with its position in the season
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedGame {
    pub game_number: usize,
    pub record: GameRecord,
}

/// Season game log, oldest game first
#[derive(Debug, Clone, PartialEq)]
pub struct ChronologicalLog {
    games: Vec<IndexedGame>,
}

impl ChronologicalLog {
    pub fn games(&self) -> &[IndexedGame] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Up to `limit` most recent games, oldest first
    pub fn last(&self, limit: usize) -> &[IndexedGame] {
        &self.games[self.games.len().saturating_sub(limit)..]
    }

    /// Game number of the next, unplayed game
    pub fn next_game_number(&self) -> usize {
        self.games.last().map_or(1, |game| game.game_number + 1)
    }

    /// Game numbers as regression inputs
    pub fn game_numbers(&self) -> Vec<f64> {
        self.games.iter().map(|game| game.game_number as f64).collect()
    }

    /// One statistic across the season, oldest first
    pub fn stat_series(&self, stat: TrackedStat) -> Vec<f64> {
        self.games.iter().map(|game| stat.value_of(&game.record)).collect()
    }
}
