use crate::gamelog::{GameLog, GameRecord};
use std::fmt;

/// Column headers of the recent-games table
pub const TABLE_HEADERS: [&str; 12] = [
    "Date", "Matchup", "Min", "Pts", "Reb", "Ast", "FG_PCT", "FGA", "FG3_PCT", "FG3A", "TO",
    "STL/BLK",
];

/// Shown in place of an undefined shooting percentage
pub const MISSING_PCT: &str = "-";

/// Fixed-width text table of the most recent games, newest first
#[derive(Debug, Clone, PartialEq)]
pub struct RecentGamesTable {
    rows: Vec<[String; 12]>,
}

impl RecentGamesTable {
    /// Build the table from up to `limit` most recent games
    pub fn from_log(log: &GameLog, limit: usize) -> Self {
        Self { rows: log.recent(limit).iter().map(display_row).collect() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rendered cells, newest game first
    pub fn rows(&self) -> &[[String; 12]] {
        &self.rows
    }

    fn column_widths(&self) -> [usize; 12] {
        let mut widths = TABLE_HEADERS.map(str::len);
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl fmt::Display for RecentGamesTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        let header: Vec<String> = TABLE_HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| format!("{h:>w$}"))
            .collect();
        write!(f, "{}", header.join("  "))?;

        for row in &self.rows {
            let cells: Vec<String> =
                row.iter().zip(widths).map(|(cell, w)| format!("{cell:>w$}")).collect();
            write!(f, "\n{}", cells.join("  "))?;
        }
        Ok(())
    }
}

fn display_row(game: &GameRecord) -> [String; 12] {
    [
        game.display_date(),
        game.matchup.to_string(),
        format_minutes(game.minutes),
        game.points.to_string(),
        game.rebounds.to_string(),
        game.assists.to_string(),
        format_pct(game.field_goal_pct),
        game.field_goals_attempted.to_string(),
        format_pct(game.three_point_pct),
        game.threes_attempted.to_string(),
        game.turnovers.to_string(),
        game.steals_blocks().to_string(),
    ]
}

fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{minutes:.0}")
    } else {
        format!("{minutes:.1}")
    }
}

fn format_pct(pct: Option<f64>) -> String {
    pct.map_or_else(|| MISSING_PCT.to_string(), |p| format!("{p:.3}"))
}
