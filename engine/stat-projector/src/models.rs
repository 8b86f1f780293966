use crate::gamelog::GameRecord;

/// Statistics the projector fits a trend for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrackedStat {
    Minutes,
    Points,
    Rebounds,
    Assists,
    StealsBlocks,
}

impl TrackedStat {
    /// All tracked statistics, in summary order
    pub const ALL: [TrackedStat; 5] = [
        TrackedStat::Minutes,
        TrackedStat::Points,
        TrackedStat::Rebounds,
        TrackedStat::Assists,
        TrackedStat::StealsBlocks,
    ];

    /// Boxscore column name (e.g., "PTS")
    pub fn key(self) -> &'static str {
        match self {
            TrackedStat::Minutes => "MIN",
            TrackedStat::Points => "PTS",
            TrackedStat::Rebounds => "REB",
            TrackedStat::Assists => "AST",
            TrackedStat::StealsBlocks => "STL/BLK",
        }
    }

    /// Human-readable label used in the summary line
    pub fn label(self) -> &'static str {
        match self {
            TrackedStat::Minutes => "Minutes",
            TrackedStat::Points => "Points",
            TrackedStat::Rebounds => "Rebounds",
            TrackedStat::Assists => "Assists",
            TrackedStat::StealsBlocks => "STL/BLK",
        }
    }

    /// This statistic's value for one game
    pub fn value_of(self, record: &GameRecord) -> f64 {
        match self {
            TrackedStat::Minutes => record.minutes,
            TrackedStat::Points => record.points as f64,
            TrackedStat::Rebounds => record.rebounds as f64,
            TrackedStat::Assists => record.assists as f64,
            TrackedStat::StealsBlocks => record.steals_blocks() as f64,
        }
    }
}

/// Projected next-game stat line, each value rounded to one decimal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub minutes: f64,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals_blocks: f64,
}

impl Projection {
    /// Projected value for one statistic
    pub fn get(&self, stat: TrackedStat) -> f64 {
        match stat {
            TrackedStat::Minutes => self.minutes,
            TrackedStat::Points => self.points,
            TrackedStat::Rebounds => self.rebounds,
            TrackedStat::Assists => self.assists,
            TrackedStat::StealsBlocks => self.steals_blocks,
        }
    }

    /// (statistic, value) pairs in summary order
    pub fn iter(&self) -> impl Iterator<Item = (TrackedStat, f64)> + '_ {
        TrackedStat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// "Minutes: 34.2 | Points: 27.1 | ..."
    pub fn summary_line(&self) -> String {
        self.iter()
            .map(|(stat, value)| format!("{}: {:.1}", stat.label(), value))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line_format() {
        let projection = Projection {
            minutes: 36.0,
            points: 27.4,
            rebounds: 8.1,
            assists: 4.9,
            steals_blocks: 1.5,
        };

        assert_eq!(
            projection.summary_line(),
            "Minutes: 36.0 | Points: 27.4 | Rebounds: 8.1 | Assists: 4.9 | STL/BLK: 1.5"
        );
    }

    #[test]
    fn test_iter_covers_every_stat() {
        let projection = Projection {
            minutes: 1.0,
            points: 2.0,
            rebounds: 3.0,
            assists: 4.0,
            steals_blocks: 5.0,
        };

        let keys: Vec<&str> = projection.iter().map(|(stat, _)| stat.key()).collect();
        assert_eq!(keys, vec!["MIN", "PTS", "REB", "AST", "STL/BLK"]);
        assert_eq!(projection.get(TrackedStat::Rebounds), 3.0);
    }
}
