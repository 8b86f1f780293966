use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// stats.nba.com response envelope
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StatsResponse {
    #[serde(rename = "resource", default)]
    pub resource: Option<String>,

    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

/// One named table inside a stats response
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ResultSet {
    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "headers")]
    pub headers: Vec<String>,

    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<serde_json::Value>>,
}

/// Player directory entry (`commonallplayers`)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DirectoryEntry {
    #[serde(rename = "PERSON_ID")]
    pub person_id: i64,

    #[serde(rename = "DISPLAY_FIRST_LAST")]
    pub display_first_last: String,

    #[serde(rename = "TEAM_ABBREVIATION")]
    pub team_abbreviation: Option<String>,
}

/// One boxscore row from `playergamelog`, exactly as the API reports it
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawGameRow {
    #[serde(rename = "Game_ID")]
    pub game_id: Option<String>,

    #[serde(rename = "GAME_DATE")]
    pub game_date: String,

    #[serde(rename = "MATCHUP")]
    pub matchup: String,

    #[serde(rename = "MIN")]
    pub minutes: f64,

    #[serde(rename = "PTS")]
    pub points: u32,

    #[serde(rename = "REB")]
    pub rebounds: u32,

    #[serde(rename = "AST")]
    pub assists: u32,

    #[serde(rename = "FGM")]
    pub field_goals_made: u32,

    #[serde(rename = "FGA")]
    pub field_goals_attempted: u32,

    #[serde(rename = "FG_PCT")]
    pub field_goal_pct: Option<f64>,

    #[serde(rename = "FG3M")]
    pub threes_made: u32,

    #[serde(rename = "FG3A")]
    pub threes_attempted: u32,

    #[serde(rename = "FG3_PCT")]
    pub three_point_pct: Option<f64>,

    #[serde(rename = "TOV")]
    pub turnovers: u32,

    #[serde(rename = "STL")]
    pub steals: u32,

    #[serde(rename = "BLK")]
    pub blocks: u32,
}

impl StatsResponse {
    /// Find a result set by name
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|set| set.name == name)
            .with_context(|| format!("Result set '{name}' missing from response"))
    }
}

impl ResultSet {
    /// Decode every row into `T`, matching columns by header name
    pub fn rows<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.row_set
            .iter()
            .enumerate()
            .map(|(index, row)| {
                if row.len() != self.headers.len() {
                    anyhow::bail!(
                        "Row {} of '{}' has {} values for {} headers",
                        index,
                        self.name,
                        row.len(),
                        self.headers.len()
                    );
                }

                let object: serde_json::Map<String, serde_json::Value> =
                    self.headers.iter().cloned().zip(row.iter().cloned()).collect();

                serde_json::from_value(serde_json::Value::Object(object))
                    .with_context(|| format!("Malformed row {} of '{}'", index, self.name))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn game_log_response() -> StatsResponse {
        serde_json::from_value(json!({
            "resource": "playergamelog",
            "resultSets": [{
                "name": "PlayerGameLog",
                "headers": [
                    "SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP", "WL", "MIN",
                    "FGM", "FGA", "FG_PCT", "FG3M", "FG3A", "FG3_PCT", "FTM", "FTA", "FT_PCT",
                    "OREB", "DREB", "REB", "AST", "STL", "BLK", "TOV", "PF", "PTS", "PLUS_MINUS",
                    "VIDEO_AVAILABLE"
                ],
                "rowSet": [
                    ["22025", 1628369, "0022500601", "JAN 05, 2026", "BOS @ LAL", "W", 37,
                     10, 21, 0.476, 3, 9, 0.333, 5, 6, 0.833,
                     1, 7, 8, 6, 1, 2, 3, 2, 28, 11, 1],
                    ["22025", 1628369, "0022500588", "JAN 03, 2026", "BOS vs. NYK", "L", 35,
                     0, 0, null, 0, 0, null, 4, 4, 1.0,
                     0, 5, 5, 4, 0, 0, 2, 3, 4, -6, 1]
                ]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_game_log_rows() {
        let response = game_log_response();
        let rows: Vec<RawGameRow> = response.result_set("PlayerGameLog").unwrap().rows().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].game_date, "JAN 05, 2026");
        assert_eq!(rows[0].matchup, "BOS @ LAL");
        assert_eq!(rows[0].points, 28);
        assert_eq!(rows[0].steals + rows[0].blocks, 3);
        assert_eq!(rows[0].field_goal_pct, Some(0.476));
        assert_eq!(rows[1].field_goal_pct, None);
        assert_eq!(rows[1].three_point_pct, None);
    }

    #[test]
    fn test_decode_ignores_column_order() {
        let set = ResultSet {
            name: "CommonAllPlayers".to_string(),
            headers: vec![
                "DISPLAY_FIRST_LAST".to_string(),
                "ROSTERSTATUS".to_string(),
                "PERSON_ID".to_string(),
            ],
            row_set: vec![vec![json!("Jayson Tatum"), json!(1), json!(1628369)]],
        };

        let entries: Vec<DirectoryEntry> = set.rows().unwrap();
        assert_eq!(entries[0].person_id, 1628369);
        assert_eq!(entries[0].display_first_last, "Jayson Tatum");
        assert_eq!(entries[0].team_abbreviation, None);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let set = ResultSet {
            name: "PlayerGameLog".to_string(),
            headers: vec!["GAME_DATE".to_string(), "MATCHUP".to_string()],
            row_set: vec![vec![json!("JAN 05, 2026"), json!("BOS @ LAL")]],
        };

        let err = set.rows::<RawGameRow>().unwrap_err();
        assert!(err.to_string().contains("Malformed row 0"));
    }

    #[test]
    fn test_missing_result_set() {
        let response = game_log_response();
        assert!(response.result_set("CommonAllPlayers").is_err());
    }
}
