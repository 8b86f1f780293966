//! Pipeline tests for ProjectionEngine driven by an in-memory provider

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nba_stats_fetcher::{GameLogQuery, RawGameRow, StatsProvider};
use player_registry::{DirectoryEntry, Player, PlayerRegistry, ResolvePolicy};

use crate::gamelog::tests::raw_row;
use crate::{ProjectionEngine, ProjectionError, ProjectorConfig, RunOutcome};

/// Counts every request; the game log is the only thing a provider serves
struct MockProvider {
    rows: Vec<RawGameRow>,
    fail_game_log: bool,
    calls: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<GameLogQuery>>>,
}

impl MockProvider {
    fn new(rows: Vec<RawGameRow>) -> Self {
        Self {
            rows,
            fail_game_log: false,
            calls: Arc::new(AtomicUsize::new(0)),
            last_query: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl StatsProvider for MockProvider {
    async fn player_game_log(&self, query: &GameLogQuery) -> anyhow::Result<Vec<RawGameRow>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        if self.fail_game_log {
            anyhow::bail!("NBA stats API returned status: 503 Service Unavailable");
        }
        Ok(self.rows.clone())
    }
}

struct LastMatch;

impl ResolvePolicy for LastMatch {
    fn choose<'a>(
        &self,
        _query: &str,
        candidates: &[&'a DirectoryEntry],
    ) -> Option<&'a DirectoryEntry> {
        candidates.last().copied()
    }
}

fn test_registry() -> PlayerRegistry {
    let entry = |id: i64, name: &str| DirectoryEntry {
        id,
        full_name: name.to_string(),
        is_active: true,
    };
    PlayerRegistry::from_entries(vec![
        entry(1628369, "Jayson Tatum"),
        entry(1627759, "Jaylen Brown"),
        entry(203999, "Nikola Jokić"),
        entry(203507, "Giannis Antetokounmpo"),
    ])
}

fn engine_with(provider: MockProvider) -> ProjectionEngine<MockProvider> {
    ProjectionEngine::new(ProjectorConfig::default(), test_registry(), provider)
}

/// Twelve games, points rising by one per game, in upstream (newest first) order
fn season_rows() -> Vec<RawGameRow> {
    let mut rows: Vec<RawGameRow> = (1..=12)
        .map(|day| {
            let matchup = if day % 2 == 0 { "BOS @ LAL" } else { "BOS vs. NYK" };
            raw_row(&format!("Jan {day:02}, 2026"), matchup, 10 + day)
        })
        .collect();
    rows.reverse();
    rows
}

#[tokio::test]
async fn test_full_pipeline_for_known_player() {
    let provider = MockProvider::new(season_rows());
    let last_query = provider.last_query.clone();
    let calls = provider.calls.clone();
    let engine = engine_with(provider);

    let report = match engine.run("Jayson Tatum").await.unwrap() {
        RunOutcome::Completed(report) => report,
        other => panic!("expected a report, got {other:?}"),
    };

    assert_eq!(report.player, Player { player_id: 1628369, full_name: "Jayson Tatum".to_string() });
    assert_eq!(report.heading(), "Last 10 regular season games for Jayson Tatum (2025-26):");
    assert_eq!(report.chart_title(), "Jayson Tatum - Last 10 Games + Predicted Stats");

    // Exactly one request per run
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let query = last_query.lock().unwrap().clone().unwrap();
    assert_eq!(query.player_id, 1628369);
    assert_eq!(query.season, "2025-26");
    assert_eq!(query.season_type, "Regular Season");

    // Ten rows, newest first, dates as MM/DD
    assert_eq!(report.table.len(), 10);
    let dates: Vec<&str> = report.table.rows().iter().map(|row| row[0].as_str()).collect();
    assert_eq!(dates[0], "01/12");
    assert_eq!(dates[9], "01/03");
    assert!(dates.iter().all(|d| d.len() == 5 && &d[2..3] == "/"));

    // Points rise by one per game, so game 13 projects to 23
    assert_eq!(report.projection.points, 23.0);
    assert_eq!(report.projection.minutes, 34.0);
    assert_eq!(
        report.projection.summary_line(),
        "Minutes: 34.0 | Points: 23.0 | Rebounds: 8.0 | Assists: 5.0 | STL/BLK: 2.0"
    );

    // Chart covers the same ten games oldest first, then the projection
    let labels = report.series.labels();
    assert_eq!(labels.len(), 11);
    assert_eq!(labels[0], "01/03 vs. NYK");
    assert_eq!(labels[10], "Next Game");
}

#[tokio::test]
async fn test_unknown_player_makes_no_request() {
    let provider = MockProvider::new(season_rows());
    let calls = provider.calls.clone();
    let engine = engine_with(provider);

    let outcome = engine.run("Zzzznonexistent").await.unwrap();

    assert_eq!(outcome, RunOutcome::PlayerNotFound { query: "Zzzznonexistent".to_string() });
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_blank_name_is_not_found() {
    let provider = MockProvider::new(season_rows());
    let calls = provider.calls.clone();
    let engine = engine_with(provider);

    assert!(matches!(engine.run("   ").await.unwrap(), RunOutcome::PlayerNotFound { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_partial_name_uses_first_directory_match() {
    let engine = engine_with(MockProvider::new(season_rows()));

    match engine.run("jay").await.unwrap() {
        RunOutcome::Completed(report) => assert_eq!(report.player.full_name, "Jayson Tatum"),
        other => panic!("expected a report, got {other:?}"),
    }
}

#[tokio::test]
async fn test_custom_policy_changes_choice() {
    let engine = engine_with(MockProvider::new(season_rows())).with_policy(Box::new(LastMatch));

    match engine.run("jay").await.unwrap() {
        RunOutcome::Completed(report) => assert_eq!(report.player.player_id, 1627759),
        other => panic!("expected a report, got {other:?}"),
    }
}

#[tokio::test]
async fn test_player_without_games_is_degenerate() {
    let engine = engine_with(MockProvider::new(Vec::new()));

    assert!(matches!(engine.run("Jayson Tatum").await, Err(ProjectionError::DegenerateInput(_))));
}

#[tokio::test]
async fn test_short_season_uses_available_games() {
    let rows = vec![
        raw_row("Jan 05, 2026", "BOS @ LAL", 30),
        raw_row("Jan 03, 2026", "BOS vs. NYK", 20),
    ];
    let engine = engine_with(MockProvider::new(rows));

    match engine.run("Tatum").await.unwrap() {
        RunOutcome::Completed(report) => {
            assert_eq!(report.table.len(), 2);
            assert_eq!(report.heading(), "Last 10 regular season games for Jayson Tatum (2025-26):");
            assert_eq!(report.chart_title(), "Jayson Tatum - Last 10 Games + Predicted Stats");
            assert_eq!(report.series.labels().len(), 3);
            assert_eq!(report.projection.points, 40.0);
        }
        other => panic!("expected a report, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upstream_failure_propagates() {
    let mut provider = MockProvider::new(season_rows());
    provider.fail_game_log = true;
    let engine = engine_with(provider);

    match engine.run("Jayson Tatum").await {
        Err(ProjectionError::Upstream(e)) => assert!(e.to_string().contains("503")),
        other => panic!("expected upstream failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_row_fails_run() {
    let mut rows = season_rows();
    rows[4].game_date = "not a date".to_string();
    let engine = engine_with(MockProvider::new(rows));

    match engine.run("Jayson Tatum").await {
        Err(ProjectionError::MalformedRow { index, .. }) => assert_eq!(index, 4),
        other => panic!("expected malformed row, got {other:?}"),
    }
}

#[tokio::test]
async fn test_configured_season_reaches_provider() {
    let provider = MockProvider::new(season_rows());
    let last_query = provider.last_query.clone();
    let mut config = ProjectorConfig::default();
    config.fetcher.nba_stats.season = "2024-25".to_string();
    config.display.recent_games = 5;
    let engine = ProjectionEngine::new(config, test_registry(), provider);

    match engine.run("Jayson Tatum").await.unwrap() {
        RunOutcome::Completed(report) => {
            assert_eq!(report.season, "2024-25");
            assert_eq!(report.table.len(), 5);
        }
        other => panic!("expected a report, got {other:?}"),
    }
    assert_eq!(last_query.lock().unwrap().as_ref().unwrap().season, "2024-25");
}

#[tokio::test]
async fn test_unaccented_name_resolves_accented_player() {
    let provider = MockProvider::new(season_rows());
    let last_query = provider.last_query.clone();
    let engine = engine_with(provider);

    match engine.run("Nikola Jokic").await.unwrap() {
        RunOutcome::Completed(report) => assert_eq!(report.player.full_name, "Nikola Jokić"),
        other => panic!("expected a report, got {other:?}"),
    }
    assert_eq!(last_query.lock().unwrap().as_ref().unwrap().player_id, 203999);
}
