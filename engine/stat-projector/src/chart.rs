//! Recent-games trend chart.
//!
//! Plots points, rebounds and assists for the most recent games plus the
//! projected next game, rendered to SVG with plotters and opened in the
//! system viewer unless saving only.

use crate::config::ChartConfig;
use crate::error::{ProjectionError, Result};
use crate::gamelog::ChronologicalLog;
use crate::models::{Projection, TrackedStat};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Label of the projected point on the x axis
pub const NEXT_GAME_LABEL: &str = "Next Game";

/// Charted statistics with their legend names
pub const CHARTED_STATS: [(TrackedStat, &str); 3] = [
    (TrackedStat::Points, "Points"),
    (TrackedStat::Rebounds, "Rebounds"),
    (TrackedStat::Assists, "Assists"),
];

/// One x-axis category with its charted values
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub label: String,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
}

impl PlotPoint {
    fn value(&self, stat: TrackedStat) -> f64 {
        match stat {
            TrackedStat::Rebounds => self.rebounds,
            TrackedStat::Assists => self.assists,
            _ => self.points,
        }
    }
}

/// Recent games oldest first, then the projected game
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    points: Vec<PlotPoint>,
}

impl PlotSeries {
    /// Build from the last `limit` games and the projection
    pub fn build(log: &ChronologicalLog, projection: &Projection, limit: usize) -> Self {
        // Label and values come from the same record, so they cannot drift apart
        let mut points: Vec<PlotPoint> = log
            .last(limit)
            .iter()
            .map(|game| PlotPoint {
                label: format!("{} {}", game.record.display_date(), game.record.matchup),
                points: TrackedStat::Points.value_of(&game.record),
                rebounds: TrackedStat::Rebounds.value_of(&game.record),
                assists: TrackedStat::Assists.value_of(&game.record),
            })
            .collect();

        points.push(PlotPoint {
            label: NEXT_GAME_LABEL.to_string(),
            points: projection.points,
            rebounds: projection.rebounds,
            assists: projection.assists,
        });

        Self { points }
    }

    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    fn max_value(&self) -> f64 {
        self.points
            .iter()
            .flat_map(|p| [p.points, p.rebounds, p.assists])
            .fold(0.0, f64::max)
    }
}

/// Chart title for a player
pub fn chart_title(player_name: &str, recent_games: usize) -> String {
    format!("{player_name} - Last {recent_games} Games + Predicted Stats")
}

/// Render the series to an SVG file
pub fn render_chart(series: &PlotSeries, config: &ChartConfig, title: &str) -> Result<()> {
    render_svg(series, config, title).map_err(|e| ProjectionError::Chart(e.to_string()))?;
    info!("Rendered chart with {} points to {}", series.points.len(), config.output_path.display());
    Ok(())
}

/// Render the series, then hand the file to the system viewer when configured
pub fn show_chart(series: &PlotSeries, config: &ChartConfig, title: &str) -> Result<()> {
    render_chart(series, config, title)?;

    if config.open_viewer {
        opener::open(&config.output_path).map_err(|e| {
            ProjectionError::Chart(format!(
                "Failed to open {} in a viewer: {e}",
                config.output_path.display()
            ))
        })?;
        info!("Opened {} in the system viewer", config.output_path.display());
    }
    Ok(())
}

fn render_svg(
    series: &PlotSeries,
    config: &ChartConfig,
    title: &str,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = config.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let root = SVGBackend::new(Path::new(&config.output_path), (config.width, config.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let count = series.points.len() as i32;
    let y_max = (series.max_value() * 1.15).max(1.0);
    let labels = series.labels();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(110)
        .y_label_area_size(50)
        .build_cartesian_2d((0..count).into_segmented(), 0f64..y_max)?;

    let label_for = |value: &SegmentValue<i32>| match value {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
            labels.get(*i as usize).map(|s| s.to_string()).unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .x_labels(series.points.len())
        .x_label_formatter(&label_for)
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .x_desc("Game Date + Opponent")
        .draw()?;

    let colors = [BLUE, RED, GREEN];
    for (series_index, (stat, name)) in CHARTED_STATS.iter().enumerate() {
        let color = colors[series_index];
        let coords: Vec<(SegmentValue<i32>, f64)> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (SegmentValue::CenterOf(i as i32), p.value(*stat)))
            .collect();

        chart
            .draw_series(LineSeries::new(coords.clone(), color.stroke_width(2)))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        // Circle, square and triangle markers
        let style = color.filled();
        match series_index {
            0 => {
                chart.draw_series(coords.iter().map(|c| Circle::new(c.clone(), 4, style)))?;
            }
            1 => {
                chart.draw_series(coords.iter().map(|c| {
                    EmptyElement::at(c.clone()) + Rectangle::new([(-4, -4), (4, 4)], style)
                }))?;
            }
            _ => {
                chart.draw_series(
                    coords.iter().map(|c| TriangleMarker::new(c.clone(), 5, style)),
                )?;
            }
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}
