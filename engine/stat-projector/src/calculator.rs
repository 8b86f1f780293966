use crate::error::{ProjectionError, Result};
use crate::gamelog::ChronologicalLog;
use crate::models::{Projection, TrackedStat};
use tracing::{debug, info};

/// Fitted straight line y = slope * x + intercept
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least squares fit of `ys` against `xs`
///
/// A single point (or no spread in `xs`) gives a flat line through the mean
/// of `ys`. No points is an error.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Result<LinearFit> {
    if xs.len() != ys.len() {
        return Err(ProjectionError::DegenerateInput(format!(
            "{} x values for {} y values",
            xs.len(),
            ys.len()
        )));
    }
    if xs.is_empty() {
        return Err(ProjectionError::DegenerateInput("no data points to fit".to_string()));
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (sxy, sxx) = xs.iter().zip(ys).fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
        let dx = x - mean_x;
        (sxy + dx * (y - mean_y), sxx + dx * dx)
    });

    let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
    Ok(LinearFit { slope, intercept: mean_y - slope * mean_x })
}

/// Round half away from zero to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Fit every tracked statistic against game number and extrapolate one game
pub fn project_next_game(log: &ChronologicalLog) -> Result<Projection> {
    if log.is_empty() {
        return Err(ProjectionError::DegenerateInput(
            "no games played; cannot project next game".to_string(),
        ));
    }

    let xs = log.game_numbers();
    let next = log.next_game_number() as f64;

    let predict = |stat: TrackedStat| -> Result<f64> {
        let fit = fit_line(&xs, &log.stat_series(stat))?;
        let value = round_one_decimal(fit.predict(next));
        debug!(
            "{} trend: slope {:.4}, intercept {:.4}, game {} -> {:.1}",
            stat.key(),
            fit.slope,
            fit.intercept,
            next,
            value
        );
        Ok(value)
    };

    let projection = Projection {
        minutes: predict(TrackedStat::Minutes)?,
        points: predict(TrackedStat::Points)?,
        rebounds: predict(TrackedStat::Rebounds)?,
        assists: predict(TrackedStat::Assists)?,
        steals_blocks: predict(TrackedStat::StealsBlocks)?,
    };

    info!("Projected game {} from {} games played", next, log.len());
    Ok(projection)
}
