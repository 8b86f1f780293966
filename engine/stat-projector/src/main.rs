use anyhow::Context;
use clap::Parser;
use nba_stats_fetcher::NbaStatsFetcher;
use player_registry::PlayerRegistry;
use stat_projector::{
    chart::show_chart,
    cli::{prompt_line, Cli},
    ProjectionEngine, ProjectorConfig, RunOutcome,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config =
        ProjectorConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut config);
    info!("🚀 Starting NBA projection for season {}", config.season());

    let name = match &cli.player {
        Some(name) => name.clone(),
        None => {
            let stdin = std::io::stdin();
            prompt_line("Enter player name: ", &mut stdin.lock(), &mut std::io::stdout())
                .context("Failed to read player name")?
        }
    };

    let registry = match &config.registry.directory_file {
        Some(path) => PlayerRegistry::load_from_file(path).await?,
        None => PlayerRegistry::bundled()?,
    };
    let fetcher = NbaStatsFetcher::new(config.fetcher.clone())?;
    let engine = ProjectionEngine::new(config, registry, fetcher);

    let report = match engine.run(&name).await {
        Ok(RunOutcome::Completed(report)) => report,
        Ok(RunOutcome::PlayerNotFound { .. }) => {
            println!("Player not found. Try Again");
            return Ok(());
        }
        Err(e) => {
            error!("❌ Projection failed: {}", e);
            return Err(e.into());
        }
    };

    println!("\n{}\n", report.heading());
    println!("{}", report.table);
    println!("\nPredicted Next Game Stat Line:");
    println!("{}", report.projection.summary_line());

    if cli.no_chart {
        info!("Chart rendering disabled");
        return Ok(());
    }

    let chart_config = &engine.config().chart;
    show_chart(&report.series, chart_config, &report.chart_title())?;
    println!("\nChart saved to {}", chart_config.output_path.display());

    Ok(())
}
