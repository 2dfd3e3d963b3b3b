// Command line entry point: fetch, derive and print day-ahead prices.
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use engine::config::EngineSettings;
use engine::data::EliaFeed;
use engine::services::price_service::render_report::render_report;
use engine::services::price_service::scheduler::RefreshSchedule;
use engine::services::PriceService;
use shared::models::PriceUnit;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Day-ahead electricity spot prices", long_about = None)]
struct Cli {
    /// JSON settings file (defaults are embedded)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Display unit (MWh or kWh)
    #[arg(short, long)]
    unit: Option<PriceUnit>,

    /// Refresh interval in seconds
    #[arg(short, long)]
    interval: Option<u64>,

    /// Fetch and print once, then exit
    #[arg(long)]
    once: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = EngineSettings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(unit) = cli.unit {
        settings.unit = unit;
    }
    if let Some(interval) = cli.interval {
        settings.refresh_interval_secs = interval;
    }
    settings.validate()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    info!(feed = %settings.feed_base_url, unit = %settings.unit, "Starting spot price engine...");

    let feed = EliaFeed::new(&settings).context("Failed to build feed client")?;
    let service = PriceService::new(Arc::new(feed));
    let unit = settings.unit;

    if cli.once {
        let prices = service
            .refresh_now(cli.date)
            .await
            .context("Failed to fetch electricity prices")?;
        println!("{}", render_report(&prices, Local::now().naive_local(), unit));
        return Ok(());
    }

    let schedule = RefreshSchedule {
        interval: Duration::from_secs(settings.refresh_interval_secs),
        date_override: cli.date,
    };
    service
        .run_scheduled(
            &schedule,
            |outcome| match outcome {
                Ok(prices) => println!("{}\n", render_report(&prices, Local::now().naive_local(), unit)),
                Err(e) => eprintln!("Failed to fetch electricity prices: {}. Retrying at the next refresh.", e),
            },
            async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!(error = %e, "Failed to listen for Ctrl-C");
                }
            },
        )
        .await;

    Ok(())
}
