//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initializes logging
//! - loads configuration
//! - selects the sink (persisting vs dry run)
//! - drives the collect pipeline and prints the run summary

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{info, warn};

use crate::cli::{Cli, Command, FetchArgs};
use crate::config::AppConfig;
use crate::data::EiaClient;
use crate::error::EtlError;
use crate::store::{DryRunSink, PostgresSink};

pub mod pipeline;

use pipeline::{RunOutput, SeriesOutcome};

/// Entry point for the `fuelrates` binary.
pub async fn run() -> Result<(), EtlError> {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::from_env()?;
    let client = EiaClient::new(config.eia_base_url.as_str(), config.api_key.as_str());
    let today = Local::now().date_naive();

    match cli.command {
        Command::Run => handle_scheduled(&config, &client, today).await,
        Command::Fetch(args) => handle_fetch(&config, &client, args, today).await,
    }
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fuel_rates=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Scheduled mode: one persisted pull per target window (last week, current
/// month). An override date turns the whole invocation into a single dry run.
async fn handle_scheduled(
    config: &AppConfig,
    client: &EiaClient,
    today: NaiveDate,
) -> Result<(), EtlError> {
    if let Some(raw) = &config.start_override {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            EtlError::Config(format!(
                "FUEL_RATES_START_OVERRIDE must be an ISO date (YYYY-MM-DD), got '{raw}'"
            ))
        })?;
        info!(%date, "start override set; forcing dry run");

        let token = date.format("%Y%m%d").to_string();
        let output = pipeline::run_collect(client, &DryRunSink, &token, today).await?;
        report_run(&output);
        return Ok(());
    }

    let sink = PostgresSink::connect(&config.database_url).await?;
    for token in [
        pipeline::weekly_start_token(today),
        pipeline::monthly_start_token(today),
    ] {
        info!(start = %token, "scheduled pull");
        let output = pipeline::run_collect(client, &sink, &token, today).await?;
        report_run(&output);
    }
    Ok(())
}

async fn handle_fetch(
    config: &AppConfig,
    client: &EiaClient,
    args: FetchArgs,
    today: NaiveDate,
) -> Result<(), EtlError> {
    let output = if args.dry_run {
        pipeline::run_collect(client, &DryRunSink, &args.start_date, today).await?
    } else {
        let sink = PostgresSink::connect(&config.database_url).await?;
        pipeline::run_collect(client, &sink, &args.start_date, today).await?
    };

    print!("{}", crate::report::format_run_summary(&output));
    report_run(&output);
    Ok(())
}

/// Log per-series outcomes. Fetch failures are warnings, not run failures:
/// the surviving series has already been persisted by this point.
fn report_run(output: &RunOutput) {
    for outcome in &output.outcomes {
        match outcome {
            SeriesOutcome::Collected {
                span,
                records,
                skipped,
            } => {
                info!(%span, collected = records.len(), skipped, "series done");
            }
            SeriesOutcome::Failed { span, reason } => {
                warn!(%span, %reason, "series failed");
            }
        }
    }
    info!(
        inserted = output.report.inserted,
        deduplicated = output.report.deduplicated,
        "run complete"
    );
}
