//! Command-line parsing for the fuel-rate collector.
//!
//! Argument parsing and command dispatch stay separate from the
//! fetch/normalize/persist code.

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fuelrates", version, about = "EIA diesel fuel rate collector")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scheduled entry: compute last week's and the current month's start
    /// windows and persist both pulls.
    ///
    /// If `FUEL_RATES_START_OVERRIDE` is set to an ISO date, this instead
    /// performs a single dry run from that date.
    Run,
    /// One-off pull from an explicit start date.
    Fetch(FetchArgs),
}

/// Options for the ad hoc `fetch` entry.
#[derive(Debug, Parser, Clone)]
pub struct FetchArgs {
    /// Start date: YYYYMMDD for weekly alignment, YYYYMM for monthly.
    #[arg(long = "start_date")]
    pub start_date: String,

    /// Print collected records instead of persisting them.
    #[arg(long = "dry_run")]
    pub dry_run: bool,
}
