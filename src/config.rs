//! Environment-sourced runtime configuration.
//!
//! Everything is read once at process start into an explicit config struct
//! and passed by parameter from there; a missing required value fails fast
//! before any fetch or database connection.

use crate::error::EtlError;

/// Real EIA v2 backward-compatibility endpoint.
pub const DEFAULT_EIA_BASE_URL: &str = "https://api.eia.gov";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// EIA API key (`EIA_API_KEY`).
    pub api_key: String,
    /// Postgres DSN for the destination table (`DATABASE_URL`).
    pub database_url: String,
    /// Upstream base URL (`EIA_BASE_URL`); overridable so tests can point the
    /// client at a local mock server.
    pub eia_base_url: String,
    /// Optional ISO date (`FUEL_RATES_START_OVERRIDE`) that forces a single
    /// dry-run invocation from that date, for ad hoc testing.
    pub start_override: Option<String>,
}

impl AppConfig {
    /// Load configuration from the environment (and `.env` if present).
    pub fn from_env() -> Result<Self, EtlError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: require("EIA_API_KEY")?,
            database_url: require("DATABASE_URL")?,
            eia_base_url: std::env::var("EIA_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_EIA_BASE_URL.to_string()),
            start_override: std::env::var("FUEL_RATES_START_OVERRIDE").ok(),
        })
    }
}

fn require(key: &str) -> Result<String, EtlError> {
    std::env::var(key).map_err(|_| EtlError::Config(format!("missing {key} in environment (.env)")))
}
