//! Error taxonomy for the collector.
//!
//! Every failure is either skipped at record level (logged by the pipeline)
//! or fatal at run level; there are no automatic retries anywhere.

use thiserror::Error;

use crate::domain::Span;

#[derive(Debug, Error)]
pub enum EtlError {
    /// Missing or malformed environment configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Caller-supplied start token has the wrong shape. Fatal, raised before
    /// any fetch.
    #[error("start date must be YYYYMMDD (weekly) or YYYYMM (monthly), got '{0}'")]
    InvalidStartDate(String),

    /// Unparseable period token from upstream. Per-record: the caller logs
    /// and skips the record, continuing with the rest of the series.
    #[error("malformed {span} period token '{token}'")]
    MalformedPeriod { span: Span, token: String },

    /// Non-success response or transport failure for one series. Caught by
    /// the orchestrator; the other series still runs.
    #[error("{span} series fetch failed: {reason}")]
    UpstreamFetch { span: Span, reason: String },

    /// Connectivity or constraint failure during the conditional insert.
    /// Fatal; inserts already applied are not rolled back.
    #[error("persistence failed: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl EtlError {
    /// Process exit code for `main`.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::InvalidStartDate(_) => 2,
            Self::MalformedPeriod { .. } | Self::UpstreamFetch { .. } => 3,
            Self::Persistence(_) => 4,
        }
    }
}
