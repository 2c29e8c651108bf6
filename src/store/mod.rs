//! Persistence sinks for normalized observations.
//!
//! Dry run is a sink implementation rather than a flag threaded through the
//! pipeline: the orchestrator decides which sink receives the batch and the
//! business logic never branches on it.

use async_trait::async_trait;

use crate::domain::Observation;
use crate::error::EtlError;

pub mod dry_run;
pub mod postgres;

pub use dry_run::DryRunSink;
pub use postgres::PostgresSink;

/// Outcome of persisting one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkReport {
    /// Rows actually written.
    pub inserted: usize,
    /// Rows skipped because their (effective_date, span) key already existed.
    pub deduplicated: usize,
}

/// Destination for a batch of normalized, filtered observations.
///
/// Implementations must be idempotent under the (effective_date, span) key:
/// a second write for an existing key is a silent no-op, never an update.
#[async_trait]
pub trait RateSink: Send + Sync {
    async fn persist(&self, records: &[Observation]) -> Result<SinkReport, EtlError>;
}
