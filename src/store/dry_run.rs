//! Reporting-only sink used for dry runs.

use async_trait::async_trait;

use super::{RateSink, SinkReport};
use crate::domain::Observation;
use crate::error::EtlError;

/// Prints the collected batch to stdout instead of writing it anywhere.
///
/// The listing is informational only, not a machine-readable contract.
#[derive(Debug, Default)]
pub struct DryRunSink;

#[async_trait]
impl RateSink for DryRunSink {
    async fn persist(&self, records: &[Observation]) -> Result<SinkReport, EtlError> {
        println!("Dry-run mode: collected {} records", records.len());
        if !records.is_empty() {
            print!("{}", crate::report::format_records_table(records));
        }
        Ok(SinkReport::default())
    }
}
