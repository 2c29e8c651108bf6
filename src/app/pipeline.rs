//! Shared collect pipeline used by both the scheduled and ad hoc entries.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! fetch -> parse periods -> derive windows -> filter -> dedup -> sink
//!
//! The entries then only decide which start tokens to run and which sink
//! receives the batch.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use tracing::{info, warn};

use crate::data::EiaClient;
use crate::domain::{Observation, Span, filter, period};
use crate::error::EtlError;
use crate::store::{RateSink, SinkReport};

/// Per-series result of the fetch/normalize/filter stage.
///
/// Partial failure is a first-class value: a failed fetch becomes `Failed`
/// and the orchestrator decides what that means for the run, instead of a
/// buried log line inside the loop.
#[derive(Debug, Clone)]
pub enum SeriesOutcome {
    Collected {
        span: Span,
        records: Vec<Observation>,
        skipped: usize,
    },
    Failed {
        span: Span,
        reason: String,
    },
}

/// All computed outputs of a single collect run.
#[derive(Debug)]
pub struct RunOutput {
    pub outcomes: Vec<SeriesOutcome>,
    pub report: SinkReport,
}

/// Execute fetch -> normalize -> filter -> persist for both configured
/// series.
///
/// `start_token` is the caller-supplied start date (`YYYYMMDD` or `YYYYMM`).
/// It doubles as the upstream `start` query parameter and, parsed, as the
/// inclusive lower filter bound. `today` is the inclusive upper bound and is
/// a parameter so tests stay deterministic.
pub async fn run_collect(
    client: &EiaClient,
    sink: &dyn RateSink,
    start_token: &str,
    today: NaiveDate,
) -> Result<RunOutput, EtlError> {
    // An invalid start token aborts before any fetch.
    let threshold = filter::parse_start_token(start_token)?;

    let mut outcomes = Vec::with_capacity(Span::ALL.len());
    let mut batch: Vec<Observation> = Vec::new();
    let mut seen: HashSet<(NaiveDate, Span)> = HashSet::new();

    for span in Span::ALL {
        let outcome = collect_series(client, span, start_token, threshold, today).await;
        if let SeriesOutcome::Collected { records, .. } = &outcome {
            for rec in records {
                // Batch-level dedup on the persistence key; rows that already
                // exist in storage are handled by the sink's conditional
                // insert.
                if seen.insert(rec.key()) {
                    batch.push(rec.clone());
                }
            }
        }
        outcomes.push(outcome);
    }

    let report = sink.persist(&batch).await?;

    Ok(RunOutput { outcomes, report })
}

/// Fetch and normalize a single series.
///
/// Fetch failures become a `Failed` outcome so the other series still runs;
/// record-level problems (missing price, malformed period, out of window)
/// are logged and skipped.
async fn collect_series(
    client: &EiaClient,
    span: Span,
    start_token: &str,
    threshold: NaiveDate,
    today: NaiveDate,
) -> SeriesOutcome {
    let raw = match client.fetch_series(span, start_token).await {
        Ok(raw) => raw,
        Err(err) => {
            warn!(%span, %err, "skipping series");
            return SeriesOutcome::Failed {
                span,
                reason: err.to_string(),
            };
        }
    };

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (token, value) in raw {
        let Some(rate) = value else {
            warn!(%span, period = %token, "skipping record with missing price");
            skipped += 1;
            continue;
        };

        let effective = match period::parse_period(&token, span) {
            Ok(date) => date,
            Err(err) => {
                warn!(%span, period = %token, %err, "skipping unparseable period");
                skipped += 1;
                continue;
            }
        };

        if !filter::in_window(effective, threshold, today) {
            skipped += 1;
            continue;
        }

        records.push(Observation::new(effective, span, rate));
    }

    info!(%span, collected = records.len(), skipped, "series normalized");
    SeriesOutcome::Collected {
        span,
        records,
        skipped,
    }
}

/// Start token for the scheduled weekly pull: the Monday of last week.
pub fn weekly_start_token(today: NaiveDate) -> String {
    let last_week = today - Duration::days(7);
    let monday = last_week - Duration::days(last_week.weekday().num_days_from_monday() as i64);
    monday.format("%Y%m%d").to_string()
}

/// Start token for the scheduled monthly pull: the current month.
pub fn monthly_start_token(today: NaiveDate) -> String {
    today.format("%Y%m").to_string()
}
