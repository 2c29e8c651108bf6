//! Table and summary formatting for terminal output.

use crate::app::pipeline::{RunOutput, SeriesOutcome};
use crate::domain::Observation;

/// Render collected observations as a fixed-width table.
pub fn format_records_table(records: &[Observation]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:<8} {:>10} {:<12} {:<12}\n",
        "EFFECTIVE", "SPAN", "RATE", "BEGIN", "END"
    ));
    for rec in records {
        out.push_str(&format!(
            "{:<12} {:<8} {:>10} {:<12} {:<12}\n",
            rec.effective_date.to_string(),
            rec.span.to_string(),
            rec.rate.to_string(),
            rec.begin_date.to_string(),
            rec.end_date.to_string(),
        ));
    }
    out
}

/// One-screen summary of a completed run: per-series outcomes plus the
/// sink's insert/dedup counts.
pub fn format_run_summary(output: &RunOutput) -> String {
    let mut out = String::new();

    for outcome in &output.outcomes {
        match outcome {
            SeriesOutcome::Collected {
                span,
                records,
                skipped,
            } => {
                out.push_str(&format!(
                    "{span}: collected {} record(s), skipped {skipped}\n",
                    records.len()
                ));
            }
            SeriesOutcome::Failed { span, reason } => {
                out.push_str(&format!("{span}: fetch failed ({reason})\n"));
            }
        }
    }

    out.push_str(&format!(
        "Sink: {} inserted, {} already present\n",
        output.report.inserted, output.report.deduplicated
    ));
    out
}
