//! Shared domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::window;

/// Reporting cadence of an upstream series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Span {
    Weekly,
    Monthly,
}

impl Span {
    /// Both configured series, in processing order.
    pub const ALL: [Span; 2] = [Span::Weekly, Span::Monthly];

    /// EIA series id for this cadence.
    pub fn series_id(self) -> &'static str {
        match self {
            Span::Weekly => "PET.EMD_EPD2D_PTE_NUS_DPG.W",
            Span::Monthly => "PET.EMD_EPD2D_PTE_NUS_DPG.M",
        }
    }

    /// Label stored in the `time_span` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Span::Weekly => "Weekly",
            Span::Monthly => "Monthly",
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized fuel-price observation ready for persistence.
///
/// `begin_date`/`end_date` are always derived from the effective date and
/// span, never supplied independently, so `begin_date <= end_date` holds by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub effective_date: NaiveDate,
    pub span: Span,
    pub rate: Decimal,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Observation {
    /// Build an observation, deriving the inclusive begin/end window.
    pub fn new(effective_date: NaiveDate, span: Span, rate: Decimal) -> Self {
        let (begin_date, end_date) = window::reporting_window(effective_date, span);
        Self {
            effective_date,
            span,
            rate,
            begin_date,
            end_date,
        }
    }

    /// Persistence uniqueness key.
    pub fn key(&self) -> (NaiveDate, Span) {
        (self.effective_date, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn monthly_observation_derives_full_month_window() {
        let obs = Observation::new(d(2024, 1, 1), Span::Monthly, dec!(3.50));
        assert_eq!(obs.begin_date, d(2024, 1, 1));
        assert_eq!(obs.end_date, d(2024, 1, 31));
    }

    #[test]
    fn weekly_observation_derives_prior_week_window() {
        let obs = Observation::new(d(2024, 1, 8), Span::Weekly, dec!(3.95));
        assert_eq!(obs.begin_date, d(2023, 12, 31));
        assert_eq!(obs.end_date, d(2024, 1, 6));
    }

    #[test]
    fn key_distinguishes_spans_on_the_same_date() {
        let weekly = Observation::new(d(2024, 1, 1), Span::Weekly, dec!(1));
        let monthly = Observation::new(d(2024, 1, 1), Span::Monthly, dec!(1));
        assert_ne!(weekly.key(), monthly.key());
    }
}
