//! Begin/end window derivation for an observation's reporting span.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::domain::Span;

/// Inclusive calendar range covered by an observation.
///
/// Monthly: the full calendar month of `effective`.
///
/// Weekly: upstream reports the date as the Monday marking the start of
/// reporting, and the value covers the Sunday-through-Saturday week
/// immediately before it. So `end = effective - 2d` (the prior Saturday) and
/// `begin = end - 6d` (the prior Sunday).
pub fn reporting_window(effective: NaiveDate, span: Span) -> (NaiveDate, NaiveDate) {
    match span {
        Span::Monthly => month_bounds(effective),
        Span::Weekly => {
            let end = effective - Duration::days(2);
            (end - Duration::days(6), end)
        }
    }
}

/// First and last calendar day of `date`'s month.
fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let begin = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
    let end = begin
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(begin);
    (begin, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn monthly_window_spans_the_calendar_month() {
        assert_eq!(
            reporting_window(d(2024, 1, 1), Span::Monthly),
            (d(2024, 1, 1), d(2024, 1, 31))
        );
        assert_eq!(
            reporting_window(d(2023, 4, 1), Span::Monthly),
            (d(2023, 4, 1), d(2023, 4, 30))
        );
    }

    #[test]
    fn monthly_window_handles_leap_february() {
        assert_eq!(
            reporting_window(d(2024, 2, 1), Span::Monthly),
            (d(2024, 2, 1), d(2024, 2, 29))
        );
        assert_eq!(
            reporting_window(d(2023, 2, 1), Span::Monthly),
            (d(2023, 2, 1), d(2023, 2, 28))
        );
    }

    #[test]
    fn monthly_window_crosses_the_year_boundary() {
        assert_eq!(
            reporting_window(d(2023, 12, 1), Span::Monthly),
            (d(2023, 12, 1), d(2023, 12, 31))
        );
    }

    #[test]
    fn weekly_window_is_the_sunday_to_saturday_before_the_monday() {
        // 2024-01-08 is a Monday; prior week is Sun 2023-12-31 .. Sat 2024-01-06.
        assert_eq!(
            reporting_window(d(2024, 1, 8), Span::Weekly),
            (d(2023, 12, 31), d(2024, 1, 6))
        );
    }

    #[test]
    fn weekly_window_is_always_seven_days() {
        let mondays = [d(2024, 1, 8), d(2024, 2, 26), d(2024, 12, 30), d(2023, 1, 2)];
        for monday in mondays {
            let (begin, end) = reporting_window(monday, Span::Weekly);
            assert_eq!(end - begin, Duration::days(6));
            assert_eq!(end, monday - Duration::days(2));
            assert_eq!(begin.weekday(), chrono::Weekday::Sun);
            assert_eq!(end.weekday(), chrono::Weekday::Sat);
        }
    }
}
