//! Record filtering: start-token parsing and date-window checks.

use chrono::NaiveDate;

use crate::error::EtlError;

/// Parse the caller-supplied start token into the inclusive lower bound.
///
/// 8 digits parse as an exact day, 6 digits as a month normalized to day 1.
/// Separator characters are stripped before the length check. Anything else
/// is fatal: the run aborts before any fetch.
pub fn parse_start_token(token: &str) -> Result<NaiveDate, EtlError> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    let invalid = || EtlError::InvalidStartDate(token.to_string());

    match digits.len() {
        8 => NaiveDate::parse_from_str(&digits, "%Y%m%d").map_err(|_| invalid()),
        6 => NaiveDate::parse_from_str(&format!("{digits}01"), "%Y%m%d").map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Keep an observation iff `threshold <= effective <= today` (both bounds
/// inclusive). No future-dated or pre-window records are persisted.
pub fn in_window(effective: NaiveDate, threshold: NaiveDate, today: NaiveDate) -> bool {
    effective >= threshold && effective <= today
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn eight_digit_token_parses_as_exact_day() {
        assert_eq!(parse_start_token("20240108").unwrap(), d(2024, 1, 8));
    }

    #[test]
    fn six_digit_token_normalizes_to_first_of_month() {
        assert_eq!(parse_start_token("202401").unwrap(), d(2024, 1, 1));
    }

    #[test]
    fn separators_are_stripped_before_the_length_check() {
        assert_eq!(parse_start_token("2024-01-08").unwrap(), d(2024, 1, 8));
        assert_eq!(parse_start_token("2024-01").unwrap(), d(2024, 1, 1));
    }

    #[test]
    fn wrong_shapes_are_fatal() {
        for token in ["20241", "2024", "", "abcdefgh", "202401089"] {
            let err = parse_start_token(token).unwrap_err();
            assert!(matches!(err, EtlError::InvalidStartDate(_)), "{token}");
        }
    }

    #[test]
    fn impossible_dates_are_fatal() {
        assert!(parse_start_token("20240199").is_err());
        assert!(parse_start_token("202413").is_err());
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let threshold = d(2024, 1, 1);
        let today = d(2024, 1, 31);

        assert!(in_window(threshold, threshold, today));
        assert!(!in_window(threshold - Duration::days(1), threshold, today));
        assert!(in_window(today, threshold, today));
        assert!(!in_window(today + Duration::days(1), threshold, today));
    }
}
