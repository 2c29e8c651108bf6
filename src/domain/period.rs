//! Parsing of raw API period tokens into effective dates.

use chrono::NaiveDate;

use crate::domain::Span;
use crate::error::EtlError;

/// Parse a raw period token for the given span.
///
/// The API has served two textual encodings for the same logical date over
/// time: compact (`YYYYMMDD` / `YYYYMM`) and hyphenated (`YYYY-MM-DD` /
/// `YYYY-MM`), detected by the presence of a separator. Monthly tokens carry
/// no day component and normalize to the first of the month.
pub fn parse_period(token: &str, span: Span) -> Result<NaiveDate, EtlError> {
    let parsed = match span {
        Span::Weekly => {
            if token.contains('-') {
                NaiveDate::parse_from_str(token, "%Y-%m-%d")
            } else {
                NaiveDate::parse_from_str(token, "%Y%m%d")
            }
        }
        Span::Monthly => {
            if token.contains('-') {
                NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d")
            } else {
                NaiveDate::parse_from_str(&format!("{token}01"), "%Y%m%d")
            }
        }
    };

    parsed.map_err(|_| EtlError::MalformedPeriod {
        span,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekly_accepts_both_encodings_identically() {
        let compact = parse_period("20240108", Span::Weekly).unwrap();
        let hyphenated = parse_period("2024-01-08", Span::Weekly).unwrap();
        assert_eq!(compact, d(2024, 1, 8));
        assert_eq!(compact, hyphenated);
    }

    #[test]
    fn monthly_accepts_both_encodings_identically() {
        let compact = parse_period("202402", Span::Monthly).unwrap();
        let hyphenated = parse_period("2024-02", Span::Monthly).unwrap();
        assert_eq!(compact, d(2024, 2, 1));
        assert_eq!(compact, hyphenated);
    }

    #[test]
    fn monthly_normalizes_to_first_of_month() {
        assert_eq!(parse_period("202312", Span::Monthly).unwrap(), d(2023, 12, 1));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for (token, span) in [
            ("2024", Span::Weekly),
            ("2024-01", Span::Weekly),
            ("20240199", Span::Weekly),
            ("garbage", Span::Monthly),
            ("2024-01-08", Span::Monthly),
        ] {
            let err = parse_period(token, span).unwrap_err();
            assert!(matches!(err, EtlError::MalformedPeriod { .. }), "{token}");
        }
    }
}
