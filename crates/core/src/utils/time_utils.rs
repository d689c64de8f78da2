use chrono::{NaiveDate, Utc};

use crate::constants::CALENDAR_DATE_FORMAT;
use crate::errors::Result;

/// Returns the current UTC calendar date.
///
/// This is the single source of truth for deriving "today" from the wall
/// clock. Day boundaries are UTC calendar days throughout the application;
/// both the daily-reset logic and the totals aggregation collaborator must
/// use this same definition or day-rollover detection silently corrupts.
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Returns the calendar day immediately before `date`.
///
/// Use this whenever "yesterday" is needed; the streak-continuity and
/// daily-reset checks must share one definition of the day boundary.
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    // pred_opt is None only at NaiveDate::MIN, far outside any real date.
    date.pred_opt().unwrap_or(NaiveDate::MIN)
}

/// Formats a calendar date in the canonical `%Y-%m-%d` form.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}

/// Parses a calendar date from the canonical `%Y-%m-%d` form.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, CALENDAR_DATE_FORMAT)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(
            previous_day(date),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );

        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(
            previous_day(new_year),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_calendar_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 9).unwrap();
        let formatted = format_calendar_date(date);
        assert_eq!(formatted, "2025-07-09");
        assert_eq!(parse_calendar_date(&formatted).unwrap(), date);
    }

    #[test]
    fn test_parse_calendar_date_rejects_garbage() {
        assert!(parse_calendar_date("07/09/2025").is_err());
        assert!(parse_calendar_date("not a date").is_err());
    }
}
