//! Shared utility functions for FDC crates.

/// Date utility functions
pub mod dates {
    use chrono::{Duration, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Format a NaiveDate as "YYYYMMDD" (INPE file name token)
    pub fn format_date_compact(date: &NaiveDate) -> String {
        date.format("%Y%m%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Parse a date string in "YYYYMMDD" format
    pub fn parse_date_compact(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y%m%d")?)
    }

    /// Parse a user supplied date, accepting either "YYYY-MM-DD" or "YYYYMMDD".
    pub fn parse_user_date(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        if s.contains('-') {
            parse_date(s)
        } else {
            parse_date_compact(s)
        }
    }

    /// The calendar day before `today`.
    pub fn yesterday(today: NaiveDate) -> NaiveDate {
        today - Duration::days(1)
    }

    /// Number of whole days from `date` to `today` (negative for future dates).
    pub fn days_before(date: &NaiveDate, today: &NaiveDate) -> i64 {
        (*today - *date).num_days()
    }

}
