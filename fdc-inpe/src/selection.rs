use chrono::NaiveDate;
use fdc_utils::dates::{days_before, format_date_compact, yesterday};

/// How far back INPE keeps daily files, as advertised to the user.
/// Advisory only: nothing rejects a date outside this window.
pub const ADVISORY_WINDOW_DAYS: i64 = 40;

/// The calendar date the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserDateSelection {
    pub date: NaiveDate,
}

/// Why a selection falls outside the advertised window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryWarning {
    /// More than `ADVISORY_WINDOW_DAYS` before today
    TooOld { days: i64 },
    /// After today
    InFuture { days: i64 },
}

impl std::fmt::Display for AdvisoryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvisoryWarning::TooOld { days } => write!(
                f,
                "selected date is {} days ago; INPE keeps about {} days of daily files",
                days, ADVISORY_WINDOW_DAYS
            ),
            AdvisoryWarning::InFuture { days } => {
                write!(f, "selected date is {} days in the future", days)
            }
        }
    }
}

impl UserDateSelection {
    pub fn new(date: NaiveDate) -> Self {
        UserDateSelection { date }
    }

    /// Default selection: the day before `today`.
    pub fn yesterday(today: NaiveDate) -> Self {
        UserDateSelection {
            date: yesterday(today),
        }
    }

    /// The selected date and its `YYYYMMDD` resource token.
    pub fn resolve(&self) -> (NaiveDate, String) {
        (self.date, format_date_compact(&self.date))
    }

    /// Check the selection against the advertised window. The caller decides
    /// what to do with the result; the request itself is never altered.
    pub fn advisory_warning(&self, today: NaiveDate) -> Option<AdvisoryWarning> {
        let days = days_before(&self.date, &today);
        if days > ADVISORY_WINDOW_DAYS {
            Some(AdvisoryWarning::TooOld { days })
        } else if days < 0 {
            Some(AdvisoryWarning::InFuture { days: -days })
        } else {
            None
        }
    }
}
