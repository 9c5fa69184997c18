//! Calendar months of an analysis period.

use crate::error::{DecomposeError, Result};
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};
use std::fmt;

/// A calendar month, identified by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    /// Create a month; `month` is 1-based.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| {
                DecomposeError::InvalidParameter(format!("no such month: {}-{}", year, month))
            })
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Month of the year, 1-based.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The following month, if representable.
    pub fn succ(&self) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
    }

    /// Midnight UTC on the first day of the month.
    pub fn start(&self) -> DateTime<Utc> {
        self.first_day.and_time(NaiveTime::MIN).and_utc()
    }

    /// Exclusive end of the month window (start of the next month).
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.succ().map(|next| next.start())
    }

    /// Start of the month as Unix milliseconds.
    pub fn time_start_millis(&self) -> i64 {
        self.start().timestamp_millis()
    }

    /// ISO date of the first day, e.g. `2020-01-01`.
    pub fn label(&self) -> String {
        self.first_day.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// All months from January of `start_year` through December of `end_year`.
pub fn months_between(start_year: i32, end_year: i32) -> Result<Vec<YearMonth>> {
    if end_year < start_year {
        return Err(DecomposeError::InvalidParameter(format!(
            "end year {} precedes start year {}",
            end_year, start_year
        )));
    }

    (start_year..=end_year)
        .flat_map(|year| (1..=12).map(move |month| YearMonth::new(year, month)))
        .collect()
}
