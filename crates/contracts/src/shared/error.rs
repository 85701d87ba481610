use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by tracker state mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("invalid month {month} for year {year} (expected 1..=12)")]
    InvalidMonth { year: i32, month: u32 },

    #[error("week {0} does not exist in the selected month")]
    WeekNotFound(u32),

    #[error("date {date} is outside of {period}")]
    DateOutsideMonth { date: NaiveDate, period: String },
}
