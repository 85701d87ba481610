//! Calendar helpers for the production month
//!
//! Working days are grouped into "visual weeks": the rows of a calendar
//! that starts on Sunday. Weekends never appear in a week, and a week with
//! no working days (a month starting on Saturday) is skipped entirely.

use super::aggregate::WeekPlan;
use crate::shared::error::TrackerError;
use crate::shared::month_names::month_name;
use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A calendar month. Always holds the first day of a representable month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "PeriodParts", into = "PeriodParts")]
pub struct MonthPeriod {
    first_day: NaiveDate,
}

/// Wire shape of [`MonthPeriod`]: `{ "year": 2024, "month": 3 }`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PeriodParts {
    year: i32,
    month: u32,
}

impl TryFrom<PeriodParts> for MonthPeriod {
    type Error = TrackerError;

    fn try_from(parts: PeriodParts) -> Result<Self, Self::Error> {
        MonthPeriod::new(parts.year, parts.month)
    }
}

impl From<MonthPeriod> for PeriodParts {
    fn from(period: MonthPeriod) -> Self {
        Self {
            year: period.year(),
            month: period.month(),
        }
    }
}

impl MonthPeriod {
    /// `month` is 1-based (1 = January)
    pub fn new(year: i32, month: u32) -> Result<Self, TrackerError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or(TrackerError::InvalidMonth { year, month })
    }

    /// Month the given date belongs to
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Every day of the month in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month();
        self.first_day
            .iter_days()
            .take_while(move |d| d.month() == month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Following month, wrapping December into January of the next year
    pub fn next(&self) -> Result<Self, TrackerError> {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .ok_or(TrackerError::InvalidMonth {
                year: self.year(),
                month: self.month() + 1,
            })
    }

    /// Preceding month, wrapping January into December of the previous year
    pub fn previous(&self) -> Result<Self, TrackerError> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .ok_or(TrackerError::InvalidMonth {
                year: self.year(),
                month: 0,
            })
    }

    /// Period key in format "YYYY-MM"
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year(), self.month())
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month()).unwrap_or_default()
    }
}

impl std::fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year())
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Builds the visual weeks of a month.
///
/// A week closes on Saturday or on the last day of the month, and is only
/// emitted when it holds at least one working day. Ids count emitted weeks
/// from 1. The default goal is `working days * daily_goal`.
pub fn generate_weeks(period: MonthPeriod, daily_goal: u64) -> Vec<WeekPlan> {
    let last_day = period.last_day();
    let mut weeks: Vec<WeekPlan> = Vec::new();
    let mut buffer: Vec<NaiveDate> = Vec::new();

    for date in period.days() {
        if !is_weekend(date) {
            buffer.push(date);
        }

        let closes_row = date.weekday() == Weekday::Sat || date == last_day;
        if closes_row && !buffer.is_empty() {
            let id = weeks.len() as u32 + 1;
            weeks.push(WeekPlan::new(id, std::mem::take(&mut buffer), daily_goal));
        }
    }

    weeks
}
