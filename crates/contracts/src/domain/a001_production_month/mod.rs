pub mod aggregate;
pub mod calendar;

pub use aggregate::{DailyEntry, EntryField, MonthShift, ProductionMonth, WeekPlan};
pub use calendar::{generate_weeks, is_weekend, MonthPeriod};
