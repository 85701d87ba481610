use super::calendar::{generate_weeks, MonthPeriod};
use crate::shared::error::TrackerError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Production recorded for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Date of production (YYYY-MM-DD)
    pub date: NaiveDate,

    /// Units produced
    pub quantity: u64,

    /// Order entries (OE) processed
    pub oes: u64,
}

impl DailyEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            quantity: 0,
            oes: 0,
        }
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    /// A day counts as filled once it has any production
    pub fn is_filled(&self) -> bool {
        self.quantity > 0
    }
}

/// Editable field of a [`DailyEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryField {
    Quantity,
    Oes,
}

/// One visual week of the month with its production goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub id: u32,
    pub label: String,
    pub goal: u64,
    /// Working days (Mon-Fri) of this week, in order
    pub days: Vec<NaiveDate>,
}

impl WeekPlan {
    pub fn new(id: u32, days: Vec<NaiveDate>, daily_goal: u64) -> Self {
        let goal = (days.len() as u64).saturating_mul(daily_goal);
        Self {
            id,
            label: format!("{}ª SEMANA", id),
            goal,
            days,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthShift {
    Previous,
    Next,
}

/// In-memory state of the production form.
///
/// Entries and exclusions are keyed by date and survive month navigation,
/// so switching back to a month shows what was typed before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionMonth {
    pub daily_entries: BTreeMap<NaiveDate, DailyEntry>,
    pub excluded_dates: BTreeSet<NaiveDate>,
    pub weeks: Vec<WeekPlan>,
    pub daily_goal: u64,
    pub period: MonthPeriod,
}

impl ProductionMonth {
    pub fn new(period: MonthPeriod, daily_goal: u64) -> Self {
        Self {
            daily_entries: BTreeMap::new(),
            excluded_dates: BTreeSet::new(),
            weeks: generate_weeks(period, daily_goal),
            daily_goal,
            period,
        }
    }

    /// State opened on the month containing `today`
    pub fn for_date(today: NaiveDate, daily_goal: u64) -> Self {
        Self::new(MonthPeriod::containing(today), daily_goal)
    }

    pub fn entry(&self, date: NaiveDate) -> Option<&DailyEntry> {
        self.daily_entries.get(&date)
    }

    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        self.excluded_dates.contains(&date)
    }

    /// Working days of the week that are not excluded from the goal
    pub fn effective_days(&self, week: &WeekPlan) -> usize {
        week.days.iter().filter(|d| !self.is_excluded(**d)).count()
    }

    pub fn effective_working_days(&self) -> usize {
        self.weeks.iter().map(|w| self.effective_days(w)).sum()
    }

    fn effective_goal(&self, week: &WeekPlan) -> u64 {
        (self.effective_days(week) as u64).saturating_mul(self.daily_goal)
    }

    /// Moves to the adjacent month and rebuilds its weeks.
    ///
    /// Goals of the new month already account for exclusions made earlier.
    pub fn shift_month(&mut self, shift: MonthShift) -> Result<(), TrackerError> {
        let period = match shift {
            MonthShift::Previous => self.period.previous()?,
            MonthShift::Next => self.period.next()?,
        };

        let mut weeks = generate_weeks(period, self.daily_goal);
        for week in &mut weeks {
            week.goal = self.effective_goal(week);
        }

        self.period = period;
        self.weeks = weeks;
        Ok(())
    }

    /// Sets one field of the day's entry, creating the entry when missing
    pub fn update_entry(&mut self, date: NaiveDate, field: EntryField, value: u64) {
        let entry = self
            .daily_entries
            .entry(date)
            .or_insert_with(|| DailyEntry::new(date));

        match field {
            EntryField::Quantity => entry.quantity = value,
            EntryField::Oes => entry.oes = value,
        }
    }

    /// Manual goal override for a single week
    pub fn update_week_goal(&mut self, week_id: u32, value: u64) -> Result<(), TrackerError> {
        let week = self
            .weeks
            .iter_mut()
            .find(|w| w.id == week_id)
            .ok_or(TrackerError::WeekNotFound(week_id))?;
        week.goal = value;
        Ok(())
    }

    /// Changes the daily goal and recomputes every week goal.
    ///
    /// Manual week overrides are replaced.
    pub fn update_daily_goal(&mut self, value: u64) {
        self.daily_goal = value;

        let goals: Vec<u64> = self.weeks.iter().map(|w| self.effective_goal(w)).collect();
        for (week, goal) in self.weeks.iter_mut().zip(goals) {
            week.goal = goal;
        }
    }

    /// Flips the exclusion flag of a day and returns the new flag.
    ///
    /// Only the goal of the week holding the day is recomputed.
    pub fn toggle_exclusion(&mut self, date: NaiveDate) -> bool {
        let excluded = if self.excluded_dates.remove(&date) {
            false
        } else {
            self.excluded_dates.insert(date);
            true
        };

        if let Some(idx) = self.weeks.iter().position(|w| w.contains(date)) {
            let goal = self.effective_goal(&self.weeks[idx]);
            self.weeks[idx].goal = goal;
        }

        excluded
    }

    /// Checks that the date is a day of the selected month
    pub fn ensure_in_month(&self, date: NaiveDate) -> Result<(), TrackerError> {
        if self.period.contains(date) {
            Ok(())
        } else {
            Err(TrackerError::DateOutsideMonth {
                date,
                period: self.period.key(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march_2024() -> ProductionMonth {
        ProductionMonth::new(MonthPeriod::new(2024, 3).unwrap(), 6000)
    }

    #[test]
    fn test_for_date_opens_containing_month() {
        let state = ProductionMonth::for_date(date(2024, 3, 20), 6000);
        assert_eq!(state.period.key(), "2024-03");
        assert_eq!(state.weeks.len(), 5);
        assert!(state.daily_entries.is_empty());
        assert_eq!(state.effective_working_days(), 21);
    }

    #[test]
    fn test_update_entry_creates_and_updates() {
        let mut state = march_2024();
        let day = date(2024, 3, 4);

        state.update_entry(day, EntryField::Oes, 3);
        let entry = state.entry(day).unwrap();
        assert_eq!(entry.quantity, 0);
        assert_eq!(entry.oes, 3);
        assert_eq!(entry.day_of_month(), 4);

        state.update_entry(day, EntryField::Quantity, 5500);
        let entry = state.entry(day).unwrap();
        assert_eq!(entry.quantity, 5500);
        assert_eq!(entry.oes, 3);
        assert!(entry.is_filled());
    }

    #[test]
    fn test_toggle_exclusion_recomputes_only_its_week() {
        let mut state = march_2024();
        state.update_week_goal(3, 1).unwrap();

        assert!(state.toggle_exclusion(date(2024, 3, 5)));
        assert!(state.is_excluded(date(2024, 3, 5)));
        assert_eq!(state.weeks[1].goal, 4 * 6000);
        // Untouched week keeps its manual override
        assert_eq!(state.weeks[2].goal, 1);

        assert!(!state.toggle_exclusion(date(2024, 3, 5)));
        assert!(!state.is_excluded(date(2024, 3, 5)));
        assert_eq!(state.weeks[1].goal, 5 * 6000);
    }

    #[test]
    fn test_exclusion_keeps_entry() {
        let mut state = march_2024();
        let day = date(2024, 3, 6);
        state.update_entry(day, EntryField::Quantity, 700);
        state.toggle_exclusion(day);
        assert_eq!(state.entry(day).map(|e| e.quantity), Some(700));
    }

    #[test]
    fn test_update_daily_goal_overrides_manual_goals() {
        let mut state = march_2024();
        state.toggle_exclusion(date(2024, 3, 1));
        state.update_week_goal(2, 123).unwrap();

        state.update_daily_goal(1000);

        assert_eq!(state.daily_goal, 1000);
        assert_eq!(state.weeks[0].goal, 0);
        assert_eq!(state.weeks[1].goal, 5000);
        assert_eq!(state.weeks[4].goal, 5000);
    }

    #[test]
    fn test_update_week_goal_unknown_week() {
        let mut state = march_2024();
        let before = state.clone();
        assert_eq!(
            state.update_week_goal(42, 10),
            Err(TrackerError::WeekNotFound(42))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_shift_month_keeps_data_and_applies_exclusions() {
        let mut state = march_2024();
        state.update_daily_goal(100);
        state.update_entry(date(2024, 3, 4), EntryField::Quantity, 50);

        state.shift_month(MonthShift::Next).unwrap();
        assert_eq!(state.period.key(), "2024-04");
        // April 2024 starts on Monday: first week is 1..=5
        state.toggle_exclusion(date(2024, 4, 2));
        assert_eq!(state.weeks[0].goal, 400);

        state.shift_month(MonthShift::Previous).unwrap();
        state.shift_month(MonthShift::Next).unwrap();
        assert_eq!(state.weeks[0].goal, 400);
        assert_eq!(state.weeks[1].goal, 500);

        state.shift_month(MonthShift::Previous).unwrap();
        assert_eq!(state.period.key(), "2024-03");
        assert_eq!(state.entry(date(2024, 3, 4)).map(|e| e.quantity), Some(50));
    }

    #[test]
    fn test_shift_month_wraps_year() {
        let mut state = ProductionMonth::new(MonthPeriod::new(2025, 1).unwrap(), 6000);
        state.shift_month(MonthShift::Previous).unwrap();
        assert_eq!((state.period.year(), state.period.month()), (2024, 12));
        state.shift_month(MonthShift::Next).unwrap();
        state.shift_month(MonthShift::Next).unwrap();
        assert_eq!((state.period.year(), state.period.month()), (2025, 2));
    }

    #[test]
    fn test_ensure_in_month() {
        let state = march_2024();
        assert!(state.ensure_in_month(date(2024, 3, 31)).is_ok());
        assert!(matches!(
            state.ensure_in_month(date(2024, 4, 1)),
            Err(TrackerError::DateOutsideMonth { .. })
        ));
    }
}
