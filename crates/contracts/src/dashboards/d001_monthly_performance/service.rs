use super::dto::{PerformanceSummary, WeekStat};
use crate::domain::a001_production_month::{ProductionMonth, WeekPlan};

fn percent_of(value: u64, goal: u64) -> f64 {
    if goal > 0 {
        value as f64 / goal as f64 * 100.0
    } else {
        0.0
    }
}

fn average(total: u64, days: u32) -> f64 {
    if days > 0 {
        total as f64 / days as f64
    } else {
        0.0
    }
}

/// Sums the entries of one week.
///
/// Excluded days still contribute whatever was entered before the exclusion.
fn build_week_stat(state: &ProductionMonth, week: &WeekPlan) -> WeekStat {
    let mut produced = 0u64;
    let mut oes = 0u64;
    let mut filled_days = 0u32;

    for entry in week.days.iter().filter_map(|d| state.entry(*d)) {
        produced = produced.saturating_add(entry.quantity);
        oes = oes.saturating_add(entry.oes);
        if entry.is_filled() {
            filled_days += 1;
        }
    }

    WeekStat {
        id: week.id,
        label: week.label.clone(),
        goal: week.goal,
        days: week.days.clone(),
        produced,
        oes,
        percent: percent_of(produced, week.goal),
        filled_days,
    }
}

/// Computes the monthly KPIs from the form state.
///
/// Only days listed in the month's weeks are considered; entries typed for
/// other months stay in the state but are ignored here.
pub fn calculate_kpis(state: &ProductionMonth) -> PerformanceSummary {
    let weekly_stats: Vec<WeekStat> = state
        .weeks
        .iter()
        .map(|week| build_week_stat(state, week))
        .collect();

    let monthly_goal = weekly_stats
        .iter()
        .fold(0u64, |acc, w| acc.saturating_add(w.goal));
    let monthly_total = weekly_stats
        .iter()
        .fold(0u64, |acc, w| acc.saturating_add(w.produced));
    let total_oes = weekly_stats
        .iter()
        .fold(0u64, |acc, w| acc.saturating_add(w.oes));
    let filled_days: u32 = weekly_stats.iter().map(|w| w.filled_days).sum();

    let average_per_day = average(monthly_total, filled_days);

    // Future effective days: not excluded and nothing produced yet
    let remaining_days = state
        .weeks
        .iter()
        .flat_map(|w| w.days.iter())
        .filter(|d| !state.is_excluded(**d))
        .filter(|d| !state.entry(**d).is_some_and(|e| e.is_filled()))
        .count();

    let forecast = monthly_total as f64 + average_per_day * remaining_days as f64;

    // Current week: last week with any production, else the first one
    let current_week = weekly_stats
        .iter()
        .rev()
        .find(|w| w.produced > 0)
        .or_else(|| weekly_stats.first());

    let (current_week_total, current_week_average) = current_week
        .map(|w| (w.produced, average(w.produced, w.filled_days)))
        .unwrap_or((0, 0.0));

    PerformanceSummary {
        monthly_total,
        monthly_goal,
        monthly_percent: percent_of(monthly_total, monthly_goal),
        total_oes,
        missing_goal: monthly_goal.saturating_sub(monthly_total),
        weekly_stats,
        average_per_day,
        current_week_average,
        current_week_total,
        forecast: forecast.round() as u64,
        total_working_days: state.effective_working_days() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d001_monthly_performance::dto::Attainment;
    use crate::domain::a001_production_month::{EntryField, MonthPeriod};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state_for(year: i32, month: u32) -> ProductionMonth {
        ProductionMonth::new(MonthPeriod::new(year, month).unwrap(), 6000)
    }

    #[test]
    fn test_kpis_for_partially_filled_month() {
        let mut state = state_for(2024, 3);
        state.update_entry(date(2024, 3, 1), EntryField::Quantity, 5000);
        state.update_entry(date(2024, 3, 1), EntryField::Oes, 2);
        state.update_entry(date(2024, 3, 4), EntryField::Quantity, 6000);
        state.update_entry(date(2024, 3, 4), EntryField::Oes, 3);
        state.update_entry(date(2024, 3, 5), EntryField::Quantity, 7000);
        state.update_entry(date(2024, 3, 6), EntryField::Oes, 4);
        // Outside the selected month
        state.update_entry(date(2024, 4, 1), EntryField::Quantity, 9999);
        state.toggle_exclusion(date(2024, 3, 8));

        let kpis = calculate_kpis(&state);

        assert_eq!(kpis.monthly_goal, 120_000);
        assert_eq!(kpis.monthly_total, 18_000);
        assert_eq!(kpis.total_oes, 9);
        assert_eq!(kpis.missing_goal, 102_000);
        assert!((kpis.monthly_percent - 15.0).abs() < 1e-9);
        assert!((kpis.average_per_day - 6000.0).abs() < 1e-9);
        assert_eq!(kpis.total_working_days, 20);
        // 17 remaining effective days at 6000/day
        assert_eq!(kpis.forecast, 120_000);
        assert!(!kpis.forecast_beats_goal());
        assert!(!kpis.goal_exceeded());

        let week1 = &kpis.weekly_stats[0];
        assert_eq!(week1.produced, 5000);
        assert_eq!(week1.filled_days, 1);
        assert_eq!(week1.attainment(), Attainment::Near);

        let week2 = &kpis.weekly_stats[1];
        assert_eq!(week2.goal, 24_000);
        assert_eq!(week2.produced, 13_000);
        assert_eq!(week2.oes, 7);
        assert_eq!(week2.filled_days, 2);
        assert_eq!(week2.attainment(), Attainment::Behind);

        assert_eq!(kpis.current_week_total, 13_000);
        assert!((kpis.current_week_average - 6500.0).abs() < 1e-9);
        assert!(kpis.week_average_beats(6000));
    }

    #[test]
    fn test_kpis_without_data_fall_back_to_first_week() {
        let state = state_for(2024, 6);
        let kpis = calculate_kpis(&state);

        assert_eq!(kpis.monthly_total, 0);
        assert_eq!(kpis.monthly_goal, 20 * 6000);
        assert_eq!(kpis.missing_goal, kpis.monthly_goal);
        assert_eq!(kpis.forecast, 0);
        assert_eq!(kpis.current_week_total, 0);
        assert_eq!(kpis.current_week_average, 0.0);
        assert_eq!(kpis.average_per_day, 0.0);
        assert_eq!(kpis.weekly_stats.len(), 4);
    }

    #[test]
    fn test_kpis_with_no_weeks() {
        let mut state = state_for(2024, 6);
        state.weeks.clear();
        let kpis = calculate_kpis(&state);

        assert!(kpis.weekly_stats.is_empty());
        assert_eq!(kpis.monthly_percent, 0.0);
        assert_eq!(kpis.current_week_total, 0);
        assert_eq!(kpis.total_working_days, 0);
    }

    #[test]
    fn test_forecast_rounds_half_up() {
        // April 2024 has 22 working days
        let mut state = state_for(2024, 4);
        state.update_entry(date(2024, 4, 1), EntryField::Quantity, 1);
        state.update_entry(date(2024, 4, 2), EntryField::Quantity, 2);
        state.toggle_exclusion(date(2024, 4, 30));

        let kpis = calculate_kpis(&state);

        // 3 + 1.5 * 19 = 31.5
        assert_eq!(kpis.forecast, 32);
        assert_eq!(kpis.total_working_days, 21);
    }

    #[test]
    fn test_excluded_day_with_data_still_counts() {
        let mut state = state_for(2024, 4);
        state.update_entry(date(2024, 4, 3), EntryField::Quantity, 4000);
        state.toggle_exclusion(date(2024, 4, 3));

        let kpis = calculate_kpis(&state);

        assert_eq!(kpis.monthly_total, 4000);
        assert_eq!(kpis.weekly_stats[0].goal, 4 * 6000);
        assert_eq!(kpis.weekly_stats[0].percent, 4000.0 / 24_000.0 * 100.0);
        // 21 effective days still without data
        assert_eq!(kpis.forecast, 4000 + 4000 * 21);
    }

    #[test]
    fn test_current_week_is_last_week_with_production() {
        let mut state = state_for(2024, 4);
        state.update_entry(date(2024, 4, 3), EntryField::Quantity, 100);
        state.update_entry(date(2024, 4, 17), EntryField::Quantity, 300);
        state.update_entry(date(2024, 4, 18), EntryField::Quantity, 500);
        // OEs alone do not make a week current
        state.update_entry(date(2024, 4, 29), EntryField::Oes, 9);

        let kpis = calculate_kpis(&state);

        assert_eq!(kpis.current_week_total, 800);
        assert!((kpis.current_week_average - 400.0).abs() < 1e-9);
        assert_eq!(kpis.total_oes, 9);
    }

    #[test]
    fn test_zero_goal_week_reports_zero_percent() {
        let mut state = state_for(2024, 4);
        state.update_week_goal(1, 0).unwrap();
        state.update_entry(date(2024, 4, 1), EntryField::Quantity, 10);

        let kpis = calculate_kpis(&state);

        assert_eq!(kpis.weekly_stats[0].percent, 0.0);
        assert_eq!(kpis.weekly_stats[0].attainment(), Attainment::Behind);
    }
}
