use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How far a week got towards its goal, drives the % badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attainment {
    /// 100% or more
    Met,
    /// From 80% up to 100%
    Near,
    Behind,
}

impl Attainment {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 100.0 {
            Self::Met
        } else if percent >= 80.0 {
            Self::Near
        } else {
            Self::Behind
        }
    }
}

/// Aggregated production of one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekStat {
    pub id: u32,
    pub label: String,
    pub goal: u64,
    pub days: Vec<NaiveDate>,
    /// Sum of quantities
    pub produced: u64,
    /// Sum of order entries
    pub oes: u64,
    /// produced / goal * 100, 0 when there is no goal
    pub percent: f64,
    /// Days with quantity > 0
    pub filled_days: u32,
}

impl WeekStat {
    pub fn attainment(&self) -> Attainment {
        Attainment::from_percent(self.percent)
    }
}

/// KPIs shown on the input summary table and the performance dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub monthly_total: u64,
    pub monthly_goal: u64,
    pub monthly_percent: f64,
    pub total_oes: u64,
    /// Units still missing to reach the monthly goal (never negative)
    pub missing_goal: u64,
    pub weekly_stats: Vec<WeekStat>,
    /// Average over filled days of the whole month
    pub average_per_day: f64,
    /// Average over filled days of the current week
    pub current_week_average: f64,
    pub current_week_total: u64,
    /// Month closing estimate, rounded to whole units
    pub forecast: u64,
    /// Working days of the month that are not excluded
    pub total_working_days: u32,
}

impl PerformanceSummary {
    pub fn week_average_beats(&self, daily_goal: u64) -> bool {
        self.current_week_average > daily_goal as f64
    }

    pub fn forecast_beats_goal(&self) -> bool {
        self.forecast > self.monthly_goal
    }

    pub fn goal_exceeded(&self) -> bool {
        self.monthly_percent > 100.0
    }
}
