pub mod dto;
pub mod service;

pub use dto::{Attainment, PerformanceSummary, WeekStat};
pub use service::calculate_kpis;
