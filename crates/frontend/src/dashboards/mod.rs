pub mod d001_monthly_performance;

pub use d001_monthly_performance::ui::PerformanceDashboard;
