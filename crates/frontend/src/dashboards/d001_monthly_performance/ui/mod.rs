pub mod dashboard;

pub use dashboard::PerformanceDashboard;
