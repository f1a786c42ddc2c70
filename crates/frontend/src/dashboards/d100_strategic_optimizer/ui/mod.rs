pub mod cluster_visualization;
pub mod comparison_chart;
pub mod dashboard;
pub mod kpi_row;
pub mod strategic_validation;
pub mod time_utilization;

pub use dashboard::StrategicOptimizerDashboard;
