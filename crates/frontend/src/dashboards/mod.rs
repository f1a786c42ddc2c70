pub mod d100_strategic_optimizer;

pub use d100_strategic_optimizer::ui::StrategicOptimizerDashboard;
