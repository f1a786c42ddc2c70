//! D100 Strategic Optimizer: fragmented vs cluster-optimized operating model.
//!
//! All figures come from a fixed strategic analysis and are looked up, never
//! recomputed. The frontend only binds these values to widgets.

pub mod dto;
pub mod error;
pub mod mode;
pub mod palette;
pub mod provider;

pub use dto::*;
pub use error::DashboardError;
pub use mode::OperatingMode;
pub use provider::*;
