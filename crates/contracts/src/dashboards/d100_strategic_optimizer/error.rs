use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("unhandled mode: {0}")]
    UnhandledMode(String),
}
