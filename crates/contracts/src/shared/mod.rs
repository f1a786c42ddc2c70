pub mod format;
pub mod indicators;
