pub mod header;
pub mod mode_toggle;

pub use header::Header;
pub use mode_toggle::ModeToggle;
