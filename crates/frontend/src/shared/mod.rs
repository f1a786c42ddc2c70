pub mod charts;
pub mod components;
pub mod icons;
