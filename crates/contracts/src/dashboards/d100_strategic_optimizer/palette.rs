//! Navy & gold palette shared by charts and legend dots.

pub const NAVY: &str = "#002D62";
pub const GOLD: &str = "#D4AF37";
pub const SLATE: &str = "#94a3b8";

/// Slice colours, cycled by index.
pub const SLICE_COLORS: [&str; 3] = [NAVY, GOLD, SLATE];

pub fn slice_color(index: usize) -> &'static str {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Bar colour per comparison column.
pub const FRAGMENTED_BAR: &str = SLATE;
pub const OPTIMIZED_BAR: &str = NAVY;
