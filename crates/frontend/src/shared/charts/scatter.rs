/// Position of one pin in the scattered (fragmented) map illustration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinOffset {
    pub column: usize,
    pub row: usize,
    /// px
    pub margin_top: f64,
    /// px
    pub margin_left: f64,
}

pub const MAX_MARGIN_TOP: f64 = 100.0;
pub const MAX_MARGIN_LEFT: f64 = 50.0;

/// Places `count` pins on a grid of `columns`, each nudged by random margins.
///
/// `rng` must yield values in `0.0..1.0` (e.g. `js_sys::Math::random`);
/// out-of-range values are clamped. Placement is purely cosmetic.
pub fn scatter_pins(count: usize, columns: usize, mut rng: impl FnMut() -> f64) -> Vec<PinOffset> {
    let columns = columns.max(1);
    (0..count)
        .map(|i| PinOffset {
            column: i % columns,
            row: i / columns,
            margin_top: rng().clamp(0.0, 1.0) * MAX_MARGIN_TOP,
            margin_left: rng().clamp(0.0, 1.0) * MAX_MARGIN_LEFT,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pins_fill_grid_row_by_row() {
        let pins = scatter_pins(8, 4, || 0.0);
        assert_eq!(pins.len(), 8);
        assert_eq!((pins[3].column, pins[3].row), (3, 0));
        assert_eq!((pins[4].column, pins[4].row), (0, 1));
        assert_eq!((pins[7].column, pins[7].row), (3, 1));
    }

    #[test]
    fn test_margins_stay_in_bounds() {
        let mut values = [0.5, 2.0, -1.0, 0.25].into_iter().cycle();
        let pins = scatter_pins(4, 4, move || values.next().unwrap_or(0.0));
        assert_eq!(pins[0].margin_top, 50.0);
        assert_eq!(pins[0].margin_left, 50.0);
        assert_eq!(pins[1].margin_top, 0.0);
        assert_eq!(pins[1].margin_left, 12.5);
        for pin in pins {
            assert!((0.0..=MAX_MARGIN_TOP).contains(&pin.margin_top));
            assert!((0.0..=MAX_MARGIN_LEFT).contains(&pin.margin_left));
        }
    }

    #[test]
    fn test_zero_columns_does_not_panic() {
        let pins = scatter_pins(3, 0, || 0.9);
        assert_eq!(pins.iter().map(|p| p.row).collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
