use super::scale::NiceScale;
use contracts::dashboards::d100_strategic_optimizer::{ComparisonSeries, OperatingMode};

/// Inner plotting rectangle, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Y coordinate of `value` on `scale`.
    pub fn y_for(&self, scale: &NiceScale, value: f64) -> f64 {
        self.bottom() - scale.ratio(value) * self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub row: usize,
    pub mode: OperatingMode,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Share of each category band left empty on both sides.
const BAND_PADDING: f64 = 0.2;
const BAR_GAP: f64 = 4.0;

/// Column order inside every category group.
pub const SERIES_ORDER: [OperatingMode; 2] = [OperatingMode::Fragmented, OperatingMode::Optimized];

/// Lays out one group per comparison row with a fragmented and an optimized bar.
pub fn grouped_bars(series: &ComparisonSeries, scale: &NiceScale, area: &PlotArea) -> Vec<BarRect> {
    if series.rows.is_empty() {
        return Vec::new();
    }

    let band = area.width / series.rows.len() as f64;
    let inner = band * (1.0 - 2.0 * BAND_PADDING);
    let bar_width = ((inner - BAR_GAP) / SERIES_ORDER.len() as f64).max(1.0);

    let mut bars = Vec::with_capacity(series.rows.len() * SERIES_ORDER.len());
    for (row_idx, row) in series.rows.iter().enumerate() {
        let group_left = area.left + band * row_idx as f64 + band * BAND_PADDING;
        for (col, mode) in SERIES_ORDER.iter().enumerate() {
            let value = row.value_for(*mode);
            let height = scale.ratio(value) * area.height;
            bars.push(BarRect {
                row: row_idx,
                mode: *mode,
                value,
                x: group_left + col as f64 * (bar_width + BAR_GAP),
                y: area.bottom() - height,
                width: bar_width,
                height,
            });
        }
    }
    bars
}

/// Horizontal centre of a category band, for x-axis labels.
pub fn band_center(area: &PlotArea, rows: usize, row: usize) -> f64 {
    let band = area.width / rows.max(1) as f64;
    area.left + band * (row as f64 + 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::charts::nice_scale;
    use contracts::dashboards::d100_strategic_optimizer::comparison_series;

    fn area() -> PlotArea {
        PlotArea {
            left: 60.0,
            top: 10.0,
            width: 400.0,
            height: 300.0,
        }
    }

    #[test]
    fn test_two_bars_per_row_in_series_order() {
        let series = comparison_series();
        let scale = nice_scale(series.max_value(), 4);
        let bars = grouped_bars(&series, &scale, &area());

        assert_eq!(bars.len(), 4);
        let modes: Vec<_> = bars.iter().map(|b| b.mode).collect();
        assert_eq!(
            modes,
            vec![
                OperatingMode::Fragmented,
                OperatingMode::Optimized,
                OperatingMode::Fragmented,
                OperatingMode::Optimized
            ]
        );
        assert_eq!(bars[1].value, 422400.0);
        assert_eq!(bars[2].value, 18144.0);
    }

    #[test]
    fn test_bars_stay_inside_plot_area() {
        let series = comparison_series();
        let scale = nice_scale(series.max_value(), 4);
        let a = area();
        for bar in grouped_bars(&series, &scale, &a) {
            assert!(bar.height >= 0.0 && bar.height <= a.height);
            assert!((bar.y + bar.height - a.bottom()).abs() < 1e-9);
            assert!(bar.x >= a.left && bar.x + bar.width <= a.left + a.width);
        }
    }

    #[test]
    fn test_bar_height_grows_with_value() {
        let series = comparison_series();
        let scale = nice_scale(series.max_value(), 4);
        let bars = grouped_bars(&series, &scale, &area());
        // Revenue: 151200 < 422400; profit: 18144 < 202752
        assert!(bars[0].height < bars[1].height);
        assert!(bars[2].height < bars[3].height);
        assert!(bars[2].height < bars[0].height);
    }

    #[test]
    fn test_empty_series_has_no_bars() {
        let series = ComparisonSeries { rows: vec![] };
        let scale = nice_scale(0.0, 4);
        assert!(grouped_bars(&series, &scale, &area()).is_empty());
    }

    #[test]
    fn test_band_center() {
        assert_eq!(band_center(&area(), 2, 0), 160.0);
        assert_eq!(band_center(&area(), 2, 1), 360.0);
    }
}
