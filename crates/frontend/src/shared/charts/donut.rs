use contracts::dashboards::d100_strategic_optimizer::palette::slice_color;
use contracts::dashboards::d100_strategic_optimizer::{TimeAllocation, TimeCategory};
use std::f64::consts::PI;

/// Ring dimensions; angles in degrees, 0° at twelve o'clock, clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSpec {
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub padding_angle: f64,
}

impl Default for DonutSpec {
    fn default() -> Self {
        Self {
            cx: 100.0,
            cy: 100.0,
            inner_radius: 60.0,
            outer_radius: 80.0,
            padding_angle: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutArc {
    pub category: TimeCategory,
    pub percent: u8,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
    pub path: String,
}

impl DonutArc {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// One ring segment per non-empty slice, separated by `padding_angle`.
pub fn donut_arcs(alloc: &TimeAllocation, spec: &DonutSpec) -> Vec<DonutArc> {
    let total = alloc.total() as f64;
    if total <= 0.0 {
        return Vec::new();
    }

    let visible: Vec<_> = alloc
        .slices
        .iter()
        .enumerate()
        .filter(|(_, s)| s.percent > 0)
        .collect();
    let padding = if visible.len() > 1 {
        spec.padding_angle
    } else {
        0.0
    };
    let available = 360.0 - padding * visible.len() as f64;

    let mut angle = 0.0;
    let mut arcs = Vec::with_capacity(visible.len());
    for (idx, slice) in visible {
        let sweep = available * slice.percent as f64 / total;
        let start = angle;
        let end = angle + sweep;
        arcs.push(DonutArc {
            category: slice.category,
            percent: slice.percent,
            start_angle: start,
            end_angle: end,
            color: slice_color(idx),
            path: arc_path(spec, start, end),
        });
        angle = end + padding;
    }
    arcs
}

/// Categories repeated as text rows under the donut.
pub const LEGEND_CATEGORIES: [TimeCategory; 2] = [TimeCategory::Service, TimeCategory::Travel];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendRow {
    pub category: TimeCategory,
    pub percent: u8,
    pub color: &'static str,
}

/// Legend rows taken from the allocation slices, coloured by slice position
/// exactly like [`donut_arcs`].
pub fn legend_rows(alloc: &TimeAllocation) -> Vec<LegendRow> {
    alloc
        .slices
        .iter()
        .enumerate()
        .filter(|(_, s)| LEGEND_CATEGORIES.contains(&s.category))
        .map(|(idx, s)| LegendRow {
            category: s.category,
            percent: s.percent,
            color: slice_color(idx),
        })
        .collect()
}

fn point(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = (deg - 90.0) * PI / 180.0;
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// SVG path of a ring segment between two angles.
pub fn arc_path(spec: &DonutSpec, start: f64, end: f64) -> String {
    // Полный круг одной дугой не рисуется
    let end = if end - start >= 360.0 {
        start + 359.99
    } else {
        end
    };
    let large = if end - start > 180.0 { 1 } else { 0 };
    let (ox1, oy1) = point(spec.cx, spec.cy, spec.outer_radius, start);
    let (ox2, oy2) = point(spec.cx, spec.cy, spec.outer_radius, end);
    let (ix2, iy2) = point(spec.cx, spec.cy, spec.inner_radius, end);
    let (ix1, iy1) = point(spec.cx, spec.cy, spec.inner_radius, start);

    format!(
        "M {:.3} {:.3} A {r} {r} 0 {large} 1 {:.3} {:.3} L {:.3} {:.3} A {ir} {ir} 0 {large} 0 {:.3} {:.3} Z",
        ox1,
        oy1,
        ox2,
        oy2,
        ix2,
        iy2,
        ix1,
        iy1,
        r = spec.outer_radius,
        ir = spec.inner_radius,
        large = large,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_strategic_optimizer::{time_allocation, OperatingMode, TimeSlice};

    #[test]
    fn test_arcs_follow_allocation_order_and_palette() {
        let arcs = donut_arcs(&time_allocation(OperatingMode::Optimized), &DonutSpec::default());
        let cats: Vec<_> = arcs.iter().map(|a| a.category).collect();
        assert_eq!(cats, TimeCategory::all().to_vec());
        assert_eq!(arcs[0].color, "#002D62");
        assert_eq!(arcs[1].color, "#D4AF37");
        assert_eq!(arcs[2].color, "#94a3b8");
    }

    #[test]
    fn test_sweeps_cover_circle_minus_padding() {
        for mode in OperatingMode::all() {
            let arcs = donut_arcs(&time_allocation(mode), &DonutSpec::default());
            let swept: f64 = arcs.iter().map(|a| a.sweep()).sum();
            assert!((swept - 345.0).abs() < 1e-9, "{mode}: {swept}");
            let last = arcs.last().unwrap();
            assert!((last.end_angle + 5.0 - 360.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sweep_is_proportional() {
        let arcs = donut_arcs(&time_allocation(OperatingMode::Fragmented), &DonutSpec::default());
        // Service and travel share 45% each
        assert!((arcs[0].sweep() - arcs[1].sweep()).abs() < 1e-9);
        assert!((arcs[0].sweep() - 4.5 * arcs[2].sweep()).abs() < 1e-9);
    }

    #[test]
    fn test_legend_rows_match_arcs() {
        for mode in OperatingMode::all() {
            let alloc = time_allocation(mode);
            let arcs = donut_arcs(&alloc, &DonutSpec::default());
            let rows = legend_rows(&alloc);

            let cats: Vec<_> = rows.iter().map(|r| r.category).collect();
            assert_eq!(cats, LEGEND_CATEGORIES.to_vec(), "{mode}");
            for row in &rows {
                let arc = arcs.iter().find(|a| a.category == row.category).unwrap();
                assert_eq!(row.percent, arc.percent, "{mode} {:?}", row.category);
                assert_eq!(row.color, arc.color, "{mode} {:?}", row.category);
                assert_eq!(row.percent, alloc.percent_of(row.category));
            }
        }
    }

    #[test]
    fn test_legend_follows_reordered_slices() {
        let alloc = TimeAllocation {
            mode: OperatingMode::Fragmented,
            slices: vec![
                TimeSlice { category: TimeCategory::Travel, percent: 45 },
                TimeSlice { category: TimeCategory::Admin, percent: 10 },
                TimeSlice { category: TimeCategory::Service, percent: 45 },
            ],
        };
        let rows = legend_rows(&alloc);
        assert_eq!(rows[0].category, TimeCategory::Travel);
        assert_eq!(rows[0].color, slice_color(0));
        assert_eq!(rows[1].category, TimeCategory::Service);
        assert_eq!(rows[1].color, slice_color(2));
    }

    #[test]
    fn test_arc_path_shape() {
        let spec = DonutSpec::default();
        let path = arc_path(&spec, 0.0, 90.0);
        assert!(path.starts_with("M 100.000 20.000 A 80 80 0 0 1 180.000 100.000"));
        assert!(path.ends_with('Z'));
        assert_eq!(path.matches(" A ").count(), 2);

        let wide = arc_path(&spec, 0.0, 270.0);
        assert!(wide.contains("A 80 80 0 1 1"));
    }

    #[test]
    fn test_single_slice_has_no_padding() {
        let alloc = TimeAllocation {
            mode: OperatingMode::Optimized,
            slices: vec![TimeSlice {
                category: TimeCategory::Service,
                percent: 100,
            }],
        };
        let arcs = donut_arcs(&alloc, &DonutSpec::default());
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].sweep(), 360.0);
    }
}
