//! Pure SVG geometry for the dashboard charts.
//!
//! Components in `dashboards` only turn these shapes into `<rect>`/`<path>`
//! nodes, so everything here is testable without a browser.

pub mod bars;
pub mod donut;
pub mod scale;
pub mod scatter;

pub use bars::{grouped_bars, BarRect, PlotArea};
pub use donut::{arc_path, donut_arcs, legend_rows, DonutArc, DonutSpec, LegendRow};
pub use scale::{nice_scale, NiceScale};
pub use scatter::{scatter_pins, PinOffset};
