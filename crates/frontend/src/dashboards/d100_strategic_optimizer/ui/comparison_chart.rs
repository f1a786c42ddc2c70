use crate::shared::charts::bars::band_center;
use crate::shared::charts::{grouped_bars, nice_scale, PlotArea};
use crate::shared::components::CardAnimated;
use contracts::dashboards::d100_strategic_optimizer::palette::{FRAGMENTED_BAR, OPTIMIZED_BAR};
use contracts::dashboards::d100_strategic_optimizer::{comparison_series, OperatingMode};
use contracts::shared::format::{format_compact_inr, format_grouped, RUPEE};
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 560.0;
const VIEW_HEIGHT: f64 = 350.0;
const TICKS: usize = 4;

fn series_style(mode: OperatingMode) -> (&'static str, &'static str) {
    match mode {
        OperatingMode::Fragmented => (FRAGMENTED_BAR, "Fragmented Model"),
        OperatingMode::Optimized => (OPTIMIZED_BAR, "Cluster Model"),
    }
}

/// Grouped bars of monthly revenue and profit. Both models are always shown,
/// so the chart does not follow the toggle.
#[component]
pub fn ComparisonChart() -> impl IntoView {
    let series = comparison_series();
    let scale = nice_scale(series.max_value(), TICKS);
    let area = PlotArea {
        left: 64.0,
        top: 16.0,
        width: VIEW_WIDTH - 64.0 - 16.0,
        height: VIEW_HEIGHT - 16.0 - 40.0,
    };

    let grid = scale
        .ticks()
        .into_iter()
        .map(|tick| {
            let y = format!("{:.1}", area.y_for(&scale, tick));
            view! {
                <g class="chart__tick">
                    <line
                        x1=format!("{:.1}", area.left)
                        x2=format!("{:.1}", area.left + area.width)
                        y1=y.clone()
                        y2=y.clone()
                        stroke="#e2e8f0"
                        stroke-dasharray="3 3"
                    />
                    <text
                        x=format!("{:.1}", area.left - 8.0)
                        y=y
                        text-anchor="end"
                        dominant-baseline="middle"
                        class="chart__axis-label"
                    >
                        {format_compact_inr(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let rows = series.rows.len();
    let categories = series
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            view! {
                <text
                    x=format!("{:.1}", band_center(&area, rows, i))
                    y=format!("{:.1}", area.bottom() + 24.0)
                    text-anchor="middle"
                    class="chart__axis-label"
                >
                    {row.category.label()}
                </text>
            }
        })
        .collect_view();

    let bars = grouped_bars(&series, &scale, &area)
        .into_iter()
        .map(|bar| {
            let (fill, name) = series_style(bar.mode);
            let tip = format!("{}: {}{}", name, RUPEE, format_grouped(bar.value.round() as i64));
            view! {
                <rect
                    class="chart__bar"
                    x=format!("{:.1}", bar.x)
                    y=format!("{:.1}", bar.y)
                    width=format!("{:.1}", bar.width)
                    height=format!("{:.1}", bar.height)
                    rx="4"
                    fill=fill
                >
                    <title>{tip}</title>
                </rect>
            }
        })
        .collect_view();

    let legend = [OperatingMode::Fragmented, OperatingMode::Optimized]
        .into_iter()
        .map(|mode| {
            let (fill, name) = series_style(mode);
            view! {
                <span class="chart-legend__item">
                    <span class="chart-legend__swatch" style=format!("background-color: {};", fill)></span>
                    {name}
                </span>
            }
        })
        .collect_view();

    view! {
        <CardAnimated title="Monthly Revenue & Profit Comparison" icon_name="bar-chart">
            <svg
                class="chart chart--bars"
                viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
                preserveAspectRatio="xMidYMid meet"
                role="img"
                aria-label="Monthly revenue and profit, fragmented vs cluster model"
            >
                {grid}
                <line
                    x1=format!("{:.1}", area.left)
                    x2=format!("{:.1}", area.left + area.width)
                    y1=format!("{:.1}", area.bottom())
                    y2=format!("{:.1}", area.bottom())
                    stroke="#94a3b8"
                />
                {bars}
                {categories}
            </svg>
            <div class="chart-legend">{legend}</div>
        </CardAnimated>
    }
}
