use crate::layout::use_dashboard_state;
use crate::shared::charts::{donut_arcs, legend_rows, DonutSpec};
use crate::shared::components::CardAnimated;
use contracts::dashboards::d100_strategic_optimizer::TimeCategory;
use leptos::prelude::*;

#[component]
pub fn TimeUtilization() -> impl IntoView {
    let model = use_dashboard_state().model();
    let spec = DonutSpec::default();

    let arcs = move || {
        model.with(|m| donut_arcs(&m.time_allocation, &spec))
            .into_iter()
            .map(|arc| {
                let tip = format!("{}: {}%", arc.category.label(), arc.percent);
                view! {
                    <path class="chart__slice" d=arc.path fill=arc.color>
                        <title>{tip}</title>
                    </path>
                }
            })
            .collect_view()
    };

    let legend = move || {
        model.with(|m| legend_rows(&m.time_allocation))
            .into_iter()
            .map(|row| {
                let value_class = match row.category {
                    TimeCategory::Travel => "time-legend__value time-legend__value--accent",
                    _ => "time-legend__value",
                };
                view! {
                    <div class="time-legend__row">
                        <span class="time-legend__name">
                            <span
                                class="time-legend__dot"
                                style=format!("background-color: {};", row.color)
                            ></span>
                            {row.category.label()}
                        </span>
                        <span class=value_class>{format!("{}%", row.percent)}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <CardAnimated title="Time Utilization" icon_name="clock" delay_ms=80>
            <svg
                class="chart chart--donut"
                viewBox="0 0 200 200"
                role="img"
                aria-label="Share of working time spent on service, travel and admin"
            >
                {arcs}
            </svg>
            <div class="time-legend">{legend}</div>
        </CardAnimated>
    }
}
