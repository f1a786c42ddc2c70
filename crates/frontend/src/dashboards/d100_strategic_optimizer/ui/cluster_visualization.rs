use crate::layout::use_dashboard_state;
use crate::shared::charts::scatter_pins;
use crate::shared::components::CardAnimated;
use crate::shared::icons::{icon, icon_sized};
use contracts::dashboards::d100_strategic_optimizer::ClusterPanel;
use leptos::prelude::*;

const SCATTER_COLUMNS: usize = 4;

/// Mock neighborhood map: one dense pin when clustered, scattered pins otherwise.
#[component]
pub fn ClusterVisualization() -> impl IntoView {
    let model = use_dashboard_state().model();

    let body = move || match model.with(|m| m.cluster_panel.clone()) {
        ClusterPanel::Clustered {
            headline,
            detail,
            note,
        } => view! {
            <div class="cluster-map__clustered">
                <div class="cluster-map__pin">
                    <span class="cluster-map__pulse"></span>
                    {icon_sized("map-pin", 48)}
                </div>
                <p class="cluster-map__headline">{headline}</p>
                <p class="cluster-map__detail">{detail}</p>
                <p class="cluster-map__note">{note}</p>
            </div>
        }
        .into_any(),
        ClusterPanel::Scattered { warning, pin_count } => {
            // Позиции случайны на каждый рендер, это только иллюстрация
            let pins = scatter_pins(pin_count, SCATTER_COLUMNS, js_sys::Math::random)
                .into_iter()
                .map(|pin| {
                    let style = format!(
                        "grid-column: {}; grid-row: {}; margin-top: {:.0}px; margin-left: {:.0}px;",
                        pin.column + 1,
                        pin.row + 1,
                        pin.margin_top,
                        pin.margin_left
                    );
                    view! { <span class="cluster-map__scatter-pin" style=style>{icon("map-pin")}</span> }
                })
                .collect_view();

            view! {
                <div class="cluster-map__scattered">
                    <div class="cluster-map__grid">{pins}</div>
                    <div class="cluster-map__overlay">
                        <p class="cluster-map__warning">
                            {icon_sized("alert-triangle", 18)}
                            {warning}
                        </p>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <CardAnimated title="Neighborhood Cluster Visualization" icon_name="map-pin" delay_ms=80>
            <div class="cluster-map">{body}</div>
        </CardAnimated>
    }
}
