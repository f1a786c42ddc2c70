use super::cluster_visualization::ClusterVisualization;
use super::comparison_chart::ComparisonChart;
use super::kpi_row::KpiRow;
use super::strategic_validation::StrategicValidation;
use super::time_utilization::TimeUtilization;
use crate::layout::use_dashboard_state;
use leptos::prelude::*;

/// Strategic Optimizer dashboard: KPI row, charts and panels for the current mode.
#[component]
pub fn StrategicOptimizerDashboard() -> impl IntoView {
    let mode = use_dashboard_state().mode();

    view! {
        <div
            id="d100_strategic_optimizer--dashboard"
            data-page-category="dashboard"
            class="page page--dashboard"
            data-mode=move || mode.get().as_str()
        >
            <KpiRow />

            <div class="dashboard-grid">
                <div class="dashboard-grid__main">
                    <ComparisonChart />
                    <ClusterVisualization />
                </div>
                <div class="dashboard-grid__side">
                    <TimeUtilization />
                    <StrategicValidation />
                </div>
            </div>
        </div>
    }
}
