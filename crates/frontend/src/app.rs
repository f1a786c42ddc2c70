use crate::dashboards::StrategicOptimizerDashboard;
use crate::layout::{DashboardState, Shell};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single owner of the operating mode; every fresh load starts optimized.
    provide_context(DashboardState::new());

    view! {
        <Shell>
            <StrategicOptimizerDashboard />
        </Shell>
    }
}
