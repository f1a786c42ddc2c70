use crate::layout::use_dashboard_state;
use contracts::dashboards::d100_strategic_optimizer::OperatingMode;
use leptos::prelude::*;
use thaw::*;

/// Two-endpoint switch: "Fragmented" on the left, "Cluster-Optimized" on the right.
#[component]
pub fn ModeToggle() -> impl IntoView {
    let state = use_dashboard_state();
    let mode = state.mode();

    // Позиция переключателя; режим меняется только через DashboardState
    let checked = RwSignal::new(state.is_optimized());

    Effect::new(move |_| {
        state.set_optimized(checked.get());
    });

    Effect::new(move |_| {
        let on = mode.get() == OperatingMode::Optimized;
        if checked.get_untracked() != on {
            checked.set(on);
        }
    });

    let endpoint = move |m: OperatingMode| {
        let class = move || {
            if mode.get() == m {
                format!("mode-toggle__label mode-toggle__label--active mode-toggle__label--{}", m.as_str())
            } else {
                "mode-toggle__label".to_string()
            }
        };
        view! { <span class=class>{m.display_name()}</span> }
    };

    let [left, right] = OperatingMode::all();

    view! {
        <div class="mode-toggle" data-mode=move || mode.get().as_str()>
            {endpoint(left)}
            <Switch checked=checked/>
            {endpoint(right)}
        </div>
    }
}
