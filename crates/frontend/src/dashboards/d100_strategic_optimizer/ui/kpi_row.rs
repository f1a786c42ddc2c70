use crate::layout::use_dashboard_state;
use crate::shared::components::StatCard;
use contracts::dashboards::d100_strategic_optimizer::{
    kpi_cards, kpi_set, DashboardModel, OperatingMode,
};
use contracts::shared::indicators::{IndicatorMeta, IndicatorValue};
use leptos::prelude::*;
use std::collections::HashMap;

/// Reads one field of the card `id` from the current model.
fn bound<T>(
    model: Memo<DashboardModel>,
    id: String,
    pick: fn(&IndicatorValue) -> T,
    fallback: T,
) -> Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    Signal::derive(move || {
        model.with(|m| {
            m.kpi_cards
                .iter()
                .find(|c| c.value.id.0 == id)
                .map(|c| pick(&c.value))
                .unwrap_or_else(|| fallback.clone())
        })
    })
}

#[component]
pub fn KpiRow() -> impl IntoView {
    let model = use_dashboard_state().model();
    let set_meta = kpi_set();

    let cols_class = match set_meta.columns {
        2 => "indicator-set__grid indicator-set__grid--cols-2",
        3 => "indicator-set__grid indicator-set__grid--cols-3",
        _ => "indicator-set__grid indicator-set__grid--cols-4",
    };

    // Метаданные карточек от режима не зависят
    let meta_map: HashMap<String, IndicatorMeta> = kpi_cards(OperatingMode::default())
        .into_iter()
        .map(|c| (c.meta.id.0.clone(), c.meta))
        .collect();

    let cards: Vec<_> = set_meta
        .indicators
        .iter()
        .filter_map(|ind_id| {
            let meta = meta_map.get(&ind_id.0)?.clone();
            let id = ind_id.0.clone();

            let value = bound(model, id.clone(), |v| v.value, 0.0);
            let trend = bound(model, id.clone(), |v| v.trend.clone(), None);
            let badge = bound(model, id.clone(), |v| v.badge.clone(), None);
            let subtitle = bound(model, id, |v| v.subtitle.clone(), None);

            Some(view! {
                <StatCard
                    label=meta.label
                    icon_name=meta.icon
                    value=value
                    format=meta.format
                    trend=trend
                    badge=badge
                    subtitle=subtitle
                    hint=meta.description
                />
            })
        })
        .collect();

    view! {
        <section class="indicator-set" aria-label=set_meta.label>
            <div class=cols_class>
                {cards}
            </div>
        </section>
    }
}
