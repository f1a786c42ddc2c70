use crate::layout::use_dashboard_state;
use crate::shared::components::CardAnimated;
use leptos::prelude::*;

/// Qualitative verdict for the current mode: status, logistics tax, CLV and CAC.
#[component]
pub fn StrategicValidation() -> impl IntoView {
    let model = use_dashboard_state().model();

    let status = move || model.with(|m| m.snapshot.status);
    let tax_label = move || model.with(|m| m.snapshot.logistics_tax.label);
    let tax_class = move || {
        let severity = model.with(|m| m.snapshot.logistics_tax.severity);
        format!("validation__value validation__value--{}", severity.css_modifier())
    };
    let clv = move || model.with(|m| m.snapshot.customer_lifetime_value);
    let cac = move || model.with(|m| m.snapshot.customer_acquisition_cost);

    view! {
        <CardAnimated title="Strategic Validation" icon_name="zap" delay_ms=160 class="panel--dark">
            <div class="validation">
                <div class="validation__item validation__item--accent">
                    <p class="validation__caption">"Efficiency Status"</p>
                    <p class="validation__value">{status}</p>
                </div>
                <div class="validation__item">
                    <p class="validation__caption">"Logistics Tax"</p>
                    <p class=tax_class>{tax_label}</p>
                </div>
                <div class="validation__totals">
                    <div class="validation__row">
                        <span class="validation__row-label">"CLV Projection:"</span>
                        <span class="validation__row-value validation__row-value--gold">{clv}</span>
                    </div>
                    <div class="validation__row">
                        <span class="validation__row-label">"Unit CAC:"</span>
                        <span class="validation__row-value validation__row-value--green">{cac}</span>
                    </div>
                </div>
            </div>
        </CardAnimated>
    }
}
