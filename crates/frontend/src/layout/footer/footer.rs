use crate::shared::icons::icon;
use contracts::dashboards::d100_strategic_optimizer::{attribution, callouts, CalloutKind};
use leptos::prelude::*;

/// Static notes under the dashboard; not bound to the operating mode.
#[component]
pub fn Footer() -> impl IntoView {
    let notes = callouts()
        .iter()
        .map(|c| {
            let (class, icon_name) = match c.kind {
                CalloutKind::Info => ("callout callout--info", "info"),
                CalloutKind::Success => ("callout callout--success", "check-circle"),
            };
            view! {
                <div class=class>
                    <span class="callout__icon">{icon(icon_name)}</span>
                    <p class="callout__text">
                        <strong>{c.title}</strong>
                        " "
                        {c.body}
                    </p>
                </div>
            }
        })
        .collect_view();

    let credits = attribution();

    view! {
        <footer data-zone="footer" class="footer-grid">
            {notes}
            <div class="callout callout--plain">
                <p class="callout__caption">{credits.title}</p>
                <p class="callout__text">{credits.author}</p>
                <p class="callout__text callout__text--muted">{credits.group}</p>
            </div>
        </footer>
    }
}
