use crate::layout::header::mode_toggle::ModeToggle;
use crate::shared::icons::icon;
use contracts::dashboards::d100_strategic_optimizer::{DASHBOARD_SUBTITLE, DASHBOARD_TITLE};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <h1 class="header__title">
                    <span class="header__logo">{icon("truck")}</span>
                    {DASHBOARD_TITLE}
                </h1>
                <p class="header__subtitle">{DASHBOARD_SUBTITLE}</p>
            </div>
            <div class="header__actions">
                <ModeToggle />
            </div>
        </header>
    }
}
