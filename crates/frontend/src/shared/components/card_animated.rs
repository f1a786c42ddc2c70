//! CardAnimated: обёртка над Thaw Card с анимацией появления и заголовком панели.
//!
//! ```ignore
//! <CardAnimated title="Time Utilization" icon_name="clock" delay_ms=80>
//!     <p>"Контент"</p>
//! </CardAnimated>
//! ```

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::Card;

/// Обёртка над Thaw [`Card`] с анимацией `card-appear` из `styles.css`.
#[component]
pub fn CardAnimated(
    /// Заголовок панели (пустой: без заголовка).
    #[prop(optional, into)]
    title: String,
    /// Иконка перед заголовком.
    #[prop(optional, into)]
    icon_name: String,
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительный CSS-класс (например, тёмная панель).
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "panel".to_string()
    } else {
        format!("panel {}", class)
    };

    let header = (!title.is_empty()).then(|| {
        let icon_view = (!icon_name.is_empty()).then(|| icon(&icon_name));
        view! {
            <h3 class="panel__title">
                {icon_view}
                {title}
            </h3>
        }
    });

    view! {
        <div class=class>
            <Card attr:style=style>
                {header}
                {children()}
            </Card>
        </div>
    }
}
