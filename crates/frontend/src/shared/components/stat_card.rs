use crate::shared::icons::icon;
use contracts::shared::format::format_value;
use contracts::shared::indicators::{IndicatorBadge, IndicatorStatus, TrendDirection, TrendLabel, ValueFormat};
use leptos::prelude::*;
use thaw::*;

/// Цвет бейджа по статусу индикатора
pub fn badge_color(status: IndicatorStatus) -> BadgeColor {
    match status {
        IndicatorStatus::Good => BadgeColor::Success,
        IndicatorStatus::Bad => BadgeColor::Danger,
        IndicatorStatus::Warning => BadgeColor::Warning,
        IndicatorStatus::Neutral => BadgeColor::Subtle,
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value
    #[prop(into)]
    value: Signal<f64>,
    /// How to format the value
    format: ValueFormat,
    /// Precomputed trend text (`+133%`)
    #[prop(into)]
    trend: Signal<Option<TrendLabel>>,
    /// Qualitative tag next to the value
    #[prop(into)]
    badge: Signal<Option<IndicatorBadge>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Hover hint
    hint: Option<String>,
) -> impl IntoView {
    let formatted = move || format_value(value.get(), &format);

    let trend_view = move || {
        trend.get().map(|t| {
            let cls = match t.direction() {
                TrendDirection::Up => "stat-card__change stat-card__change--up",
                TrendDirection::Down => "stat-card__change stat-card__change--down",
            };
            view! { <span class=cls>{t.0}</span> }
        })
    };

    let badge_view = move || {
        badge.get().map(|b| {
            view! {
                <Badge appearance=BadgeAppearance::Tint color=badge_color(b.status)>
                    {b.text}
                </Badge>
            }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card" title=hint>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {trend_view}
                    {badge_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_color_follows_status() {
        assert!(matches!(badge_color(IndicatorStatus::Good), BadgeColor::Success));
        assert!(matches!(badge_color(IndicatorStatus::Bad), BadgeColor::Danger));
        assert!(matches!(badge_color(IndicatorStatus::Warning), BadgeColor::Warning));
        assert!(matches!(badge_color(IndicatorStatus::Neutral), BadgeColor::Subtle));
    }
}
