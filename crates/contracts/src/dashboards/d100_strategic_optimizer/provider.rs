//! Table lookups for the strategic optimizer dashboard.
//!
//! Every function is total over [`OperatingMode`]; the figures are fixed input
//! from the strategic analysis and must stay byte-for-byte as listed here.

use super::dto::*;
use super::mode::OperatingMode;
use crate::shared::format::RUPEE;
use crate::shared::indicators::*;

pub const DASHBOARD_TITLE: &str = "Pawcare Strategic Optimizer";
pub const DASHBOARD_SUBTITLE: &str = "Pricing & Revenue Intelligence Dashboard v2.4";

static OPTIMIZED: MetricsSnapshot = MetricsSnapshot {
    mode: OperatingMode::Optimized,
    revenue_per_hour: 2800.0,
    daily_appointments: 8.0,
    average_order_value: 2400.0,
    net_margin: 48.0,
    average_travel_time: 10.0,
    monthly_revenue: 422400.0,
    monthly_profit: 202752.0,
    logistics_tax: LogisticsTax::for_mode(OperatingMode::Optimized, "10% (Minimized)"),
    status: "High Efficiency",
    customer_lifetime_value: "₹45,000",
    customer_acquisition_cost: "₹2,200",
};

static FRAGMENTED: MetricsSnapshot = MetricsSnapshot {
    mode: OperatingMode::Fragmented,
    revenue_per_hour: 888.0,
    daily_appointments: 3.5,
    average_order_value: 1800.0,
    net_margin: 12.0,
    average_travel_time: 42.0,
    monthly_revenue: 151200.0,
    monthly_profit: 18144.0,
    logistics_tax: LogisticsTax::for_mode(OperatingMode::Fragmented, "42% (Critical)"),
    status: "Operational Loss Risk",
    customer_lifetime_value: "₹22,000",
    customer_acquisition_cost: "₹4,800",
};

static CALLOUTS: [Callout; 2] = [
    Callout {
        kind: CalloutKind::Info,
        title: "Analyst Note:",
        body: "Cluster optimization assumes the 20/2 rule (20 clients per 2km radius). \
               Failure to hit this density results in a return to fragmented margins.",
    },
    Callout {
        kind: CalloutKind::Success,
        title: "Target Secured:",
        body: "Current HSR Layout cluster has reached 14 anchor clients.",
    },
];

pub fn snapshot(mode: OperatingMode) -> &'static MetricsSnapshot {
    match mode {
        OperatingMode::Optimized => &OPTIMIZED,
        OperatingMode::Fragmented => &FRAGMENTED,
    }
}

/// Revenue and profit of both models, read from the two snapshots so the
/// bars can never disagree with the cards.
pub fn comparison_series() -> ComparisonSeries {
    let fragmented = snapshot(OperatingMode::Fragmented);
    let optimized = snapshot(OperatingMode::Optimized);

    let rows = ComparisonCategory::all()
        .into_iter()
        .map(|category| {
            let pick = |s: &MetricsSnapshot| match category {
                ComparisonCategory::Revenue => s.monthly_revenue,
                ComparisonCategory::Profit => s.monthly_profit,
            };
            ComparisonRow {
                category,
                fragmented_value: pick(fragmented),
                optimized_value: pick(optimized),
            }
        })
        .collect();

    ComparisonSeries { rows }
}

pub fn time_allocation(mode: OperatingMode) -> TimeAllocation {
    let (service, travel, admin) = match mode {
        OperatingMode::Optimized => (85, 10, 5),
        OperatingMode::Fragmented => (45, 45, 10),
    };

    TimeAllocation {
        mode,
        slices: vec![
            TimeSlice {
                category: TimeCategory::Service,
                percent: service,
            },
            TimeSlice {
                category: TimeCategory::Travel,
                percent: travel,
            },
            TimeSlice {
                category: TimeCategory::Admin,
                percent: admin,
            },
        ],
    }
}

/// Trend shown on the revenue-per-hour card. Kept as published in the
/// analysis rather than recomputed from the card values.
pub fn revenue_trend(mode: OperatingMode) -> TrendLabel {
    match mode {
        OperatingMode::Optimized => TrendLabel::new("+133%"),
        OperatingMode::Fragmented => TrendLabel::new("-42%"),
    }
}

pub fn kpi_set() -> IndicatorSetMeta {
    IndicatorSetMeta {
        label: "Key Performance Indicators".to_string(),
        indicators: kpi_cards(OperatingMode::default())
            .into_iter()
            .map(|c| c.meta.id)
            .collect(),
        columns: 4,
    }
}

pub fn kpi_cards(mode: OperatingMode) -> Vec<KpiCard> {
    let s = snapshot(mode);
    let money = ValueFormat::Money {
        currency: RUPEE.to_string(),
    };

    let (margin_badge, aov_badge) = match mode {
        OperatingMode::Optimized => (
            IndicatorBadge::new("Healthy", IndicatorStatus::Good),
            IndicatorBadge::new("Med-Upsell Active", IndicatorStatus::Good),
        ),
        OperatingMode::Fragmented => (
            IndicatorBadge::new("Critical", IndicatorStatus::Bad),
            IndicatorBadge::new("Basic Only", IndicatorStatus::Warning),
        ),
    };

    vec![
        card(
            "revenue_per_hour",
            "Revenue per Van-Hour",
            "trending-up",
            money.clone(),
            None,
            s.revenue_per_hour,
            "Efficiency Target: ₹2,500+",
            Some(revenue_trend(mode)),
            None,
        ),
        card(
            "daily_appointments",
            "Daily Appointments",
            "users",
            ValueFormat::Number { decimals: 1 },
            Some("Target is 7-8 for profitability"),
            s.daily_appointments,
            "Capacity utilization",
            None,
            None,
        ),
        card(
            "net_margin",
            "Net Profit Margin",
            "dollar",
            ValueFormat::Percent { decimals: 0 },
            None,
            s.net_margin,
            "Post OPEX & Logistics Tax",
            None,
            Some(margin_badge),
        ),
        card(
            "average_order_value",
            "AOV (Groom + Med)",
            "zap",
            money,
            None,
            s.average_order_value,
            "Gateway conversion rate",
            None,
            Some(aov_badge),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn card(
    id: &str,
    label: &str,
    icon: &str,
    format: ValueFormat,
    description: Option<&str>,
    value: f64,
    subtitle: &str,
    trend: Option<TrendLabel>,
    badge: Option<IndicatorBadge>,
) -> KpiCard {
    KpiCard {
        meta: IndicatorMeta {
            id: IndicatorId::new(id),
            label: label.to_string(),
            icon: icon.to_string(),
            format,
            description: description.map(str::to_string),
        },
        value: IndicatorValue {
            id: IndicatorId::new(id),
            value,
            trend,
            badge,
            subtitle: Some(subtitle.to_string()),
        },
    }
}

pub fn cluster_panel(mode: OperatingMode) -> ClusterPanel {
    match mode {
        OperatingMode::Optimized => ClusterPanel::Clustered {
            headline: "High Density 'Pet Corridor' Detected",
            detail: "8 appointments within 800m radius (HSR Layout Cluster)",
            note: "Logistics Tax: 10% minimized via proximity-based routing.",
        },
        OperatingMode::Fragmented => ClusterPanel::Scattered {
            warning: "Logistics Tax: 42% Travel Overhead",
            pin_count: 8,
        },
    }
}

pub fn callouts() -> &'static [Callout] {
    &CALLOUTS
}

pub fn attribution() -> Attribution {
    Attribution {
        title: "Data Authenticity",
        author: "Bala Bharath Kumar Pavuluri | M036-24",
        group: "Entrepreneurial Marketing Group 7",
    }
}

/// Single lookup feeding every mode-bound widget.
pub fn dashboard_model(mode: OperatingMode) -> DashboardModel {
    DashboardModel {
        mode,
        snapshot: snapshot(mode),
        kpi_cards: kpi_cards(mode),
        time_allocation: time_allocation(mode),
        cluster_panel: cluster_panel(mode),
    }
}
