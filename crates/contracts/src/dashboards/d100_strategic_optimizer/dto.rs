use super::mode::OperatingMode;
use crate::shared::indicators::{IndicatorMeta, IndicatorStatus, IndicatorValue};
use serde::Serialize;

/// Qualitative travel-overhead indicator (a label, not a computed tax).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogisticsTax {
    pub label: &'static str,
    pub severity: IndicatorStatus,
}

impl LogisticsTax {
    /// Label coloured by the mode's favourability.
    pub const fn for_mode(mode: OperatingMode, label: &'static str) -> Self {
        Self {
            label,
            severity: mode.severity(),
        }
    }
}

/// Full set of scalar business metrics for one operating mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub mode: OperatingMode,
    /// Revenue per van-hour, ₹
    pub revenue_per_hour: f64,
    pub daily_appointments: f64,
    /// Average order value (groom + med), ₹
    pub average_order_value: f64,
    /// Net profit margin, %
    pub net_margin: f64,
    /// Average travel time between appointments, minutes
    pub average_travel_time: f64,
    pub monthly_revenue: f64,
    pub monthly_profit: f64,
    pub logistics_tax: LogisticsTax,
    pub status: &'static str,
    /// Customer lifetime value, preformatted
    pub customer_lifetime_value: &'static str,
    /// Customer acquisition cost, preformatted
    pub customer_acquisition_cost: &'static str,
}

// ---------------------------------------------------------------------------
// Comparison series (grouped bars)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonCategory {
    Revenue,
    Profit,
}

impl ComparisonCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonCategory::Revenue => "Revenue",
            ComparisonCategory::Profit => "Profit",
        }
    }

    pub fn all() -> [ComparisonCategory; 2] {
        [ComparisonCategory::Revenue, ComparisonCategory::Profit]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub category: ComparisonCategory,
    pub fragmented_value: f64,
    pub optimized_value: f64,
}

impl ComparisonRow {
    pub fn value_for(&self, mode: OperatingMode) -> f64 {
        match mode {
            OperatingMode::Fragmented => self.fragmented_value,
            OperatingMode::Optimized => self.optimized_value,
        }
    }
}

/// Monthly revenue & profit of both models, shown side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSeries {
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonSeries {
    /// Largest value across all rows and columns.
    pub fn max_value(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|r| [r.fragmented_value, r.optimized_value])
            .fold(0.0, f64::max)
    }
}

// ---------------------------------------------------------------------------
// Time allocation (donut)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeCategory {
    Service,
    Travel,
    Admin,
}

impl TimeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TimeCategory::Service => "Service",
            TimeCategory::Travel => "Travel",
            TimeCategory::Admin => "Admin",
        }
    }

    pub fn all() -> [TimeCategory; 3] {
        [TimeCategory::Service, TimeCategory::Travel, TimeCategory::Admin]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSlice {
    pub category: TimeCategory,
    pub percent: u8,
}

/// How working time splits between service, travel and admin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeAllocation {
    pub mode: OperatingMode,
    pub slices: Vec<TimeSlice>,
}

impl TimeAllocation {
    pub fn percent_of(&self, category: TimeCategory) -> u8 {
        self.slices
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.percent)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.slices.iter().map(|s| s.percent as u32).sum()
    }
}

// ---------------------------------------------------------------------------
// Cards & panels
// ---------------------------------------------------------------------------

/// One KPI card: static metadata plus the value bound to the current mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub meta: IndicatorMeta,
    pub value: IndicatorValue,
}

/// Illustration shown in the neighborhood cluster panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout")]
pub enum ClusterPanel {
    /// Single dense cluster pin with captions.
    Clustered {
        headline: &'static str,
        detail: &'static str,
        note: &'static str,
    },
    /// Pins scattered across the map, overlaid by a warning.
    Scattered {
        warning: &'static str,
        pin_count: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalloutKind {
    Info,
    Success,
}

/// Static informational callout under the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callout {
    pub kind: CalloutKind,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribution {
    pub title: &'static str,
    pub author: &'static str,
    pub group: &'static str,
}

/// Everything the dashboard binds for one mode, produced in one lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardModel {
    pub mode: OperatingMode,
    pub snapshot: &'static MetricsSnapshot,
    pub kpi_cards: Vec<KpiCard>,
    pub time_allocation: TimeAllocation,
    pub cluster_panel: ClusterPanel,
}
