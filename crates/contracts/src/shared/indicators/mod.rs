use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key for cards and DOM ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    /// Currency symbol prefix, no digit grouping (`₹2800`).
    Money { currency: String },
    /// Up to `decimals` fraction digits, trailing zeros dropped (`8`, `3.5`).
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of an indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

impl IndicatorStatus {
    /// CSS modifier suffix shared by cards, badges and panels.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            IndicatorStatus::Good => "success",
            IndicatorStatus::Bad => "error",
            IndicatorStatus::Warning => "warning",
            IndicatorStatus::Neutral => "neutral",
        }
    }
}

/// Static metadata describing one indicator (label, format, icon, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    pub format: ValueFormat,
    /// Hover hint for the card.
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Trend labels & badges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
}

/// Precomputed trend text such as `+133%`.
///
/// The text is shown as-is; only the direction is read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendLabel(pub String);

impl TrendLabel {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn direction(&self) -> TrendDirection {
        if self.0.trim_start().starts_with('+') {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Short qualitative tag rendered next to a card value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorBadge {
    pub text: String,
    pub status: IndicatorStatus,
}

impl IndicatorBadge {
    pub fn new(text: &str, status: IndicatorStatus) -> Self {
        Self {
            text: text.to_string(),
            status,
        }
    }
}

// ---------------------------------------------------------------------------
// Bound values
// ---------------------------------------------------------------------------

/// A single indicator value bound to the current operating mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    pub value: f64,
    pub trend: Option<TrendLabel>,
    pub badge: Option<IndicatorBadge>,
    /// Optional secondary text displayed below the value.
    pub subtitle: Option<String>,
}

/// Metadata for a group of indicators rendered together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSetMeta {
    pub label: String,
    pub indicators: Vec<IndicatorId>,
    /// Number of columns in the card grid (2, 3, 4).
    pub columns: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_direction_from_sign() {
        assert_eq!(TrendLabel::new("+133%").direction(), TrendDirection::Up);
        assert_eq!(TrendLabel::new("-42%").direction(), TrendDirection::Down);
        assert_eq!(TrendLabel::new("42%").direction(), TrendDirection::Down);
    }

    #[test]
    fn test_value_format_serde_tag() {
        let json = serde_json::to_string(&ValueFormat::Percent { decimals: 0 }).unwrap();
        assert_eq!(json, r#"{"kind":"Percent","decimals":0}"#);
    }
}
