use super::error::DashboardError;
use crate::shared::indicators::IndicatorStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating model selected by the dashboard toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingMode {
    #[default]
    Optimized,
    Fragmented,
}

impl OperatingMode {
    /// Returns the mode name as a string (used for CSS classes and data attributes).
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingMode::Optimized => "optimized",
            OperatingMode::Fragmented => "fragmented",
        }
    }

    /// Returns the toggle endpoint label.
    pub fn display_name(&self) -> &'static str {
        match self {
            OperatingMode::Optimized => "Cluster-Optimized",
            OperatingMode::Fragmented => "Fragmented",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            OperatingMode::Optimized => OperatingMode::Fragmented,
            OperatingMode::Fragmented => OperatingMode::Optimized,
        }
    }

    /// Whether figures for this mode are shown with favourable colouring.
    pub const fn is_favorable(&self) -> bool {
        matches!(self, OperatingMode::Optimized)
    }

    /// Colouring status for qualitative labels of this mode.
    pub const fn severity(&self) -> IndicatorStatus {
        if self.is_favorable() {
            IndicatorStatus::Good
        } else {
            IndicatorStatus::Bad
        }
    }

    /// Returns all modes in toggle order (left endpoint first).
    pub fn all() -> [OperatingMode; 2] {
        [OperatingMode::Fragmented, OperatingMode::Optimized]
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimized" => Ok(OperatingMode::Optimized),
            "fragmented" => Ok(OperatingMode::Fragmented),
            _ => Err(DashboardError::UnhandledMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_optimized() {
        assert_eq!(OperatingMode::default(), OperatingMode::Optimized);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for mode in OperatingMode::all() {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_parse_round_trips_display() {
        for mode in OperatingMode::all() {
            assert_eq!(mode.to_string().parse::<OperatingMode>(), Ok(mode));
        }
        assert_eq!(" Fragmented ".parse::<OperatingMode>(), Ok(OperatingMode::Fragmented));
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let err = "hybrid".parse::<OperatingMode>().unwrap_err();
        assert_eq!(err, DashboardError::UnhandledMode("hybrid".to_string()));
        assert_eq!(err.to_string(), "unhandled mode: hybrid");
    }

    #[test]
    fn test_severity_follows_favorability() {
        assert!(OperatingMode::Optimized.is_favorable());
        assert!(!OperatingMode::Fragmented.is_favorable());
        assert_eq!(OperatingMode::Optimized.severity(), IndicatorStatus::Good);
        assert_eq!(OperatingMode::Fragmented.severity(), IndicatorStatus::Bad);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&OperatingMode::Fragmented).unwrap();
        assert_eq!(json, "\"fragmented\"");
        let back: OperatingMode = serde_json::from_str("\"optimized\"").unwrap();
        assert_eq!(back, OperatingMode::Optimized);
    }
}
