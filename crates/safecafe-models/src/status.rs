//! Qualitative tags carried by readings and alerts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative status of a sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorStatus {
    #[default]
    Normal,
    Warning,
    Alert,
}

impl SensorStatus {
    pub const ALL: [SensorStatus; 3] = [Self::Normal, Self::Warning, Self::Alert];

    /// Label shown on sensor cards.
    pub fn label(&self) -> &'static str {
        match self {
            SensorStatus::Normal => "Normal",
            SensorStatus::Warning => "Attention",
            SensorStatus::Alert => "Critical",
        }
    }
}

/// Direction indicator shown next to a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Self::Up, Self::Down, Self::Stable];

    /// Single-glyph arrow for compact rendering.
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

/// Severity of a farm alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Warning,
    Alert,
    Info,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Warning => write!(f, "WARNING"),
            AlertSeverity::Alert => write!(f, "ALERT"),
            AlertSeverity::Info => write!(f, "INFO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_tags() {
        let json = serde_json::to_string(&SensorStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let back: AlertSeverity = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(back, AlertSeverity::Info);
    }

    #[test]
    fn test_trend_arrows_distinct() {
        let arrows: Vec<_> = Trend::ALL.iter().map(|t| t.arrow()).collect();
        assert_eq!(arrows, vec!["↑", "↓", "→"]);
    }
}
