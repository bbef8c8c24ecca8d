use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureVector;

// ============================================================================
// RISK LABEL
// ============================================================================

/// Binary risk label produced by the upstream classifier.
///
/// Serialized as the wire integer (0 = low risk, 1 = high risk); anything
/// else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RiskLabel {
    LowRisk,
    HighRisk,
}

impl RiskLabel {
    pub fn is_high(self) -> bool {
        matches!(self, RiskLabel::HighRisk)
    }
}

impl From<RiskLabel> for u8 {
    fn from(label: RiskLabel) -> u8 {
        match label {
            RiskLabel::LowRisk => 0,
            RiskLabel::HighRisk => 1,
        }
    }
}

impl TryFrom<u8> for RiskLabel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RiskLabel::LowRisk),
            1 => Ok(RiskLabel::HighRisk),
            other => Err(format!("risk label must be 0 or 1, got {}", other)),
        }
    }
}

// ============================================================================
// PREDICTION EVENT
// ============================================================================

/// A single recorded prediction. Immutable once recorded; owned by the
/// tracker history and shared out to readers by reference count.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "prediction")]
    pub label: RiskLabel,
    pub probability: f64,
    pub is_outlier: bool,
    pub features: FeatureVector,
}

// ============================================================================
// STATS SNAPSHOT
// ============================================================================

/// Point-in-time aggregated statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub total_predictions: u64,
    pub high_risk_count: u64,
    pub low_risk_count: u64,
    pub high_risk_rate: f64,
    pub average_confidence: f64,
    pub outlier_count: u64,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_label_wire_format() {
        assert_eq!(serde_json::to_string(&RiskLabel::LowRisk).unwrap(), "0");
        assert_eq!(serde_json::to_string(&RiskLabel::HighRisk).unwrap(), "1");

        let label: RiskLabel = serde_json::from_str("1").unwrap();
        assert!(label.is_high());
        assert!(serde_json::from_str::<RiskLabel>("2").is_err());
    }

    #[test]
    fn test_event_wire_shape() {
        let event = PredictionEvent {
            timestamp: Utc::now(),
            label: RiskLabel::HighRisk,
            probability: 0.91,
            is_outlier: false,
            features: FeatureVector::new(),
        };
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["prediction"], 1);
        assert_eq!(json["probability"], 0.91);
        assert_eq!(json["is_outlier"], false);
        assert!(json["features"].is_object());
        assert!(json["timestamp"].is_string());
    }
}
