use serde::Serialize;

use crate::logic::spike::SpikeReport;

/// Direction of a feature's recent mean relative to its training mean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    Increased,
    Decreased,
}

impl std::fmt::Display for ShiftDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftDirection::Increased => write!(f, "increased"),
            ShiftDirection::Decreased => write!(f, "decreased"),
        }
    }
}

/// A feature whose recent-window mean deviates from its training mean by
/// more than the shift threshold
#[derive(Debug, Clone, Serialize)]
pub struct ShiftingFeature {
    pub feature: &'static str,
    pub shift_magnitude: f64,
    pub recent_mean: f64,
    pub baseline_mean: f64,
    pub direction: ShiftDirection,
}

/// Feature-shift explanation for a detected spike
#[derive(Debug, Clone, Serialize)]
pub struct ShiftReport {
    pub spike_detected: bool,
    pub explanation: String,
    pub shifting_features: Vec<ShiftingFeature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spike_info: Option<SpikeReport>,
}

impl ShiftReport {
    /// Short-circuit result when the detector found no spike
    pub fn no_spike() -> Self {
        Self {
            spike_detected: false,
            explanation: "No spike detected - no analysis needed.".to_string(),
            shifting_features: Vec::new(),
            spike_info: None,
        }
    }
}
