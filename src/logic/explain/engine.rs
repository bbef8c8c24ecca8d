//! Shift Engine - ranks the features that plausibly explain a spike
//!
//! Compares per-feature means of the recent window against the offline
//! training distribution. A feature with no training baseline defines zero
//! shift rather than erroring, so baseline absence alone never flags a
//! feature.

use std::sync::Arc;

use crate::constants::SHIFT_THRESHOLD;
use crate::logic::baseline::BaselineStats;
use crate::logic::features::FEATURE_LAYOUT;
use crate::logic::round4;
use crate::logic::spike::SpikeReport;
use crate::logic::tracker::PredictionEvent;

use super::types::{ShiftDirection, ShiftReport, ShiftingFeature};

/// Explanation string names at most this many features
const EXPLANATION_TOP: usize = 3;

/// Report carries at most this many features
const REPORT_TOP: usize = 5;

/// Analyze feature distribution shifts for a detected spike.
///
/// `recent` is the same window the detector scored; `spike` must be a
/// detected result.
pub fn analyze(
    recent: &[Arc<PredictionEvent>],
    baseline: &BaselineStats,
    spike: SpikeReport,
) -> ShiftReport {
    let mut shifting: Vec<ShiftingFeature> = Vec::new();

    for &feature in FEATURE_LAYOUT {
        let values: Vec<f64> = recent
            .iter()
            .filter_map(|e| e.features.get_by_name(feature))
            .collect();
        if values.is_empty() {
            continue;
        }

        let recent_mean = values.iter().sum::<f64>() / values.len() as f64;

        let (baseline_mean, baseline_std) = match baseline.feature(feature) {
            Some(stats) => {
                // A degenerate training std would blow the ratio up
                let std = if stats.std == 0.0 { 1.0 } else { stats.std };
                (stats.mean, std)
            }
            // No training baseline: the recent mean is its own reference,
            // forcing the shift to zero
            None => (recent_mean, 1.0),
        };

        let shift = (recent_mean - baseline_mean).abs() / baseline_std;
        if shift > SHIFT_THRESHOLD {
            shifting.push(ShiftingFeature {
                feature,
                shift_magnitude: round4(shift),
                recent_mean: round4(recent_mean),
                baseline_mean: round4(baseline_mean),
                direction: if recent_mean > baseline_mean {
                    ShiftDirection::Increased
                } else {
                    ShiftDirection::Decreased
                },
            });
        }
    }

    // Stable sort keeps layout order for equal magnitudes
    shifting.sort_by(|a, b| {
        b.shift_magnitude
            .partial_cmp(&a.shift_magnitude)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let explanation = if shifting.is_empty() {
        "Spike detected but no significant feature distribution shifts found.".to_string()
    } else {
        let top: Vec<String> = shifting
            .iter()
            .take(EXPLANATION_TOP)
            .map(|f| format!("{} ({})", f.feature, f.direction))
            .collect();
        format!(
            "Spike correlated with changes in: {}. These features show the largest deviation from training baseline.",
            top.join(", ")
        )
    };

    shifting.truncate(REPORT_TOP);

    ShiftReport {
        spike_detected: true,
        explanation,
        shifting_features: shifting,
        spike_info: Some(spike),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use chrono::Utc;

    use crate::logic::baseline::{FeatureBaseline, TrainingMetadata};
    use crate::logic::features::FeatureVector;
    use crate::logic::tracker::RiskLabel;

    fn spike() -> SpikeReport {
        SpikeReport {
            spike_detected: true,
            spike_score: 5.0,
            recent_high_risk_rate: Some(0.5),
            baseline_high_risk_rate: Some(0.1),
            window_size: 20,
            required: None,
            message: "Spike detected! High-risk rate is significantly elevated.".to_string(),
        }
    }

    /// A 20-event window where every event carries the given features
    fn window(values: &[(&str, f64)]) -> Vec<Arc<PredictionEvent>> {
        let mut map = HashMap::new();
        for &(name, value) in values {
            map.insert(name.to_string(), value);
        }
        (0..20)
            .map(|_| {
                Arc::new(PredictionEvent {
                    timestamp: Utc::now(),
                    label: RiskLabel::HighRisk,
                    probability: 0.9,
                    is_outlier: false,
                    features: FeatureVector::from_map(&map),
                })
            })
            .collect()
    }

    fn baseline() -> BaselineStats {
        let doc = r#"{
            "baseline_stats": {
                "age": {"mean": 54.0, "std": 9.0, "min": 29.0, "max": 77.0},
                "chol": {"mean": 246.0, "std": 52.0, "min": 126.0, "max": 564.0},
                "oldpeak": {"mean": 1.0, "std": 0.0, "min": 0.0, "max": 6.2}
            }
        }"#;
        let metadata: TrainingMetadata = serde_json::from_str(doc).unwrap();
        BaselineStats::from_metadata(metadata)
    }

    fn baseline_with_unit_stats(names: &[&str]) -> BaselineStats {
        let mut stats = HashMap::new();
        for &name in names {
            stats.insert(
                name.to_string(),
                FeatureBaseline {
                    mean: 0.0,
                    std: 1.0,
                    min: 0.0,
                    max: 0.0,
                },
            );
        }
        BaselineStats::from_metadata(TrainingMetadata {
            baseline_stats: stats,
            ..TrainingMetadata::default()
        })
    }

    #[test]
    fn test_shifting_features_ranked() {
        // age: |72-54|/9 = 2.0, chol: |298-246|/52 = 1.0
        let recent = window(&[("age", 72.0), ("chol", 298.0)]);
        let report = analyze(&recent, &baseline(), spike());

        assert!(report.spike_detected);
        assert_eq!(report.shifting_features.len(), 2);
        assert_eq!(report.shifting_features[0].feature, "age");
        assert_eq!(report.shifting_features[0].shift_magnitude, 2.0);
        assert_eq!(report.shifting_features[0].direction, ShiftDirection::Increased);
        assert_eq!(report.shifting_features[1].feature, "chol");
        assert!(report.explanation.contains("age (increased)"));
        assert!(report.explanation.contains("chol (increased)"));
    }

    #[test]
    fn test_below_threshold_not_flagged() {
        // age: |56-54|/9 is well under the 0.5 threshold
        let recent = window(&[("age", 56.0)]);
        let report = analyze(&recent, &baseline(), spike());

        assert!(report.shifting_features.is_empty());
        assert!(report
            .explanation
            .contains("no significant feature distribution shifts"));
    }

    #[test]
    fn test_decreased_direction() {
        // age: |36-54|/9 = 2.0, below the training mean
        let recent = window(&[("age", 36.0)]);
        let report = analyze(&recent, &baseline(), spike());

        assert_eq!(report.shifting_features[0].direction, ShiftDirection::Decreased);
        assert!(report.explanation.contains("age (decreased)"));
    }

    #[test]
    fn test_zero_std_clamped_to_one() {
        // oldpeak baseline std is 0: shift = |3.0 - 1.0| / 1.0 = 2.0
        let recent = window(&[("oldpeak", 3.0)]);
        let report = analyze(&recent, &baseline(), spike());

        assert_eq!(report.shifting_features[0].feature, "oldpeak");
        assert_eq!(report.shifting_features[0].shift_magnitude, 2.0);
    }

    #[test]
    fn test_absent_baseline_defines_zero_shift() {
        // thalach has no training stats: its own mean is the reference
        let recent = window(&[("thalach", 190.0)]);
        let report = analyze(&recent, &baseline(), spike());
        assert!(report.shifting_features.is_empty());
    }

    #[test]
    fn test_features_without_values_skipped() {
        let recent = window(&[]);
        let report = analyze(&recent, &baseline(), spike());

        assert!(report.shifting_features.is_empty());
        assert!(report.spike_info.is_some());
    }

    #[test]
    fn test_top_five_truncation_and_top_three_explanation() {
        let names = ["age", "sex", "cp", "trestbps", "chol", "fbs"];
        let baseline = baseline_with_unit_stats(&names);

        let recent = window(&[
            ("age", 1.0),
            ("sex", 2.0),
            ("cp", 3.0),
            ("trestbps", 4.0),
            ("chol", 5.0),
            ("fbs", 6.0),
        ]);
        let report = analyze(&recent, &baseline, spike());

        assert_eq!(report.shifting_features.len(), 5);
        assert_eq!(report.shifting_features[0].feature, "fbs");
        assert_eq!(report.shifting_features[4].feature, "sex");
        assert!(report.explanation.contains(
            "fbs (increased), chol (increased), trestbps (increased)"
        ));
        assert!(!report.explanation.contains("age"));
    }

    #[test]
    fn test_tied_magnitudes_keep_layout_order() {
        let baseline = baseline_with_unit_stats(&["sex", "cp"]);

        let recent = window(&[("sex", 1.0), ("cp", 1.0)]);
        let report = analyze(&recent, &baseline, spike());

        assert_eq!(report.shifting_features[0].feature, "sex");
        assert_eq!(report.shifting_features[1].feature, "cp");
    }
}
