use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// TRAINING METADATA DOCUMENT
// ============================================================================

/// Training-time distribution of a single feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureBaseline {
    pub mean: f64,
    pub std: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
}

/// Offline training metadata document (`training_metadata.json`).
///
/// Written once by the training pipeline. Every field tolerates absence so
/// partial documents still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingMetadata {
    #[serde(default)]
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub feature_importance: HashMap<String, f64>,
    #[serde(default)]
    pub baseline_stats: HashMap<String, FeatureBaseline>,
    #[serde(default)]
    pub train_accuracy: f64,
    #[serde(default)]
    pub test_accuracy: f64,
    #[serde(default)]
    pub n_samples: u64,
}

impl TrainingMetadata {
    /// Feature importance ranked descending, up to `limit` entries
    pub fn top_features(&self, limit: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .feature_importance
            .iter()
            .map(|(name, &importance)| (name.clone(), importance))
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(limit);
        ranked
    }
}
