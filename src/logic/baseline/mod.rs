//! Baseline Module - Offline training baseline
//!
//! Read-only snapshot of the per-feature training distribution plus the
//! fallback high-risk rate. Loaded once at process start; a missing or
//! unparsable document falls back to defaults and is never surfaced to
//! callers as an error.

mod storage;
mod types;

pub use storage::{load_metadata, BaselineError};
pub use types::{FeatureBaseline, TrainingMetadata};

use std::collections::HashMap;
use std::path::Path;

use crate::constants::DEFAULT_HIGH_RISK_RATE;

// ============================================================================
// BASELINE STATS
// ============================================================================

/// Per-feature training distribution consumed by the shift explainer, plus
/// the fallback high-risk rate for the spike detector. Immutable after
/// construction, so readers need no locking.
#[derive(Debug, Clone)]
pub struct BaselineStats {
    features: HashMap<String, FeatureBaseline>,
    default_high_risk_rate: f64,
    metadata: Option<TrainingMetadata>,
}

impl BaselineStats {
    /// Empty baseline: no per-feature stats, default high-risk rate
    pub fn empty() -> Self {
        Self {
            features: HashMap::new(),
            default_high_risk_rate: DEFAULT_HIGH_RISK_RATE,
            metadata: None,
        }
    }

    /// Build from a parsed training metadata document
    pub fn from_metadata(metadata: TrainingMetadata) -> Self {
        Self {
            features: metadata.baseline_stats.clone(),
            default_high_risk_rate: DEFAULT_HIGH_RISK_RATE,
            metadata: Some(metadata),
        }
    }

    /// Load from the metadata document, falling back to an empty baseline
    /// when the document is missing or unparsable.
    pub fn load_or_default(path: &Path) -> Self {
        match load_metadata(path) {
            Ok(metadata) => {
                log::info!(
                    "Loaded training baseline: {} features from {:?}",
                    metadata.baseline_stats.len(),
                    path
                );
                Self::from_metadata(metadata)
            }
            Err(e) => {
                log::warn!("Training baseline unavailable ({}), using defaults", e);
                Self::empty()
            }
        }
    }

    /// Training stats for one feature; `None` means no baseline exists
    pub fn feature(&self, name: &str) -> Option<&FeatureBaseline> {
        self.features.get(name)
    }

    /// Static high-risk rate used when history carries no older portion
    pub fn default_high_risk_rate(&self) -> f64 {
        self.default_high_risk_rate
    }

    /// True when no per-feature stats were loaded
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Full training document, when one was loaded
    pub fn metadata(&self) -> Option<&TrainingMetadata> {
        self.metadata.as_ref()
    }
}

impl Default for BaselineStats {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
