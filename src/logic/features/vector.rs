//! Feature Vector - Per-event clinical feature values
//!
//! Fixed-size storage keyed by the layout in `layout.rs`. Unknown keys are
//! dropped at construction; missing keys stay absent and are never
//! fabricated.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::layout::{feature_index, FEATURE_COUNT, FEATURE_LAYOUT};

/// Feature values in layout order; `None` marks a value the caller never
/// supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [Option<f64>; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create an empty vector (all features absent)
    pub fn new() -> Self {
        Self {
            values: [None; FEATURE_COUNT],
        }
    }

    /// Build from a caller-supplied map. Keys outside the canonical layout
    /// are dropped; canonical keys the map lacks stay `None`.
    pub fn from_map(features: &HashMap<String, f64>) -> Self {
        let mut values = [None; FEATURE_COUNT];
        for (name, &value) in features {
            if let Some(index) = feature_index(name) {
                values[index] = Some(value);
            }
        }
        Self { values }
    }

    /// Get feature by layout index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// True when no feature carries a value
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_none())
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized as a name-keyed object with explicit nulls, the shape the
/// dashboard timeline consumes.
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (name, value) in FEATURE_LAYOUT.iter().zip(self.values.iter()) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
