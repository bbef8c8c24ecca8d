//! Feature Layout - Centralized Feature Definition
//!
//! Single source of truth for the clinical inputs of the upstream model.
//! Event vectors, baseline stats and shift reports all follow this order.

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in the exact order the upstream model consumes them.
/// The 13 attributes of the UCI Heart Disease dataset.
pub const FEATURE_LAYOUT: &[&str] = &[
    "age",      // 0:  Age in years
    "sex",      // 1:  Sex (1 = male, 0 = female)
    "cp",       // 2:  Chest pain type (0-3)
    "trestbps", // 3:  Resting blood pressure (mm Hg)
    "chol",     // 4:  Serum cholesterol (mg/dl)
    "fbs",      // 5:  Fasting blood sugar > 120 mg/dl
    "restecg",  // 6:  Resting ECG results (0-2)
    "thalach",  // 7:  Maximum heart rate achieved
    "exang",    // 8:  Exercise-induced angina
    "oldpeak",  // 9:  ST depression induced by exercise
    "slope",    // 10: Slope of the peak exercise ST segment
    "ca",       // 11: Major vessels colored by fluoroscopy (0-4)
    "thal",     // 12: Thalassemia (0-3)
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 13;

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name (O(n) but features are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================
