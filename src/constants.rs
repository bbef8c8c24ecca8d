//! Central Configuration Constants
//!
//! Single source of truth for analytics configuration defaults.
//! To change a detection threshold, only edit this file.

use std::path::PathBuf;

/// Max prediction records kept in history
pub const HISTORY_MAX: usize = 500;

/// Recent window size for spike detection
pub const SPIKE_WINDOW: usize = 20;

/// Spike if recent high-risk rate >= threshold x baseline rate
pub const SPIKE_THRESHOLD: f64 = 2.0;

/// Meaningful feature shift, in baseline standard deviations
pub const SHIFT_THRESHOLD: f64 = 0.5;

/// Clamp for a zero baseline rate
pub const MIN_BASELINE_RATE: f64 = 0.01;

/// Fallback high-risk rate when no training baseline is available
pub const DEFAULT_HIGH_RISK_RATE: f64 = 0.5;

/// Default number of history entries returned to readers
pub const DEFAULT_HISTORY_LIMIT: usize = 200;

/// Default location of the offline training metadata document
pub const DEFAULT_METADATA_PATH: &str = "models/training_metadata.json";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get training metadata path from environment or use default
pub fn metadata_path() -> PathBuf {
    std::env::var("METADATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_METADATA_PATH))
}
