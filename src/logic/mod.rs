//! Logic Module - Analytics Engines
//!
//! Engines behind the prediction monitoring API:
//! - `features/` - Canonical feature layout and per-event vectors
//! - `baseline/` - Offline training baseline (read-only after load)
//! - `tracker/`  - Event store and running statistics
//! - `spike`     - Rolling-window spike detector
//! - `explain/`  - Feature-shift explanation

pub mod baseline;
pub mod explain;
pub mod features;
pub mod spike;
pub mod tracker;

/// Round to 4 decimal places for display stability
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
