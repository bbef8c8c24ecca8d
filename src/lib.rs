//! Real-Time Prediction Analytics Core
//!
//! Thread-safe, in-memory analytics for a served tabular classifier:
//! running statistics, bounded prediction history, rolling-window spike
//! detection and feature-shift explanation.
//!
//! The crate owns no transport. A serving layer constructs one
//! [`AnalyticsTracker`] per process (over a [`BaselineStats`] loaded at
//! startup), feeds it a prediction event per served request, and wires the
//! read operations to its own endpoints.
//!
//! ## Architecture
//! - `logic/features` - Canonical clinical feature layout and vectors
//! - `logic/baseline` - Offline training baseline (read-only after load)
//! - `logic/tracker`  - Event store and running statistics
//! - `logic/spike`    - Rolling-window spike detector
//! - `logic/explain`  - Feature-shift explanation engine

pub mod constants;
pub mod logic;

pub use logic::baseline::{BaselineError, BaselineStats, FeatureBaseline, TrainingMetadata};
pub use logic::explain::{ShiftDirection, ShiftReport, ShiftingFeature};
pub use logic::features::{FeatureVector, FEATURE_COUNT, FEATURE_LAYOUT};
pub use logic::spike::SpikeReport;
pub use logic::tracker::{AnalyticsTracker, PredictionEvent, RiskLabel, StatsSnapshot};
