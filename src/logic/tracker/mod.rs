//! Analytics Tracker - Event store and running statistics
//!
//! Thread-safe, in-memory tracker for prediction analytics: running
//! counters, a bounded prediction history, and the entry points into the
//! spike and shift engines. One instance per process, constructed by the
//! owner and injected into the serving layer (share it as
//! `Arc<AnalyticsTracker>`).

mod types;


pub use types::{PredictionEvent, RiskLabel, StatsSnapshot};

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;

use crate::constants::{DEFAULT_HISTORY_LIMIT, HISTORY_MAX, SPIKE_WINDOW};
use crate::logic::baseline::BaselineStats;
use crate::logic::explain::{self, ShiftReport};
use crate::logic::features::FeatureVector;
use crate::logic::round4;
use crate::logic::spike::{self, SpikeReport};

// ============================================================================
// STATE
// ============================================================================

/// All mutable fields move together behind one lock, so readers never
/// observe a torn update between counters and history.
struct TrackerState {
    total: u64,
    high_risk: u64,
    low_risk: u64,
    outlier_count: u64,
    confidence_sum: f64,
    history: VecDeque<Arc<PredictionEvent>>,
}

impl TrackerState {
    fn new() -> Self {
        Self {
            total: 0,
            high_risk: 0,
            low_risk: 0,
            outlier_count: 0,
            confidence_sum: 0.0,
            history: VecDeque::with_capacity(HISTORY_MAX),
        }
    }
}

// ============================================================================
// TRACKER
// ============================================================================

pub struct AnalyticsTracker {
    baseline: BaselineStats,
    state: Mutex<TrackerState>,
}

impl AnalyticsTracker {
    /// Create a tracker over the given training baseline
    pub fn new(baseline: BaselineStats) -> Self {
        Self {
            baseline,
            state: Mutex::new(TrackerState::new()),
        }
    }

    /// Training baseline this tracker was constructed with
    pub fn baseline(&self) -> &BaselineStats {
        &self.baseline
    }

    /// Record a new prediction event.
    ///
    /// Counters and history update in a single critical section. Feature
    /// keys outside the canonical layout are dropped; missing keys stay
    /// absent. The stored probability is rounded to 4 decimals while the
    /// confidence accumulator keeps the raw value.
    pub fn record_prediction(
        &self,
        label: RiskLabel,
        probability: f64,
        is_outlier: bool,
        features: &HashMap<String, f64>,
    ) {
        // Build the event outside the lock
        let event = Arc::new(PredictionEvent {
            timestamp: Utc::now(),
            label,
            probability: round4(probability),
            is_outlier,
            features: FeatureVector::from_map(features),
        });

        let mut state = self.state.lock();
        state.total += 1;
        if label.is_high() {
            state.high_risk += 1;
        } else {
            state.low_risk += 1;
        }
        if is_outlier {
            state.outlier_count += 1;
        }
        state.confidence_sum += probability;

        if state.history.len() == HISTORY_MAX {
            state.history.pop_front();
        }
        state.history.push_back(event);
    }

    /// Point-in-time aggregated statistics, rounded for display stability
    pub fn stats(&self) -> StatsSnapshot {
        let state = self.state.lock();

        let (high_risk_rate, average_confidence) = if state.total > 0 {
            (
                round4(state.high_risk as f64 / state.total as f64),
                round4(state.confidence_sum / state.total as f64),
            )
        } else {
            (0.0, 0.0)
        };

        StatsSnapshot {
            total_predictions: state.total,
            high_risk_count: state.high_risk,
            low_risk_count: state.low_risk,
            high_risk_rate,
            average_confidence,
            outlier_count: state.outlier_count,
        }
    }

    /// The most recent `limit` events, oldest first. A limit beyond the
    /// available history returns everything.
    pub fn history(&self, limit: usize) -> Vec<Arc<PredictionEvent>> {
        let state = self.state.lock();
        let skip = state.history.len().saturating_sub(limit);
        state.history.iter().skip(skip).cloned().collect()
    }

    /// The most recent `DEFAULT_HISTORY_LIMIT` events, oldest first
    pub fn recent_history(&self) -> Vec<Arc<PredictionEvent>> {
        self.history(DEFAULT_HISTORY_LIMIT)
    }

    /// Shallow snapshot of the full history; the lock is released before
    /// any analysis runs on the copy
    fn snapshot(&self) -> Vec<Arc<PredictionEvent>> {
        let state = self.state.lock();
        state.history.iter().cloned().collect()
    }

    /// Detect a spike in high-risk predictions over the rolling window
    pub fn detect_spike(&self) -> SpikeReport {
        let items = self.snapshot();
        spike::evaluate(&items, self.baseline.default_high_risk_rate())
    }

    /// Explain a detected spike via feature distribution shifts.
    ///
    /// Detection and shift analysis run over the same snapshot, so the
    /// result is a pure function of the history at call time.
    pub fn analyze_spike(&self) -> ShiftReport {
        let items = self.snapshot();
        let spike = spike::evaluate(&items, self.baseline.default_high_risk_rate());
        if !spike.spike_detected {
            return ShiftReport::no_spike();
        }

        // A detected spike guarantees at least SPIKE_WINDOW events
        let recent = &items[items.len() - SPIKE_WINDOW..];
        explain::analyze(recent, &self.baseline, spike)
    }

    /// Clear all recorded state (counters and history)
    pub fn reset(&self) {
        let mut state = self.state.lock();
        *state = TrackerState::new();
        log::info!("Analytics tracker reset");
    }
}
