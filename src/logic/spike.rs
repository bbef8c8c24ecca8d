//! Spike Detector - Rolling-window surge detection
//!
//! Compares the high-risk rate of the most recent window against the rate
//! of the older portion of history (or the static training-time rate when
//! no older history exists). Stateless: every call recomputes from the
//! current history snapshot, so a detection is a point-in-time property,
//! not a sticky alarm.

use std::sync::Arc;

use serde::Serialize;

use crate::constants::{MIN_BASELINE_RATE, SPIKE_THRESHOLD, SPIKE_WINDOW};
use crate::logic::round4;
use crate::logic::tracker::PredictionEvent;

// ============================================================================
// MESSAGES
// ============================================================================

const MSG_INSUFFICIENT: &str = "Insufficient data for spike detection.";
const MSG_SPIKE: &str = "Spike detected! High-risk rate is significantly elevated.";
const MSG_NO_SPIKE: &str = "No spike detected. Prediction patterns are normal.";

// ============================================================================
// SPIKE REPORT
// ============================================================================

/// Spike detection result.
///
/// Fewer than `SPIKE_WINDOW` recorded events is the initial state, not an
/// error: `window_size` then carries the available count and `required`
/// the window size, with both rates absent.
#[derive(Debug, Clone, Serialize)]
pub struct SpikeReport {
    pub spike_detected: bool,
    pub spike_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_high_risk_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_high_risk_rate: Option<f64>,
    pub window_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<usize>,
    pub message: String,
}

// ============================================================================
// DETECTION
// ============================================================================

/// Fraction of events labelled high-risk. Callers guarantee a non-empty
/// slice.
fn high_risk_rate(events: &[Arc<PredictionEvent>]) -> f64 {
    let high = events.iter().filter(|e| e.label.is_high()).count();
    high as f64 / events.len() as f64
}

/// Evaluate the most recent window against the rest of the history.
///
/// `fallback_rate` is the training-time high-risk rate, used as baseline
/// when the history holds exactly one window and nothing older.
pub fn evaluate(history: &[Arc<PredictionEvent>], fallback_rate: f64) -> SpikeReport {
    if history.len() < SPIKE_WINDOW {
        return SpikeReport {
            spike_detected: false,
            spike_score: 0.0,
            recent_high_risk_rate: None,
            baseline_high_risk_rate: None,
            window_size: history.len(),
            required: Some(SPIKE_WINDOW),
            message: MSG_INSUFFICIENT.to_string(),
        };
    }

    let (older, recent) = history.split_at(history.len() - SPIKE_WINDOW);

    let recent_rate = high_risk_rate(recent);
    let mut baseline_rate = if older.is_empty() {
        fallback_rate
    } else {
        high_risk_rate(older)
    };

    // Avoid division by zero
    if baseline_rate == 0.0 {
        baseline_rate = MIN_BASELINE_RATE;
    }

    let spike_score = round4(recent_rate / baseline_rate);
    let spike_detected = spike_score >= SPIKE_THRESHOLD;

    if spike_detected {
        log::warn!(
            "High-risk spike: score {:.4} (recent {:.4} vs baseline {:.4})",
            spike_score,
            recent_rate,
            baseline_rate
        );
    }

    SpikeReport {
        spike_detected,
        spike_score,
        recent_high_risk_rate: Some(round4(recent_rate)),
        baseline_high_risk_rate: Some(round4(baseline_rate)),
        window_size: SPIKE_WINDOW,
        required: None,
        message: if spike_detected { MSG_SPIKE } else { MSG_NO_SPIKE }.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
