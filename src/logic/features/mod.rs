//! Feature Module - Canonical clinical feature set
//!
//! Events, baseline stats and shift reports are all keyed by the fixed
//! feature set the upstream classifier was trained on.

pub mod layout;
pub mod vector;

pub use layout::{feature_index, feature_name, FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::FeatureVector;
