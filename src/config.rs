//! Configuration parameters for compatibility scoring
//!
//! Weights and thresholds are data, not code: alternate weighting schemes can
//! be tested by constructing the comparator or gatekeeper with a different
//! config, without touching the scoring logic.

use crate::features::key::{FeatureKey, GOLDEN_8};

/// Comparator tolerances and score bands
///
/// Two distinct, unreconciled scales live here: the per-feature σ-distance
/// ladder (`tolerance_*`) and the absolute overall-score bands (`score_*`).
/// They can disagree near their boundaries.
#[derive(Debug, Clone)]
pub struct ComparatorConfig {
    /// σ-distance at or below which a feature is a perfect match (default: 0.5)
    pub tolerance_perfect: f64,

    /// σ-distance at or below which a feature is a good match (default: 1.0)
    pub tolerance_good: f64,

    /// σ-distance at or below which a feature is a warning; beyond it the
    /// feature is critical (default: 1.5)
    pub tolerance_warning: f64,

    /// Score lost per σ of distance in the overall score (default: 33.3,
    /// i.e. 3σ away scores zero)
    pub score_slope: f64,

    /// Overall score at or above which the verdict is perfect (default: 80.0)
    pub score_perfect: f64,

    /// Overall score at or above which the verdict is good (default: 60.0)
    pub score_good: f64,

    /// Overall score at or above which the verdict is a warning; below it the
    /// verdict is critical (default: 40.0)
    pub score_warning: f64,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            tolerance_perfect: 0.5,
            tolerance_good: 1.0,
            tolerance_warning: 1.5,
            score_slope: 33.3,
            score_perfect: 80.0,
            score_good: 60.0,
            score_warning: 40.0,
        }
    }
}

/// Gatekeeper feature weights and alert thresholds
#[derive(Debug, Clone)]
pub struct GatekeeperConfig {
    /// Importance weights, aligned with [`GOLDEN_8`] order
    /// (default: 3.0, 2.0, 2.0, 1.5, 1.5, 1.0, 1.0, 0.5)
    pub weights: [f64; 8],

    /// |weighted z| above which a rhythm-identity feature raises a CRITICAL
    /// alert; the comparison is strict (default: 2.0)
    pub critical_threshold: f64,

    /// |weighted z| above which any Golden 8 feature raises a WARNING alert
    /// when not already critical; strict comparison (default: 1.5)
    ///
    /// Numerically coincides with `ComparatorConfig::tolerance_warning` but
    /// the two systems are unrelated.
    pub warning_threshold: f64,

    /// Features hard-gated as rhythm identity: eligible for CRITICAL alerts
    /// (default: beat strength and onset rate)
    pub critical_features: Vec<FeatureKey>,
}

impl GatekeeperConfig {
    /// Importance weight for a Golden 8 feature (0.0 for anything else)
    pub fn weight(&self, key: FeatureKey) -> f64 {
        GOLDEN_8
            .iter()
            .position(|&k| k == key)
            .map(|i| self.weights[i])
            .unwrap_or(0.0)
    }

    /// True when the feature is hard-gated for CRITICAL alerts
    pub fn is_critical_feature(&self, key: FeatureKey) -> bool {
        self.critical_features.contains(&key)
    }
}

impl Default for GatekeeperConfig {
    fn default() -> Self {
        Self {
            // beat_strength, onset_rate, danceability, bpm,
            // energy, spectral_rolloff, spectral_flatness, dynamic_range
            weights: [3.0, 2.0, 2.0, 1.5, 1.5, 1.0, 1.0, 0.5],
            critical_threshold: 2.0,
            warning_threshold: 1.5,
            critical_features: vec![FeatureKey::BeatStrength, FeatureKey::OnsetRate],
        }
    }
}
