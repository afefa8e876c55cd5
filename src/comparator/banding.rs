//! Tolerance banding
//!
//! Two separate classification scales:
//! - σ-distance banding for individual features (0.5 / 1.0 / 1.5)
//! - absolute banding for the overall match score (80 / 60 / 40)

use serde::{Deserialize, Serialize};

use crate::config::ComparatorConfig;

/// Compatibility verdict tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityStatus {
    /// Within the tightest tolerance
    Perfect,
    /// Acceptable fit, or a comparison that could not be made
    Good,
    /// Noticeably off target
    Warning,
    /// Far outside the playlist's envelope
    Critical,
}

impl CompatibilityStatus {
    /// Lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityStatus::Perfect => "perfect",
            CompatibilityStatus::Good => "good",
            CompatibilityStatus::Warning => "warning",
            CompatibilityStatus::Critical => "critical",
        }
    }
}

/// Classify a normalized σ-distance into a per-feature band
pub fn band_for_distance(distance: f64, config: &ComparatorConfig) -> CompatibilityStatus {
    if distance <= config.tolerance_perfect {
        CompatibilityStatus::Perfect
    } else if distance <= config.tolerance_good {
        CompatibilityStatus::Good
    } else if distance <= config.tolerance_warning {
        CompatibilityStatus::Warning
    } else {
        CompatibilityStatus::Critical
    }
}

/// Classify an overall match score (0-100) into a verdict band
pub fn score_status(score: f64, config: &ComparatorConfig) -> CompatibilityStatus {
    if score >= config.score_perfect {
        CompatibilityStatus::Perfect
    } else if score >= config.score_good {
        CompatibilityStatus::Good
    } else if score >= config.score_warning {
        CompatibilityStatus::Warning
    } else {
        CompatibilityStatus::Critical
    }
}

/// Per-feature contribution to the overall score: 100 at the mean, minus
/// `score_slope` per σ of distance, clamped to [0, 100]
pub fn feature_score(distance: f64, config: &ComparatorConfig) -> f64 {
    (100.0 - distance * config.score_slope).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigma_banding_law() {
        let config = ComparatorConfig::default();
        assert_eq!(band_for_distance(0.0, &config), CompatibilityStatus::Perfect);
        assert_eq!(band_for_distance(0.5, &config), CompatibilityStatus::Perfect);
        assert_eq!(band_for_distance(0.51, &config), CompatibilityStatus::Good);
        assert_eq!(band_for_distance(1.0, &config), CompatibilityStatus::Good);
        assert_eq!(band_for_distance(1.01, &config), CompatibilityStatus::Warning);
        assert_eq!(band_for_distance(1.5, &config), CompatibilityStatus::Warning);
        assert_eq!(band_for_distance(1.51, &config), CompatibilityStatus::Critical);
        assert_eq!(band_for_distance(3.0, &config), CompatibilityStatus::Critical);
    }

    #[test]
    fn test_score_banding() {
        let config = ComparatorConfig::default();
        assert_eq!(score_status(100.0, &config), CompatibilityStatus::Perfect);
        assert_eq!(score_status(80.0, &config), CompatibilityStatus::Perfect);
        assert_eq!(score_status(79.9, &config), CompatibilityStatus::Good);
        assert_eq!(score_status(60.0, &config), CompatibilityStatus::Good);
        assert_eq!(score_status(59.9, &config), CompatibilityStatus::Warning);
        assert_eq!(score_status(40.0, &config), CompatibilityStatus::Warning);
        assert_eq!(score_status(39.9, &config), CompatibilityStatus::Critical);
        assert_eq!(score_status(0.0, &config), CompatibilityStatus::Critical);
    }

    #[test]
    fn test_feature_score_clamps() {
        let config = ComparatorConfig::default();
        assert_eq!(feature_score(0.0, &config), 100.0);
        assert_eq!(feature_score(10.0, &config), 0.0);
        // 3σ away is just above zero at the default slope
        assert!((feature_score(3.0, &config) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&CompatibilityStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
