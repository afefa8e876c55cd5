//! Gatekeeper report assembly
//!
//! Weighted z-score table, alert identification, and the decision prompt: a
//! deterministic, mechanical serialization of the computed values. The
//! numeric content of the prompt is bit-faithful to the computed table; the
//! surrounding formatting is presentation, not algorithmic contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::GatekeeperConfig;
use crate::features::key::{FeatureKey, GOLDEN_8};
use crate::features::Direction;

/// One row of the weighted deviation table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedZEntry {
    /// The Golden 8 feature
    pub feature: FeatureKey,
    /// Candidate's value
    pub user_value: f64,
    /// Nearest reference track's value
    pub ref_value: f64,
    /// (candidate − reference) / reference std; 0 when the std is 0
    pub z_score: f64,
    /// z-score scaled by the feature's importance weight
    pub weighted_z: f64,
    /// The importance weight applied
    pub weight: f64,
}

/// Alert severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Notable deviation on any Golden 8 feature
    Warning,
    /// Rhythm-identity feature beyond the hard gate
    Critical,
}

/// A deviation alert raised during a check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Feature the alert applies to
    pub feature: FeatureKey,
    /// Severity tier
    pub severity: AlertSeverity,
    /// |weighted z| magnitude that triggered the alert
    pub magnitude: f64,
    /// Whether the candidate sits above or below the reference
    pub direction: Direction,
    /// Rendered alert line
    pub message: String,
}

/// Complete result of checking one candidate against the fitted reference set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatekeeperReport {
    /// Candidate's Golden 8 values
    pub user_features: BTreeMap<FeatureKey, f64>,
    /// Golden 8 values of the nearest reference track
    pub nearest_reference: BTreeMap<FeatureKey, f64>,
    /// Original index of the nearest reference track
    pub nearest_index: usize,
    /// Standardized Euclidean distance to the nearest reference
    pub nearest_distance: f64,
    /// Weighted deviation table in Golden 8 order
    pub weighted_z_scores: Vec<WeightedZEntry>,
    /// Alerts, critical first, each tier in Golden 8 order
    pub alerts: Vec<Alert>,
    /// Decision prompt: mechanical serialization of the table and alerts
    pub prompt: String,
}

/// Compute the weighted deviation table in Golden 8 order
pub fn weighted_z_entries(
    user: &[f64; 8],
    nearest: &[f64; 8],
    reference_stds: &[f64; 8],
    config: &GatekeeperConfig,
) -> Vec<WeightedZEntry> {
    GOLDEN_8
        .iter()
        .enumerate()
        .map(|(i, &feature)| {
            let weight = config.weights[i];
            let (z_score, weighted_z) = if reference_stds[i] > 0.0 {
                let z = (user[i] - nearest[i]) / reference_stds[i];
                (z, z * weight)
            } else {
                (0.0, 0.0)
            };
            WeightedZEntry {
                feature,
                user_value: user[i],
                ref_value: nearest[i],
                z_score,
                weighted_z,
                weight,
            }
        })
        .collect()
}

/// Identify alerts over a weighted deviation table
///
/// Rhythm-identity features beyond the (strict) critical threshold raise
/// CRITICAL alerts; every Golden 8 feature beyond the warning threshold that
/// is not already critical raises a WARNING. Ordered critical-first, each
/// tier in table order.
pub fn identify_alerts(entries: &[WeightedZEntry], config: &GatekeeperConfig) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for entry in entries {
        let magnitude = entry.weighted_z.abs();
        if config.is_critical_feature(entry.feature) && magnitude > config.critical_threshold {
            alerts.push(make_alert(entry, AlertSeverity::Critical, magnitude));
        }
    }

    for entry in entries {
        let magnitude = entry.weighted_z.abs();
        if magnitude > config.warning_threshold {
            let already_critical = config.is_critical_feature(entry.feature)
                && magnitude > config.critical_threshold;
            if !already_critical {
                alerts.push(make_alert(entry, AlertSeverity::Warning, magnitude));
            }
        }
    }

    alerts
}

fn make_alert(entry: &WeightedZEntry, severity: AlertSeverity, magnitude: f64) -> Alert {
    let direction = Direction::of(entry.weighted_z, 0.0);
    let tier = match severity {
        AlertSeverity::Critical => "CRITICAL",
        AlertSeverity::Warning => "WARNING",
    };
    Alert {
        feature: entry.feature,
        severity,
        magnitude,
        direction,
        message: format!(
            "{}: {:.1}\u{3c3} {} reference ({})",
            entry.feature.label(),
            magnitude,
            direction.as_str(),
            tier
        ),
    }
}

/// Render the decision prompt from a computed table and alert list
pub fn decision_prompt(entries: &[WeightedZEntry], alerts: &[Alert]) -> String {
    let mut prompt = String::from(
        "You are an expert music industry A&R assistant specializing in playlist curation.\n\
         \n\
         Your task: analyze whether a submitted track fits a specific playlist profile.\n\
         \n\
         CONTEXT:\n\
         The track has been analyzed against a playlist's sonic signature using the\n\
         Golden 8 audio parameters. Each parameter has been compared to the CLOSEST\n\
         REFERENCE TRACK from the playlist (not the average, to handle multi-modal\n\
         distributions like mixed tempos).\n\
         \n\
         ---\n\
         \n\
         GOLDEN 8 COMPARISON (candidate vs closest reference):\n",
    );

    for entry in entries {
        prompt.push_str(&format!(
            "\n{}:\n  Candidate: {:.2}\n  Reference: {:.2}\n  Weighted Z-Score: {:.2} (weight: {}x)\n",
            entry.feature.label(),
            entry.user_value,
            entry.ref_value,
            entry.weighted_z,
            entry.weight
        ));
    }

    prompt.push_str("\n---\n\n");
    if alerts.is_empty() {
        prompt.push_str("No critical alerts detected.\n");
    } else {
        prompt.push_str("ALERTS:\n");
        for alert in alerts {
            prompt.push_str(&format!("  - {}\n", alert.message));
        }
    }

    prompt.push_str(
        "\n---\n\
         \n\
         INSTRUCTIONS:\n\
         1. Evaluate the track based on overall similarity to the reference track,\n\
            the critical rhythm features (Beat Strength, Onset Rate), and the\n\
            playlist context.\n\
         2. Provide a verdict: PASS / REJECT / CONDITIONAL.\n\
         3. Explain your reasoning in 2-3 sentences, naming the most concerning\n\
            parameters and the adjustments that would improve fit.\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries_with_beat_z(weighted_z: f64) -> Vec<WeightedZEntry> {
        let user = [0.9, 5.0, 0.5, 120.0, 0.4, 4000.0, 0.2, 8.0];
        let nearest = [0.8, 5.0, 0.5, 120.0, 0.4, 4000.0, 0.2, 8.0];
        let stds = [0.3, 1.0, 0.1, 2.0, 0.05, 500.0, 0.02, 1.0];
        let config = GatekeeperConfig::default();
        let mut entries = weighted_z_entries(&user, &nearest, &stds, &config);
        entries[0].weighted_z = weighted_z;
        entries[0].z_score = weighted_z / entries[0].weight;
        entries
    }

    #[test]
    fn test_weighted_z_computation() {
        let user = [0.9, 5.0, 0.5, 120.0, 0.4, 4000.0, 0.2, 8.0];
        let nearest = [0.8, 5.0, 0.5, 120.0, 0.4, 4000.0, 0.2, 8.0];
        let stds = [0.3, 1.0, 0.1, 2.0, 0.05, 500.0, 0.02, 1.0];
        let config = GatekeeperConfig::default();

        let entries = weighted_z_entries(&user, &nearest, &stds, &config);
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0].feature, FeatureKey::BeatStrength);
        // z = (0.9 - 0.8) / 0.3, weighted by 3.0 -> 1.0
        assert!((entries[0].z_score - 1.0 / 3.0).abs() < 1e-9);
        assert!((entries[0].weighted_z - 1.0).abs() < 1e-9);
        // All other features deviate by zero
        for entry in &entries[1..] {
            assert_eq!(entry.weighted_z, 0.0);
        }
    }

    #[test]
    fn test_zero_std_yields_zero_z() {
        let user = [1.0; 8];
        let nearest = [0.0; 8];
        let stds = [0.0; 8];
        let config = GatekeeperConfig::default();

        let entries = weighted_z_entries(&user, &nearest, &stds, &config);
        for entry in entries {
            assert_eq!(entry.z_score, 0.0);
            assert_eq!(entry.weighted_z, 0.0);
        }
    }

    #[test]
    fn test_no_alert_below_thresholds() {
        let config = GatekeeperConfig::default();
        let alerts = identify_alerts(&entries_with_beat_z(1.0), &config);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_critical_alert_beyond_hard_gate() {
        let config = GatekeeperConfig::default();
        let alerts = identify_alerts(&entries_with_beat_z(-2.4), &config);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts[0].direction, Direction::Below);
        assert!((alerts[0].magnitude - 2.4).abs() < 1e-9);
        assert!(alerts[0].message.contains("CRITICAL"));
    }

    #[test]
    fn test_exactly_at_critical_threshold_is_warning_only() {
        // The critical gate is strict: |weighted z| == 2.0 stays a warning.
        let config = GatekeeperConfig::default();
        let alerts = identify_alerts(&entries_with_beat_z(2.0), &config);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    }

    #[test]
    fn test_rhythm_feature_between_thresholds_warns() {
        let config = GatekeeperConfig::default();
        let alerts = identify_alerts(&entries_with_beat_z(1.8), &config);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(alerts[0].feature, FeatureKey::BeatStrength);
    }

    #[test]
    fn test_non_rhythm_feature_never_critical() {
        let user = [0.8, 5.0, 0.5, 120.0, 0.4, 4000.0, 0.2, 8.0];
        let nearest = [0.8, 5.0, 0.5, 100.0, 0.4, 4000.0, 0.2, 8.0];
        // bpm z = 20 / 2 = 10, weighted 15: way beyond every threshold
        let stds = [0.3, 1.0, 0.1, 2.0, 0.05, 500.0, 0.02, 1.0];
        let config = GatekeeperConfig::default();

        let entries = weighted_z_entries(&user, &nearest, &stds, &config);
        let alerts = identify_alerts(&entries, &config);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].feature, FeatureKey::Bpm);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(alerts[0].direction, Direction::Above);
    }

    #[test]
    fn test_critical_alerts_sort_first() {
        let user = [2.0, 5.0, 0.5, 140.0, 0.4, 4000.0, 0.2, 8.0];
        let nearest = [0.8, 5.0, 0.5, 120.0, 0.4, 4000.0, 0.2, 8.0];
        let stds = [0.3, 1.0, 0.1, 2.0, 0.05, 500.0, 0.02, 1.0];
        let config = GatekeeperConfig::default();

        let entries = weighted_z_entries(&user, &nearest, &stds, &config);
        let alerts = identify_alerts(&entries, &config);
        assert!(alerts.len() >= 2);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts[0].feature, FeatureKey::BeatStrength);
        assert!(alerts[1..].iter().all(|a| a.severity == AlertSeverity::Warning));
    }

    #[test]
    fn test_prompt_serializes_table_values() {
        let entries = entries_with_beat_z(1.0);
        let alerts = identify_alerts(&entries, &GatekeeperConfig::default());
        let prompt = decision_prompt(&entries, &alerts);

        assert!(prompt.contains("Beat Strength:"));
        assert!(prompt.contains("Candidate: 0.90"));
        assert!(prompt.contains("Reference: 0.80"));
        assert!(prompt.contains("Weighted Z-Score: 1.00 (weight: 3x)"));
        assert!(prompt.contains("No critical alerts detected."));
    }

    #[test]
    fn test_prompt_lists_alerts() {
        let entries = entries_with_beat_z(2.5);
        let alerts = identify_alerts(&entries, &GatekeeperConfig::default());
        let prompt = decision_prompt(&entries, &alerts);

        assert!(prompt.contains("ALERTS:"));
        assert!(prompt.contains("CRITICAL"));
        assert!(!prompt.contains("No critical alerts detected."));
    }
}
