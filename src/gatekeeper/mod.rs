//! Weighted nearest-neighbor gatekeeping
//!
//! The gatekeeper answers one question: does a candidate track fit the
//! playlist's sonic signature? It compares the candidate to its single
//! closest reference track rather than the playlist average, which keeps the
//! verdict meaningful for multi-modal playlists (e.g. a playlist split across
//! two tempo clusters, whose mean tempo matches neither cluster).
//!
//! State machine: UNFITTED until the first successful [`Gatekeeper::fit`],
//! FITTED afterwards. A fit either fully succeeds and atomically replaces the
//! fitted state, or fully fails with no observable effect. Checks running
//! concurrently with a fit see either the old or the new state, never a
//! partial one.

pub mod neighbors;
pub mod report;
pub mod scaler;

pub use report::{Alert, AlertSeverity, GatekeeperReport, WeightedZEntry};
pub use scaler::StandardScaler;

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::config::GatekeeperConfig;
use crate::error::CompatibilityError;
use crate::features::key::{FeatureKey, GOLDEN_8};
use crate::features::vector::FeatureVector;

use neighbors::nearest_neighbor;
use report::{decision_prompt, identify_alerts, weighted_z_entries};
use scaler::{column_means, column_stds};

/// Immutable snapshot produced by a successful fit
#[derive(Debug, Clone)]
pub struct FittedGatekeeper {
    scaler: StandardScaler,
    scaled_references: Vec<[f64; 8]>,
    raw_references: Vec<[f64; 8]>,
    reference_stds: [f64; 8],
}

impl FittedGatekeeper {
    /// Number of reference tracks this state was fitted on
    pub fn reference_count(&self) -> usize {
        self.raw_references.len()
    }
}

/// Playlist compatibility gatekeeper
///
/// # Example
///
/// ```
/// use playlist_fit::{FeatureVector, Gatekeeper, GatekeeperConfig};
/// use playlist_fit::features::GOLDEN_8;
///
/// let track = |offset: f64| {
///     let mut v = FeatureVector::new();
///     for (i, key) in GOLDEN_8.iter().enumerate() {
///         v.set_numeric(*key, i as f64 + offset);
///     }
///     v
/// };
///
/// let gatekeeper = Gatekeeper::new(GatekeeperConfig::default());
/// gatekeeper.fit(&[track(0.0), track(1.0)])?;
/// let report = gatekeeper.check(&track(0.1))?;
/// assert_eq!(report.nearest_index, 0);
/// # Ok::<(), playlist_fit::CompatibilityError>(())
/// ```
#[derive(Debug)]
pub struct Gatekeeper {
    config: GatekeeperConfig,
    fitted: RwLock<Option<Arc<FittedGatekeeper>>>,
}

impl Default for Gatekeeper {
    fn default() -> Self {
        Gatekeeper::new(GatekeeperConfig::default())
    }
}

impl Gatekeeper {
    /// Create an unfitted gatekeeper with the given weights and thresholds
    pub fn new(config: GatekeeperConfig) -> Self {
        Self { config, fitted: RwLock::new(None) }
    }

    /// True once a fit has succeeded
    pub fn is_fitted(&self) -> bool {
        self.fitted.read().map(|g| g.is_some()).unwrap_or(false)
    }

    /// Fit the gatekeeper on a reference track collection
    ///
    /// Requires at least two reference tracks, each carrying every Golden 8
    /// descriptor as a finite numeric value. On failure nothing changes: a
    /// previously fitted state stays valid and `check` keeps using it.
    ///
    /// # Errors
    ///
    /// `InsufficientReferenceData` for fewer than two tracks,
    /// `MissingFeature`/`TypeMismatch` for malformed tracks.
    pub fn fit(&self, references: &[FeatureVector]) -> Result<(), CompatibilityError> {
        if references.len() < 2 {
            return Err(CompatibilityError::InsufficientReferenceData(format!(
                "need at least 2 reference tracks, got {}",
                references.len()
            )));
        }

        let mut raw_references = Vec::with_capacity(references.len());
        for (index, reference) in references.iter().enumerate() {
            let row = golden_row(reference).map_err(|e| {
                log::warn!("Reference track {} rejected: {}", index, e);
                e
            })?;
            raw_references.push(row);
        }

        let means = column_means(&raw_references);
        let reference_stds = column_stds(&raw_references, &means);
        let scaler = StandardScaler::fit(&raw_references);
        let scaled_references = raw_references.iter().map(|row| scaler.transform(row)).collect();

        let state = FittedGatekeeper {
            scaler,
            scaled_references,
            raw_references,
            reference_stds,
        };

        let mut guard = self
            .fitted
            .write()
            .map_err(|_| CompatibilityError::ProcessingError("fitted state lock poisoned".into()))?;
        *guard = Some(Arc::new(state));
        log::debug!("Gatekeeper fitted on {} reference tracks", references.len());
        Ok(())
    }

    /// Check a candidate track against the fitted reference set
    ///
    /// Standardizes the candidate, finds its nearest reference track, computes
    /// the weighted deviation table and alerts, and assembles the report.
    ///
    /// # Errors
    ///
    /// `NotFitted` before any successful fit, `MissingFeature`/`TypeMismatch`
    /// for a malformed candidate, `ProcessingError` for internal faults.
    pub fn check(&self, candidate: &FeatureVector) -> Result<GatekeeperReport, CompatibilityError> {
        let fitted = {
            let guard = self.fitted.read().map_err(|_| {
                CompatibilityError::ProcessingError("fitted state lock poisoned".into())
            })?;
            guard.clone().ok_or(CompatibilityError::NotFitted)?
        };

        let user_row = golden_row(candidate)?;
        let scaled = fitted.scaler.transform(&user_row);

        let (nearest_index, nearest_distance) =
            nearest_neighbor(&fitted.scaled_references, &scaled).ok_or_else(|| {
                CompatibilityError::ProcessingError("fitted reference set is empty".into())
            })?;
        let nearest_row = fitted.raw_references[nearest_index];

        let entries =
            weighted_z_entries(&user_row, &nearest_row, &fitted.reference_stds, &self.config);
        let alerts = identify_alerts(&entries, &self.config);
        let prompt = decision_prompt(&entries, &alerts);

        log::debug!(
            "Check: nearest reference {} at distance {:.3}, {} alert(s)",
            nearest_index,
            nearest_distance,
            alerts.len()
        );

        Ok(GatekeeperReport {
            user_features: golden_map(&user_row),
            nearest_reference: golden_map(&nearest_row),
            nearest_index,
            nearest_distance,
            weighted_z_scores: entries,
            alerts,
            prompt,
        })
    }
}

/// Extract the Golden 8 row from a vector
///
/// Every Golden 8 key must be present with a finite numeric value.
fn golden_row(vector: &FeatureVector) -> Result<[f64; 8], CompatibilityError> {
    let mut row = [0.0; 8];
    for (i, &key) in GOLDEN_8.iter().enumerate() {
        match vector.numeric(key) {
            Some(value) => row[i] = value,
            None if vector.contains(key) => {
                return Err(CompatibilityError::TypeMismatch(format!(
                    "'{}' is not a finite numeric value",
                    key.as_str()
                )));
            }
            None => {
                return Err(CompatibilityError::MissingFeature(format!(
                    "'{}' is required for the Golden 8 check",
                    key.as_str()
                )));
            }
        }
    }
    Ok(row)
}

fn golden_map(row: &[f64; 8]) -> BTreeMap<FeatureKey, f64> {
    GOLDEN_8.iter().zip(row.iter()).map(|(&k, &v)| (k, v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_track(values: [f64; 8]) -> FeatureVector {
        let mut v = FeatureVector::new();
        for (i, &key) in GOLDEN_8.iter().enumerate() {
            v.set_numeric(key, values[i]);
        }
        v
    }

    fn uniform_track(offset: f64) -> FeatureVector {
        golden_track([offset; 8])
    }

    #[test]
    fn test_check_before_fit_is_not_fitted() {
        let gatekeeper = Gatekeeper::default();
        assert!(!gatekeeper.is_fitted());
        let err = gatekeeper.check(&uniform_track(0.0)).unwrap_err();
        assert_eq!(err, CompatibilityError::NotFitted);
    }

    #[test]
    fn test_fit_requires_two_references() {
        let gatekeeper = Gatekeeper::default();
        let err = gatekeeper.fit(&[uniform_track(0.0)]).unwrap_err();
        assert!(matches!(err, CompatibilityError::InsufficientReferenceData(_)));
        assert!(!gatekeeper.is_fitted());
    }

    #[test]
    fn test_fit_rejects_missing_golden_key() {
        let gatekeeper = Gatekeeper::default();
        let mut incomplete = FeatureVector::new();
        incomplete.set_numeric(FeatureKey::Bpm, 120.0);

        let err = gatekeeper.fit(&[uniform_track(0.0), incomplete]).unwrap_err();
        assert!(matches!(err, CompatibilityError::MissingFeature(_)));
        assert!(!gatekeeper.is_fitted());
    }

    #[test]
    fn test_failed_fit_preserves_previous_state() {
        let gatekeeper = Gatekeeper::default();
        gatekeeper.fit(&[uniform_track(0.0), uniform_track(1.0)]).unwrap();

        let err = gatekeeper.fit(&[uniform_track(5.0)]).unwrap_err();
        assert!(matches!(err, CompatibilityError::InsufficientReferenceData(_)));

        // The old state still answers checks.
        let report = gatekeeper.check(&uniform_track(0.2)).unwrap();
        assert_eq!(report.nearest_index, 0);
    }

    #[test]
    fn test_successful_refit_replaces_state() {
        let gatekeeper = Gatekeeper::default();
        gatekeeper.fit(&[uniform_track(0.0), uniform_track(1.0)]).unwrap();
        gatekeeper.fit(&[uniform_track(10.0), uniform_track(11.0), uniform_track(12.0)]).unwrap();

        let report = gatekeeper.check(&uniform_track(12.3)).unwrap();
        assert_eq!(report.nearest_index, 2);
    }

    #[test]
    fn test_nearest_selection_and_tie_break() {
        let gatekeeper = Gatekeeper::default();
        gatekeeper
            .fit(&[uniform_track(2.0), uniform_track(2.0), uniform_track(8.0)])
            .unwrap();

        // Equidistant from the two identical references: lowest index wins.
        let report = gatekeeper.check(&uniform_track(2.0)).unwrap();
        assert_eq!(report.nearest_index, 0);
        assert_eq!(report.nearest_distance, 0.0);
    }

    #[test]
    fn test_check_rejects_malformed_candidate() {
        let gatekeeper = Gatekeeper::default();
        gatekeeper.fit(&[uniform_track(0.0), uniform_track(1.0)]).unwrap();

        let incomplete = FeatureVector::new();
        let err = gatekeeper.check(&incomplete).unwrap_err();
        assert!(matches!(err, CompatibilityError::MissingFeature(_)));
    }

    #[test]
    fn test_report_shape() {
        let gatekeeper = Gatekeeper::default();
        gatekeeper.fit(&[uniform_track(0.0), uniform_track(1.0)]).unwrap();

        let report = gatekeeper.check(&uniform_track(0.4)).unwrap();
        assert_eq!(report.weighted_z_scores.len(), 8);
        assert_eq!(report.user_features.len(), 8);
        assert_eq!(report.nearest_reference.len(), 8);
        assert_eq!(report.weighted_z_scores[0].feature, FeatureKey::BeatStrength);
        assert!(report.prompt.contains("GOLDEN 8 COMPARISON"));
    }

    #[test]
    fn test_concurrent_checks_share_fitted_state() {
        use std::thread;

        let gatekeeper = Arc::new(Gatekeeper::default());
        gatekeeper.fit(&[uniform_track(0.0), uniform_track(1.0)]).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let gatekeeper = Arc::clone(&gatekeeper);
                thread::spawn(move || {
                    let report = gatekeeper.check(&uniform_track(i as f64 * 0.1)).unwrap();
                    report.nearest_index
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 0);
        }
    }
}
