//! Track-versus-profile compatibility scoring
//!
//! Scores one track's feature vector against an aggregate playlist profile.
//! The result is an ordered list of [`CompatibilityItem`]s whose first entry
//! is always the overall match score; every following entry is one feature's
//! tolerance-banded judgment.
//!
//! The comparator is a pure function of its inputs. Any per-feature fault
//! (missing data, type mismatch) degrades to a neutral status-good item, so
//! scoring a whole playlist never aborts on one malformed track.

pub mod banding;
pub mod messages;

pub use banding::CompatibilityStatus;

use serde::{Deserialize, Serialize};

use crate::config::ComparatorConfig;
use crate::features::key::{FeatureKey, NUMERIC_KEYS};
use crate::features::vector::FeatureVector;
use crate::profile::Profile;

use banding::{band_for_distance, feature_score, score_status};
use messages::feature_message;

/// One entry of a comparison result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityItem {
    /// Display name of the compared parameter
    pub parameter: String,
    /// Verdict band
    pub status: CompatibilityStatus,
    /// Human-readable judgment, direction-aware
    pub message: String,
    /// Overall match percentage; only present on the Overall Score item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Presentation row derived from a [`CompatibilityItem`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Parameter the suggestion applies to
    pub category: String,
    /// The suggestion text
    pub suggestion: String,
    /// Verdict band of the underlying item
    pub status: CompatibilityStatus,
}

/// Compare one track against a playlist profile
///
/// Returns a non-empty list whose first element is the Overall Score item
/// (score in [0, 100]); the remaining items cover every numeric feature
/// present in both the vector and the profile, followed by the musical key
/// judgment when the track carries one.
pub fn compare(
    vector: &FeatureVector,
    profile: &Profile,
    config: &ComparatorConfig,
) -> Vec<CompatibilityItem> {
    log::debug!(
        "Comparing track ({} descriptors) against profile ({} features)",
        vector.len(),
        profile.len()
    );

    let mut items = Vec::new();

    let score = match_score(vector, profile, config);
    items.push(CompatibilityItem {
        parameter: "Overall Score".to_string(),
        status: score_status(score, config),
        message: format!("Overall match: {}% compatible with target playlist", score),
        score: Some(score),
    });

    for key in NUMERIC_KEYS {
        if vector.contains(key) && profile.contains(key) {
            items.push(compare_feature(vector, profile, key, config));
        }
    }

    if vector.contains(FeatureKey::Key) {
        items.push(compare_key(vector, profile));
    }

    items
}

/// Overall match score in [0, 100], rounded to one decimal
///
/// Mean of per-feature scores over every feature present in both sides with
/// a finite numeric value. A zero-std feature contributes distance 0 (full
/// score) regardless of the candidate value. 0.0 when nothing was comparable.
pub fn match_score(vector: &FeatureVector, profile: &Profile, config: &ComparatorConfig) -> f64 {
    let mut scores = Vec::new();

    for (key, _) in vector.iter() {
        if key.is_categorical() {
            continue;
        }
        let value = match vector.numeric(key) {
            Some(v) => v,
            None => continue,
        };
        let stat = match profile.stat(key) {
            Some(s) => s,
            None => continue,
        };
        let distance = normalized_distance(value, stat.mean, stat.std);
        scores.push(feature_score(distance, config));
    }

    if scores.is_empty() {
        return 0.0;
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Compare a single numeric feature with σ-distance banding
///
/// Degrades to a neutral status-good item when the feature is missing on
/// either side or carries a mistyped value.
pub fn compare_feature(
    vector: &FeatureVector,
    profile: &Profile,
    key: FeatureKey,
    config: &ComparatorConfig,
) -> CompatibilityItem {
    if key.is_categorical() {
        return compare_key(vector, profile);
    }

    let value = match vector.numeric(key) {
        Some(v) => v,
        None => return cannot_compare(key),
    };
    let stat = match profile.stat(key) {
        Some(s) => *s,
        None => return cannot_compare(key),
    };

    let distance = normalized_distance(value, stat.mean, stat.std);
    let band = band_for_distance(distance, config);

    CompatibilityItem {
        parameter: key.label().to_string(),
        status: band,
        message: feature_message(key, value, &stat, band),
        score: None,
    }
}

/// Convert comparison items into presentation recommendations
pub fn recommendations(items: &[CompatibilityItem]) -> Vec<Recommendation> {
    items
        .iter()
        .map(|item| Recommendation {
            category: item.parameter.clone(),
            suggestion: item.message.clone(),
            status: item.status,
        })
        .collect()
}

/// σ-distance of a value from the profile mean; zero spread resolves to
/// zero distance, never a division fault
fn normalized_distance(value: f64, mean: f64, std: f64) -> f64 {
    if std > 0.0 {
        (value - mean).abs() / std
    } else {
        0.0
    }
}

/// Musical key judgment: matching the playlist mode is perfect, any other
/// key is merely good, never penalized harder
fn compare_key(vector: &FeatureVector, profile: &Profile) -> CompatibilityItem {
    let parameter = FeatureKey::Key.label().to_string();

    let track_key = match vector.categorical(FeatureKey::Key) {
        Some(k) => k,
        None => return cannot_compare(FeatureKey::Key),
    };

    match profile.key_mode() {
        Some(mode) if mode == track_key => CompatibilityItem {
            parameter,
            status: CompatibilityStatus::Perfect,
            message: format!("Key: {} - matches the playlist's most common key", track_key),
            score: None,
        },
        Some(mode) => CompatibilityItem {
            parameter,
            status: CompatibilityStatus::Good,
            message: format!(
                "Key: {} - differs from the most common key ({}), often acceptable",
                track_key, mode
            ),
            score: None,
        },
        None => CompatibilityItem {
            parameter,
            status: CompatibilityStatus::Good,
            message: format!("Key: {} - no playlist key data to compare", track_key),
            score: None,
        },
    }
}

fn cannot_compare(key: FeatureKey) -> CompatibilityItem {
    CompatibilityItem {
        parameter: key.label().to_string(),
        status: CompatibilityStatus::Good,
        message: format!("{}: cannot compare - insufficient data", key.label()),
        score: None,
    }
}
