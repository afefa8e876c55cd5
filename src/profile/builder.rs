//! Profile aggregation
//!
//! Pure function of its input: collects every numeric descriptor observed in
//! the reference collection and reduces each to mean/std/min/max. Tracks with
//! heterogeneous schemas are supported; a feature's statistics are computed
//! over the tracks that carry it.

use std::collections::BTreeMap;

use crate::features::key::FeatureKey;
use crate::features::value::FeatureValue;
use crate::features::vector::FeatureVector;

use super::{Profile, ProfileStat};

/// Build a statistical profile from a reference track collection
///
/// An empty collection yields an empty profile, not an error. Malformed
/// values (categorical where numeric is expected, non-finite numbers) are
/// skipped and do not count toward any statistic. The reserved categorical
/// key is aggregated as a frequency mode.
///
/// # Example
///
/// ```
/// use playlist_fit::{build_profile, FeatureKey, FeatureVector};
///
/// let mut a = FeatureVector::new();
/// a.set_numeric(FeatureKey::Bpm, 120.0);
/// let mut b = FeatureVector::new();
/// b.set_numeric(FeatureKey::Bpm, 122.0);
///
/// let profile = build_profile(&[a, b]);
/// assert_eq!(profile.stat(FeatureKey::Bpm).unwrap().mean, 121.0);
/// ```
pub fn build_profile(tracks: &[FeatureVector]) -> Profile {
    log::debug!("Building profile from {} reference tracks", tracks.len());

    let mut samples: BTreeMap<FeatureKey, Vec<f64>> = BTreeMap::new();
    // Key counts kept in encounter order so mode ties resolve to the first
    // value that reached the winning count.
    let mut key_counts: Vec<(String, usize)> = Vec::new();

    for track in tracks {
        for (key, value) in track.iter() {
            match value {
                FeatureValue::Numeric(v) if key.is_categorical() => {
                    log::warn!(
                        "Skipping numeric value {} under categorical key '{}'",
                        v,
                        key.as_str()
                    );
                }
                FeatureValue::Numeric(v) => {
                    if v.is_finite() {
                        samples.entry(key).or_default().push(*v);
                    }
                }
                FeatureValue::Categorical(s) if key.is_categorical() => {
                    match key_counts.iter_mut().find(|(name, _)| name == s) {
                        Some((_, count)) => *count += 1,
                        None => key_counts.push((s.clone(), 1)),
                    }
                }
                FeatureValue::Categorical(_) => {
                    log::warn!(
                        "Skipping categorical value under numeric key '{}'",
                        key.as_str()
                    );
                }
            }
        }
    }

    let mut stats = BTreeMap::new();
    for (key, values) in samples {
        if let Some(stat) = reduce(&values) {
            stats.insert(key, stat);
        }
    }

    let key_mode = mode(&key_counts);
    Profile::new(stats, key_mode)
}

/// Reduce one feature's samples to a stat; `None` when no sample survived
fn reduce(values: &[f64]) -> Option<ProfileStat> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Some(ProfileStat { mean, std, min, max })
}

/// First value to reach the highest count wins
fn mode(counts: &[(String, usize)]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        match best {
            Some((_, best_count)) if *count <= best_count => {}
            _ => best = Some((name, *count)),
        }
    }
    best.map(|(name, _)| name.to_string())
}
