//! Aggregate playlist profiles
//!
//! A `Profile` is the statistical fingerprint of a reference collection:
//! per-feature mean/std/min/max plus the most frequent musical key. Profiles
//! are immutable once built; a new snapshot of the collection means a new
//! profile, never an in-place update.

pub mod builder;

pub use builder::build_profile;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::features::key::FeatureKey;

/// Per-feature statistics over a reference collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileStat {
    /// Arithmetic mean of all present values
    pub mean: f64,
    /// Population standard deviation (0.0 when all values are identical)
    pub std: f64,
    /// Smallest present value
    pub min: f64,
    /// Largest present value
    pub max: f64,
}

/// Statistical profile of a reference track collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    stats: BTreeMap<FeatureKey, ProfileStat>,
    key_mode: Option<String>,
}

impl Profile {
    pub(crate) fn new(stats: BTreeMap<FeatureKey, ProfileStat>, key_mode: Option<String>) -> Self {
        Self { stats, key_mode }
    }

    /// Statistics for one feature, if it was observed in the collection
    pub fn stat(&self, key: FeatureKey) -> Option<&ProfileStat> {
        self.stats.get(&key)
    }

    /// Most frequent musical key in the collection, if any track carried one
    pub fn key_mode(&self) -> Option<&str> {
        self.key_mode.as_deref()
    }

    /// True when the key has a stat in this profile
    pub fn contains(&self, key: FeatureKey) -> bool {
        self.stats.contains_key(&key)
    }

    /// Number of profiled numeric features
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// True when no feature was profiled
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty() && self.key_mode.is_none()
    }

    /// Iterate profiled features in key order
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, &ProfileStat)> {
        self.stats.iter().map(|(k, s)| (*k, s))
    }
}
