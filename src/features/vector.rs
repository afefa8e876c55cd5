//! Sparse per-track feature vectors
//!
//! A `FeatureVector` holds the descriptors the extraction stage produced for
//! one track. Vectors are sparse: no track is required to supply every key.
//! Once ingested a vector is treated as immutable by the rest of the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::key::FeatureKey;
use super::value::FeatureValue;

/// Descriptors for one track, keyed by the closed vocabulary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: BTreeMap<FeatureKey, FeatureValue>,
}

impl FeatureVector {
    /// Create an empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a plain JSON object from the extraction stage
    ///
    /// Unknown keys are dropped. Non-finite numbers are dropped. A value
    /// whose type does not match its key's tag is dropped and logged.
    pub fn from_json(object: &serde_json::Map<String, Value>) -> FeatureVector {
        let mut vector = FeatureVector::new();
        for (name, raw) in object {
            let key = match FeatureKey::parse(name) {
                Some(key) => key,
                None => {
                    log::debug!("Ignoring unknown descriptor key '{}'", name);
                    continue;
                }
            };
            match (key.is_categorical(), raw) {
                (true, Value::String(s)) => {
                    vector.set_categorical(key, s.clone());
                }
                (false, Value::Number(n)) => match n.as_f64() {
                    Some(v) if v.is_finite() => {
                        vector.set_numeric(key, v);
                    }
                    _ => {
                        log::warn!("Dropping non-finite value for '{}'", name);
                    }
                },
                _ => {
                    log::warn!("Dropping mistyped value for '{}'", name);
                }
            }
        }
        vector
    }

    /// Set a numeric descriptor
    ///
    /// Non-finite values are dropped rather than stored.
    pub fn set_numeric(&mut self, key: FeatureKey, value: f64) {
        if value.is_finite() {
            self.values.insert(key, FeatureValue::Numeric(value));
        } else {
            log::warn!("Refusing to store non-finite {} value", key.as_str());
        }
    }

    /// Set a categorical descriptor
    pub fn set_categorical(&mut self, key: FeatureKey, value: impl Into<String>) {
        self.values.insert(key, FeatureValue::Categorical(value.into()));
    }

    /// Raw value for a key, if present
    pub fn get(&self, key: FeatureKey) -> Option<&FeatureValue> {
        self.values.get(&key)
    }

    /// Finite numeric value for a key
    ///
    /// Returns `None` when the key is absent, categorical, or non-finite.
    pub fn numeric(&self, key: FeatureKey) -> Option<f64> {
        self.values.get(&key).and_then(FeatureValue::as_numeric)
    }

    /// Categorical value for a key
    pub fn categorical(&self, key: FeatureKey) -> Option<&str> {
        self.values.get(&key).and_then(FeatureValue::as_categorical)
    }

    /// True when the key is present
    pub fn contains(&self, key: FeatureKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Number of stored descriptors
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no descriptors are stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate stored descriptors in key order
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, &FeatureValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }
}
