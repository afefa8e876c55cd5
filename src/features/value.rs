//! Tagged descriptor values
//!
//! A descriptor value is tagged as numeric or categorical exactly once, at
//! ingestion. Downstream logic branches on the tag, never on runtime type
//! inspection. A missing descriptor is modeled by key absence in the vector,
//! not by a value variant.

use serde::{Deserialize, Serialize};

/// A single descriptor value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Finite numeric descriptor
    Numeric(f64),
    /// Categorical descriptor (musical key)
    Categorical(String),
}

impl FeatureValue {
    /// Numeric payload, if this value is numeric and finite
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            FeatureValue::Numeric(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Categorical payload, if this value is categorical
    pub fn as_categorical(&self) -> Option<&str> {
        match self {
            FeatureValue::Categorical(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Numeric(v)
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        FeatureValue::Categorical(s)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        FeatureValue::Categorical(s.to_string())
    }
}
