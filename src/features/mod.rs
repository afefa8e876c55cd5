//! Track descriptor model
//!
//! This module defines what the engine knows about a track:
//! - The closed descriptor vocabulary and the Golden 8 subset
//! - Tagged numeric/categorical values
//! - Sparse per-track feature vectors and their ingestion boundary

pub mod key;
pub mod value;
pub mod vector;

pub use key::{FeatureKey, GOLDEN_8, NUMERIC_KEYS};
pub use value::FeatureValue;
pub use vector::FeatureVector;

use serde::{Deserialize, Serialize};

/// Direction of a candidate value relative to a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Candidate value is above the target
    Above,
    /// Candidate value is below the target
    Below,
}

impl Direction {
    /// Direction of `value` relative to `target`
    ///
    /// Equal values are reported as `Above`; callers only ask for a direction
    /// once a nonzero deviation exists.
    pub fn of(value: f64, target: f64) -> Direction {
        if value < target {
            Direction::Below
        } else {
            Direction::Above
        }
    }

    /// Lowercase word for message rendering
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Above => "above",
            Direction::Below => "below",
        }
    }
}
