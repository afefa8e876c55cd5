//! # Playlist Fit
//!
//! A playlist compatibility engine for curation tools, scoring candidate
//! tracks against the statistical fingerprint of a reference playlist.
//!
//! ## Features
//!
//! - **Profile Builder**: Aggregates per-track descriptors into mean/std/range
//!   statistics plus the playlist's dominant musical key
//! - **Comparator**: Tolerance-banded per-feature judgments and a 0-100
//!   overall match score with direction-aware advice
//! - **Gatekeeper**: Weighted nearest-neighbor screening over the Golden 8
//!   descriptors with CRITICAL/WARNING alerts and a decision prompt
//!
//! ## Quick Start
//!
//! ```
//! use playlist_fit::{check_compatibility, ComparatorConfig, FeatureKey, FeatureVector};
//!
//! let track = |bpm: f64, energy: f64| {
//!     let mut v = FeatureVector::new();
//!     v.set_numeric(FeatureKey::Bpm, bpm);
//!     v.set_numeric(FeatureKey::Energy, energy);
//!     v
//! };
//!
//! let playlist = vec![track(120.0, 0.8), track(122.0, 0.7), track(118.0, 0.75)];
//! let candidate = track(121.0, 0.78);
//!
//! let items = check_compatibility(&candidate, &playlist, &ComparatorConfig::default());
//! println!("{}", items[0].message); // "Overall match: ..% compatible with target playlist"
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Track Descriptors → Profile Builder → Comparator → Items + Recommendations
//!                   → Gatekeeper (fit) → Gatekeeper (check) → Report + Alerts
//! ```
//!
//! The comparator judges a track against the playlist average; the gatekeeper
//! judges it against the single closest reference track. The two answer
//! different questions and neither replaces the other.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparator;
pub mod config;
pub mod error;
pub mod features;
pub mod gatekeeper;
pub mod profile;

// Re-export main types
pub use comparator::{
    compare, match_score, recommendations, CompatibilityItem, CompatibilityStatus, Recommendation,
};
pub use config::{ComparatorConfig, GatekeeperConfig};
pub use error::CompatibilityError;
pub use features::{Direction, FeatureKey, FeatureValue, FeatureVector};
pub use gatekeeper::{Alert, AlertSeverity, Gatekeeper, GatekeeperReport};
pub use profile::{build_profile, Profile, ProfileStat};

/// Score one candidate track against a reference playlist
///
/// Builds the playlist profile and runs the comparator in one call. Use
/// [`build_profile`] and [`compare`] separately when scoring many candidates
/// against the same playlist.
///
/// # Arguments
///
/// * `candidate` - Feature vector of the track under consideration
/// * `playlist` - Feature vectors of the reference playlist tracks
/// * `config` - Comparator tolerances and score bands
///
/// # Returns
///
/// Ordered compatibility items; the first is always the overall score.
pub fn check_compatibility(
    candidate: &FeatureVector,
    playlist: &[FeatureVector],
    config: &ComparatorConfig,
) -> Vec<CompatibilityItem> {
    let profile = build_profile(playlist);
    compare(candidate, &profile, config)
}
