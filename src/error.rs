//! Error types for the compatibility engine

use std::fmt;

/// Errors that can occur while fitting or checking tracks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompatibilityError {
    /// Fewer than two reference tracks were supplied to `fit`
    InsufficientReferenceData(String),

    /// A required feature key is absent from a vector or reference set
    MissingFeature(String),

    /// A categorical value was found where a numeric one was expected, or vice versa
    TypeMismatch(String),

    /// `check` was called before any successful `fit`
    NotFitted,

    /// Internal processing error during a check
    ProcessingError(String),
}

impl fmt::Display for CompatibilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatibilityError::InsufficientReferenceData(msg) => {
                write!(f, "Insufficient reference data: {}", msg)
            }
            CompatibilityError::MissingFeature(msg) => write!(f, "Missing feature: {}", msg),
            CompatibilityError::TypeMismatch(msg) => write!(f, "Type mismatch: {}", msg),
            CompatibilityError::NotFitted => {
                write!(f, "Gatekeeper not fitted: call fit() with reference tracks first")
            }
            CompatibilityError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for CompatibilityError {}
