//! Standardizing transform over the Golden 8 reference matrix
//!
//! Zero-mean, unit-variance scaling fitted on the reference set. A feature
//! with zero variance keeps scale 1.0, so transforming never divides by zero
//! and standardized distances stay finite.

use serde::{Deserialize, Serialize};

/// Fitted standardizing transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    means: [f64; 8],
    scales: [f64; 8],
}

impl StandardScaler {
    /// Fit the transform on a non-empty reference matrix
    pub fn fit(matrix: &[[f64; 8]]) -> StandardScaler {
        let means = column_means(matrix);
        let stds = column_stds(matrix, &means);
        let mut scales = [1.0; 8];
        for (scale, std) in scales.iter_mut().zip(stds.iter()) {
            if *std > 0.0 {
                *scale = *std;
            }
        }
        StandardScaler { means, scales }
    }

    /// Standardize one row
    pub fn transform(&self, row: &[f64; 8]) -> [f64; 8] {
        let mut out = [0.0; 8];
        for i in 0..8 {
            out[i] = (row[i] - self.means[i]) / self.scales[i];
        }
        out
    }

    /// Per-column means the transform was fitted on
    pub fn means(&self) -> &[f64; 8] {
        &self.means
    }
}

/// Per-column means of a reference matrix
pub fn column_means(matrix: &[[f64; 8]]) -> [f64; 8] {
    let n = matrix.len() as f64;
    let mut means = [0.0; 8];
    for row in matrix {
        for i in 0..8 {
            means[i] += row[i];
        }
    }
    for mean in means.iter_mut() {
        *mean /= n;
    }
    means
}

/// Per-column population standard deviations
pub fn column_stds(matrix: &[[f64; 8]], means: &[f64; 8]) -> [f64; 8] {
    let n = matrix.len() as f64;
    let mut variances = [0.0; 8];
    for row in matrix {
        for i in 0..8 {
            variances[i] += (row[i] - means[i]).powi(2);
        }
    }
    let mut stds = [0.0; 8];
    for i in 0..8 {
        stds[i] = (variances[i] / n).sqrt();
    }
    stds
}
