//! Nearest-neighbor search over the standardized reference matrix
//!
//! Exact linear scan with k=1 and Euclidean distance. Playlists are small
//! enough that nothing sub-linear is warranted, and the scan gives a
//! deterministic tie rule for free: equal distances resolve to the lowest
//! original index.

/// Index and Euclidean distance of the nearest reference row
///
/// Returns `None` only for an empty matrix.
pub fn nearest_neighbor(matrix: &[[f64; 8]], query: &[f64; 8]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, row) in matrix.iter().enumerate() {
        let distance_sq = squared_distance(row, query);
        match best {
            // Strictly-less keeps the lowest index on ties.
            Some((_, best_sq)) if distance_sq >= best_sq => {}
            _ => best = Some((index, distance_sq)),
        }
    }
    best.map(|(index, distance_sq)| (index, distance_sq.sqrt()))
}

fn squared_distance(a: &[f64; 8], b: &[f64; 8]) -> f64 {
    let mut sum = 0.0;
    for i in 0..8 {
        let d = a[i] - b[i];
        sum += d * d;
    }
    sum
}
