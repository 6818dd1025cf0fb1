//! Pairwise edge compatibility.
//!
//! FDEB only lets an edge attract edges that look like it. "Looking alike" is
//! the product of four measures in `[0, 1]` (see [`metrics`]):
//!
//! - angle: `|cos|` of the angle between the edge directions;
//! - scale: how close the two lengths are;
//! - position: how close the midpoints are relative to the average length;
//! - visibility: how much each edge, projected on the other's line, is
//!   centred on it; the weaker of the two directions counts.
//!
//! Scores below `compatibility_threshold` are dropped, which makes the result
//! sparse; it is stored as per-edge adjacency lists in
//! [`CompatibilityMatrix`].
//!
//! Complexity
//! - All `n (n - 1) / 2` pairs are visited. Visibility costs four projections
//!   and is evaluated only when angle, scale and position each pass the
//!   threshold on their own; since every factor is at most 1, a pair failing
//!   any of them cannot reach the threshold. On typical graphs this skips
//!   most of the visibility work.
//! - With the `parallel` feature the rows are computed on the rayon pool.
//!   Each worker only writes its own row, rows are merged in index order, so
//!   the result does not depend on scheduling.

mod matrix;
pub mod metrics;

pub use matrix::{CompatibilityMatrix, CompatibilityStats};
pub use metrics::EdgeGeometry;

use crate::params::Tolerances;
use crate::types::Edge;
use log::debug;
use metrics::{
    angle_compatibility, position_compatibility, scale_compatibility, visibility_compatibility,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the thresholded compatibility matrix of `edges`.
pub fn compute_compatibility(
    edges: &[Edge],
    threshold: f64,
    tolerances: &Tolerances,
) -> CompatibilityMatrix {
    compute_compatibility_with_stats(edges, threshold, tolerances).0
}

/// Same as [`compute_compatibility`], also reporting pair counts.
pub fn compute_compatibility_with_stats(
    edges: &[Edge],
    threshold: f64,
    tolerances: &Tolerances,
) -> (CompatibilityMatrix, CompatibilityStats) {
    let n = edges.len();
    if n <= 1 {
        return (CompatibilityMatrix::empty(n), CompatibilityStats::default());
    }

    let geoms: Vec<EdgeGeometry> = edges
        .iter()
        .map(|e| EdgeGeometry::new(e, tolerances.eps))
        .collect();

    let rows = upper_rows(&geoms, threshold, tolerances);
    let candidate_pairs = rows.iter().map(|r| r.candidates).sum();
    let matrix = CompatibilityMatrix::from_upper_rows(rows.into_iter().map(|r| r.entries).collect());

    let stats = CompatibilityStats {
        total_pairs: n * (n - 1) / 2,
        candidate_pairs,
        compatible_pairs: matrix.pair_count(),
    };
    debug!(
        "Compatibility: {} edges, visibility on {} of {} pairs ({:.1}% filtered), {} compatible",
        n,
        stats.candidate_pairs,
        stats.total_pairs,
        stats.filtered_fraction() * 100.0,
        stats.compatible_pairs
    );
    (matrix, stats)
}

/// Combined score of one pair, or `None` when it is below `threshold`.
///
/// Exposed for diagnostics and tests; the matrix builder uses the same path.
pub fn pair_score(
    p: &EdgeGeometry,
    q: &EdgeGeometry,
    threshold: f64,
    tolerances: &Tolerances,
) -> Option<f64> {
    score_pair(p, q, threshold, tolerances).score
}

struct UpperRow {
    entries: Vec<(usize, f64)>,
    candidates: usize,
}

struct PairOutcome {
    candidate: bool,
    score: Option<f64>,
}

fn score_pair(
    p: &EdgeGeometry,
    q: &EdgeGeometry,
    threshold: f64,
    tolerances: &Tolerances,
) -> PairOutcome {
    let angle = angle_compatibility(p, q, tolerances.angle_floor);
    let scale = scale_compatibility(p, q);
    let position = position_compatibility(p, q);
    // NaN fails every comparison and is filtered out with the rest.
    if !(angle >= threshold && scale >= threshold && position >= threshold) {
        return PairOutcome {
            candidate: false,
            score: None,
        };
    }
    let visibility = visibility_compatibility(p, q, tolerances);
    let score = angle * scale * position * visibility;
    PairOutcome {
        candidate: true,
        score: (score >= threshold && score > 0.0).then_some(score),
    }
}

fn upper_row(i: usize, geoms: &[EdgeGeometry], threshold: f64, tolerances: &Tolerances) -> UpperRow {
    let p = &geoms[i];
    let mut entries = Vec::new();
    let mut candidates = 0usize;
    for (j, q) in geoms.iter().enumerate().skip(i + 1) {
        let outcome = score_pair(p, q, threshold, tolerances);
        if outcome.candidate {
            candidates += 1;
        }
        if let Some(score) = outcome.score {
            entries.push((j, score));
        }
    }
    UpperRow {
        entries,
        candidates,
    }
}

fn upper_rows(geoms: &[EdgeGeometry], threshold: f64, tolerances: &Tolerances) -> Vec<UpperRow> {
    #[cfg(feature = "parallel")]
    {
        (0..geoms.len())
            .into_par_iter()
            .map(|i| upper_row(i, geoms, threshold, tolerances))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..geoms.len())
            .map(|i| upper_row(i, geoms, threshold, tolerances))
            .collect()
    }
}
