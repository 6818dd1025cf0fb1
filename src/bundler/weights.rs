//! Edge weights: validation and normalization to `[0.5, 1.5]`.
use crate::error::BundleError;

/// Spread below which all weights are treated as equal.
const FLAT_SPREAD: f64 = 1e-8;

/// Maps weights linearly onto `[0.5, 1.5]`; a flat input maps to all ones.
pub fn normalize_weights(weights: &[f64]) -> Vec<f64> {
    let (min, max) = weights
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &w| {
            (lo.min(w), hi.max(w))
        });
    let spread = max - min;
    if !(spread >= FLAT_SPREAD) {
        return vec![1.0; weights.len()];
    }
    weights
        .iter()
        .map(|w| 0.5 + (w - min) / spread)
        .collect()
}

/// Checks `weights` against the edge count and normalizes them.
pub(crate) fn prepare_weights(
    weights: Option<&[f64]>,
    n_edges: usize,
) -> Result<Option<Vec<f64>>, BundleError> {
    let Some(weights) = weights else {
        return Ok(None);
    };
    if weights.len() != n_edges {
        return Err(BundleError::WeightCountMismatch {
            edges: n_edges,
            weights: weights.len(),
        });
    }
    if let Some(edge) = weights.iter().position(|w| !w.is_finite()) {
        return Err(BundleError::NonFiniteInput { edge });
    }
    Ok(Some(normalize_weights(weights)))
}
