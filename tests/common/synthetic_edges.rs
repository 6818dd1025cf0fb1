use edge_bundler::Edge;

/// `count` horizontal edges of length `length`, `spacing` apart, starting at y = 0.
pub fn parallel_edges(count: usize, spacing: f64, length: f64) -> Vec<Edge> {
    assert!(count > 0, "need at least one edge");
    (0..count)
        .map(|i| {
            let y = i as f64 * spacing;
            Edge::new(0.0, y, length, y)
        })
        .collect()
}

/// A horizontal and a vertical edge crossing at their midpoints.
pub fn crossing_pair(length: f64) -> Vec<Edge> {
    let half = 0.5 * length;
    vec![
        Edge::new(0.0, half, length, half),
        Edge::new(half, 0.0, half, length),
    ]
}

/// Deterministic pseudo-random edges inside `[0, extent)^2` (64-bit LCG).
pub fn scattered_edges(count: usize, extent: f64, seed: u64) -> Vec<Edge> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64 * extent
    };
    (0..count)
        .map(|_| Edge::new(next(), next(), next(), next()))
        .collect()
}

/// Y coordinate of each edge at its middle sample.
pub fn middle_ys(bundled: &edge_bundler::BundledEdges) -> Vec<f64> {
    let mid = bundled.segments() / 2;
    bundled.groups().map(|g| g[mid].y).collect()
}

pub fn spread(values: &[f64]) -> f64 {
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    max - min
}
