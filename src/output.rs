//! Output assembly: flattens final polylines into `(x, y, index, group)` rows.
use crate::error::BundleError;
use crate::subdivision::PolylineSet;
use crate::types::{BundledEdges, BundledPoint};
use nalgebra::Point2;

/// Flattens `polylines` into rows, grouped in edge order.
///
/// `index = k / (segments - 1)`, so it runs exactly from 0 at the source to 1
/// at the target.
pub fn assemble(polylines: &PolylineSet) -> BundledEdges {
    let n_edges = polylines.n_edges();
    let segments = if n_edges == 0 { 0 } else { polylines.stride() };
    let denom = segments.saturating_sub(1).max(1) as f64;

    let mut rows = Vec::with_capacity(n_edges * segments);
    for (group, line) in polylines.iter().enumerate() {
        rows.extend(line.iter().enumerate().map(|(k, p)| BundledPoint {
            x: p.x,
            y: p.y,
            index: k as f64 / denom,
            group,
        }));
    }
    BundledEdges::from_parts(n_edges, segments, rows)
}

/// Assembles loose per-edge polylines; they must all have the same length.
pub fn assemble_polylines(polylines: &[Vec<Point2<f64>>]) -> Result<BundledEdges, BundleError> {
    let set = PolylineSet::from_polylines(polylines)?;
    Ok(assemble(&set))
}
