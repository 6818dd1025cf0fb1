//! Edge lists from node positions and links.
use crate::error::BundleError;
use crate::types::Edge;
use nalgebra::Point2;

/// One straight edge per `(source, target)` link, in link order.
pub fn edges_from_graph(
    nodes: &[Point2<f64>],
    links: &[(usize, usize)],
) -> Result<Vec<Edge>, BundleError> {
    links
        .iter()
        .enumerate()
        .map(|(link, &(a, b))| {
            let node = |idx: usize| {
                nodes.get(idx).copied().ok_or(BundleError::UnknownNode {
                    link,
                    node: idx,
                    nodes: nodes.len(),
                })
            };
            Ok(Edge::from_points(node(a)?, node(b)?))
        })
        .collect()
}
