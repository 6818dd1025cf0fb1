//! Input and output records of the bundler.
//!
//! Input edges serialize as the plain 4-tuple `[x1, y1, x2, y2]`; output rows
//! carry the `x, y, index, group` columns consumed by the rendering layer.
use crate::geometry;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Straight input edge from `source` to `target`. Identified by its position
/// in the edge slice.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Edge {
    pub source: Point2<f64>,
    pub target: Point2<f64>,
}

impl Edge {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            source: Point2::new(x1, y1),
            target: Point2::new(x2, y2),
        }
    }

    pub fn from_points(source: Point2<f64>, target: Point2<f64>) -> Self {
        Self { source, target }
    }

    /// Direction vector `target - source`.
    #[inline]
    pub fn vector(&self) -> Vector2<f64> {
        geometry::edge_vector(self)
    }

    /// Length floored to `eps`.
    #[inline]
    pub fn length(&self, eps: f64) -> f64 {
        geometry::edge_length(self, eps)
    }

    #[inline]
    pub fn midpoint(&self) -> Point2<f64> {
        geometry::midpoint(&self.source, &self.target)
    }

    pub fn is_finite(&self) -> bool {
        self.source.coords.iter().all(|v| v.is_finite())
            && self.target.coords.iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 4]> for Edge {
    fn from(v: [f64; 4]) -> Self {
        Edge::new(v[0], v[1], v[2], v[3])
    }
}

impl From<(f64, f64, f64, f64)> for Edge {
    fn from((x1, y1, x2, y2): (f64, f64, f64, f64)) -> Self {
        Edge::new(x1, y1, x2, y2)
    }
}

impl From<Edge> for [f64; 4] {
    fn from(e: Edge) -> Self {
        [e.source.x, e.source.y, e.target.x, e.target.y]
    }
}

/// One output row: a point of a bundled edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BundledPoint {
    pub x: f64,
    pub y: f64,
    /// Normalized arc position, 0 at the source and 1 at the target.
    pub index: f64,
    /// Index of the input edge this point belongs to.
    pub group: usize,
}

/// Flattened bundling result: `n_edges × segments` rows, grouped in edge
/// order, `index` increasing within each group.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundledEdges {
    n_edges: usize,
    segments: usize,
    rows: Vec<BundledPoint>,
}

impl BundledEdges {
    pub(crate) fn from_parts(n_edges: usize, segments: usize, rows: Vec<BundledPoint>) -> Self {
        debug_assert_eq!(rows.len(), n_edges * segments);
        Self {
            n_edges,
            segments,
            rows,
        }
    }

    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    /// Points per bundled edge (`P + 2` of the final cycle).
    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[BundledPoint] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<BundledPoint> {
        self.rows
    }

    /// Rows of edge `group`, or `None` when out of range.
    pub fn group(&self, group: usize) -> Option<&[BundledPoint]> {
        if group >= self.n_edges {
            return None;
        }
        let start = group * self.segments;
        Some(&self.rows[start..start + self.segments])
    }

    /// Iterates the per-edge row groups in edge order.
    pub fn groups(&self) -> impl Iterator<Item = &[BundledPoint]> + '_ {
        // chunks() panics on a zero size; an empty result has no groups anyway.
        self.rows.chunks(self.segments.max(1))
    }

    pub fn xs(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.y).collect()
    }

    pub fn indices(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.index).collect()
    }

    pub fn group_ids(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.group).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_serializes_as_four_tuple() {
        let edge = Edge::new(0.0, 1.0, 2.0, 3.5);
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(json, "[0.0,1.0,2.0,3.5]");
        let back: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
    }

    #[test]
    fn group_slices_follow_edge_order() {
        let rows = (0..6)
            .map(|i| BundledPoint {
                x: i as f64,
                y: 0.0,
                index: (i % 3) as f64 / 2.0,
                group: i / 3,
            })
            .collect();
        let out = BundledEdges::from_parts(2, 3, rows);
        assert_eq!(out.group(1).unwrap()[0].x, 3.0);
        assert!(out.group(2).is_none());
        assert_eq!(out.groups().count(), 2);
        assert_eq!(out.group_ids(), vec![0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn non_finite_edges_are_detected() {
        assert!(Edge::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Edge::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!Edge::new(0.0, 0.0, 1.0, f64::INFINITY).is_finite());
    }
}
