//! Per-edge polylines and arc-length resubdivision.
//!
//! All edges go through the same subdivision schedule, so every polyline has
//! the same number of points at any time. [`PolylineSet`] exploits that and
//! keeps all of them in one flat buffer with a fixed stride
//! (`[n_edges][P + 2]`), which the force simulator double-buffers.
//!
//! Resubdivision walks the current polyline's cumulative arc length and
//! drops `P` new interior points at even spacing `total / (P + 1)`. Endpoints
//! are copied, never recomputed, so they stay bit-identical to the input.
use crate::error::BundleError;
use crate::types::Edge;
use nalgebra::Point2;

/// Fixed-stride storage for the polylines of all edges.
#[derive(Clone, Debug, PartialEq)]
pub struct PolylineSet {
    points: Vec<Point2<f64>>,
    n_edges: usize,
    stride: usize,
}

impl PolylineSet {
    /// Two-point polylines `[source, target]`.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut points = Vec::with_capacity(edges.len() * 2);
        for e in edges {
            points.push(e.source);
            points.push(e.target);
        }
        Self {
            points,
            n_edges: edges.len(),
            stride: 2,
        }
    }

    /// Packs per-edge polylines, rejecting ragged input.
    pub fn from_polylines(polylines: &[Vec<Point2<f64>>]) -> Result<Self, BundleError> {
        let stride = polylines.first().map_or(0, Vec::len);
        let mut points = Vec::with_capacity(polylines.len() * stride);
        for (edge, line) in polylines.iter().enumerate() {
            if line.len() != stride {
                return Err(BundleError::ShapeMismatch {
                    edge,
                    expected: stride,
                    found: line.len(),
                });
            }
            points.extend_from_slice(line);
        }
        Ok(Self {
            points,
            n_edges: polylines.len(),
            stride,
        })
    }

    /// Zero-filled set, used as the back buffer of the simulator.
    pub fn zeroed(n_edges: usize, stride: usize) -> Self {
        Self {
            points: vec![Point2::origin(); n_edges * stride],
            n_edges,
            stride,
        }
    }

    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    /// Points per polyline.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Interior points per polyline (`P`).
    pub fn subdivisions(&self) -> usize {
        self.stride.saturating_sub(2)
    }

    pub fn is_empty(&self) -> bool {
        self.n_edges == 0
    }

    pub fn edge(&self, idx: usize) -> &[Point2<f64>] {
        let start = idx * self.stride;
        &self.points[start..start + self.stride]
    }

    pub fn edge_mut(&mut self, idx: usize) -> &mut [Point2<f64>] {
        let start = idx * self.stride;
        &mut self.points[start..start + self.stride]
    }

    /// Iterates the polylines in edge order.
    pub fn iter(&self) -> impl Iterator<Item = &[Point2<f64>]> + '_ {
        (0..self.n_edges).map(move |i| self.edge(i))
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Point2<f64>] {
        &mut self.points
    }

    /// Same shape as `other`; contents are left as they are when it already
    /// matches.
    pub(crate) fn reshape_like(&mut self, other: &PolylineSet) {
        if self.n_edges != other.n_edges || self.stride != other.stride {
            self.points.clear();
            self.points
                .resize(other.n_edges * other.stride, Point2::origin());
            self.n_edges = other.n_edges;
            self.stride = other.stride;
        }
    }

    pub fn to_polylines(&self) -> Vec<Vec<Point2<f64>>> {
        self.iter().map(<[Point2<f64>]>::to_vec).collect()
    }
}

/// Resamples every polyline to `target_p + 2` points.
///
/// `segment_floor` is the length below which a segment is treated as a
/// point (the new sample stays where the walk currently is).
pub fn resubdivide(polylines: &PolylineSet, target_p: usize, segment_floor: f64) -> PolylineSet {
    let stride = target_p + 2;
    let mut out = PolylineSet::zeroed(polylines.n_edges(), stride);
    if polylines.is_empty() {
        return out;
    }
    for (src, dst) in polylines
        .iter()
        .zip(out.points_mut().chunks_exact_mut(stride))
    {
        resample_polyline(src, target_p, segment_floor, dst);
    }
    out
}

/// Writes `target_p + 2` evenly arc-length spaced samples of `src` into `out`.
///
/// `src` needs at least two points. With `target_p == 1` the single interior
/// point is the midpoint of the endpoints.
pub fn resample_polyline(
    src: &[Point2<f64>],
    target_p: usize,
    segment_floor: f64,
    out: &mut [Point2<f64>],
) {
    debug_assert!(src.len() >= 2);
    debug_assert_eq!(out.len(), target_p + 2);
    let first = src[0];
    let last = src[src.len() - 1];
    out[0] = first;
    out[target_p + 1] = last;

    if target_p == 1 {
        out[1] = nalgebra::center(&first, &last);
        return;
    }

    let seg_lens: Vec<f64> = src
        .windows(2)
        .map(|w| nalgebra::distance(&w[0], &w[1]))
        .collect();
    let total: f64 = seg_lens.iter().sum();
    let spacing = total / (target_p + 1) as f64;

    let mut pos = first;
    let mut seg = 0usize;
    let mut remaining = seg_lens[0];
    for slot in out.iter_mut().take(target_p + 1).skip(1) {
        let mut needed = spacing;
        while needed > remaining && seg < src.len() - 2 {
            needed -= remaining;
            seg += 1;
            pos = src[seg];
            remaining = seg_lens[seg];
        }

        let seg_len = seg_lens[seg];
        if seg_len > segment_floor {
            let dir = (src[seg + 1] - src[seg]) / seg_len;
            pos += dir * needed;
            remaining -= needed;
        }
        *slot = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR: f64 = 1e-8;

    fn approx_pt(a: &Point2<f64>, x: f64, y: f64) -> bool {
        (a.x - x).abs() < 1e-12 && (a.y - y).abs() < 1e-12
    }

    #[test]
    fn single_subdivision_uses_endpoint_midpoint() {
        let set = PolylineSet::from_edges(&[Edge::new(0.0, 0.0, 4.0, 2.0)]);
        let out = resubdivide(&set, 1, FLOOR);
        assert_eq!(out.stride(), 3);
        assert!(approx_pt(&out.edge(0)[1], 2.0, 1.0));
    }

    #[test]
    fn straight_edge_is_evenly_spaced() {
        let set = PolylineSet::from_edges(&[Edge::new(0.0, 0.0, 10.0, 0.0)]);
        let out = resubdivide(&set, 4, FLOOR);
        let pts = out.edge(0);
        assert_eq!(pts.len(), 6);
        for (k, p) in pts.iter().enumerate() {
            assert!(approx_pt(p, 2.0 * k as f64, 0.0), "point {k} = {p:?}");
        }
    }

    #[test]
    fn bent_polyline_is_walked_by_arc_length() {
        // L-shape of total length 8: (0,0) -> (4,0) -> (4,4)
        let line = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
        ];
        let mut out = vec![Point2::origin(); 5];
        resample_polyline(&line, 3, FLOOR, &mut out);
        assert!(approx_pt(&out[1], 2.0, 0.0));
        assert!(approx_pt(&out[2], 4.0, 0.0));
        assert!(approx_pt(&out[3], 4.0, 2.0));
        assert_eq!(out[4], line[2]);
    }

    #[test]
    fn endpoints_are_copied_verbatim() {
        let edge = Edge::new(0.1, 0.7, 13.3, -2.9);
        let set = PolylineSet::from_edges(&[edge]);
        let mut cur = resubdivide(&set, 1, FLOOR);
        for p in [2, 4, 8, 16] {
            cur = resubdivide(&cur, p, FLOOR);
            assert_eq!(cur.edge(0)[0], edge.source);
            assert_eq!(cur.edge(0)[p + 1], edge.target);
            assert_eq!(cur.stride(), p + 2);
        }
    }

    #[test]
    fn zero_length_edge_stays_in_place() {
        let set = PolylineSet::from_edges(&[Edge::new(3.0, 3.0, 3.0, 3.0)]);
        let out = resubdivide(&resubdivide(&set, 1, FLOOR), 4, FLOOR);
        for p in out.edge(0) {
            assert!(approx_pt(p, 3.0, 3.0));
        }
    }

    #[test]
    fn ragged_polylines_are_rejected() {
        let lines = vec![
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.5, 0.0),
                Point2::new(1.0, 0.0),
            ],
        ];
        match PolylineSet::from_polylines(&lines) {
            Err(BundleError::ShapeMismatch {
                edge,
                expected,
                found,
            }) => {
                assert_eq!((edge, expected, found), (1, 2, 3));
            }
            other => panic!("expected shape mismatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_set_resubdivides_to_empty() {
        let out = resubdivide(&PolylineSet::from_edges(&[]), 3, FLOOR);
        assert!(out.is_empty());
        assert_eq!(out.stride(), 5);
    }
}
