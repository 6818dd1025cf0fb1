//! The four pairwise similarity measures of FDEB.
//!
//! Each measure lies in `[0, 1]`. Angle, scale and position are cheap and
//! symmetric; visibility needs two projections per direction and is only
//! evaluated for pairs that already pass the cheap tests.
use crate::geometry::project_point_on_segment;
use crate::params::Tolerances;
use crate::types::Edge;
use nalgebra::{Point2, Vector2};

/// Per-edge quantities reused by every pair the edge takes part in.
#[derive(Clone, Copy, Debug)]
pub struct EdgeGeometry {
    pub source: Point2<f64>,
    pub target: Point2<f64>,
    pub vector: Vector2<f64>,
    /// Unfloored length; used only in the angle numerator/denominator.
    pub raw_length: f64,
    /// Length floored to `eps`.
    pub length: f64,
    pub midpoint: Point2<f64>,
}

impl EdgeGeometry {
    pub fn new(edge: &Edge, eps: f64) -> Self {
        let vector = edge.vector();
        Self {
            source: edge.source,
            target: edge.target,
            vector,
            raw_length: vector.norm(),
            length: edge.length(eps),
            midpoint: edge.midpoint(),
        }
    }
}

/// `|cos|` of the angle between the two edges.
#[inline]
pub fn angle_compatibility(p: &EdgeGeometry, q: &EdgeGeometry, floor: f64) -> f64 {
    let denom = (p.raw_length * q.raw_length).max(floor);
    (p.vector.dot(&q.vector) / denom).abs()
}

/// `2 / (avg/min + max/avg)`: 1 for equal lengths, towards 0 as they diverge.
#[inline]
pub fn scale_compatibility(p: &EdgeGeometry, q: &EdgeGeometry) -> f64 {
    let avg = 0.5 * (p.length + q.length);
    let min = p.length.min(q.length);
    let max = p.length.max(q.length);
    2.0 / (avg / min + max / avg)
}

/// `avg / (avg + |mid_p - mid_q|)`.
#[inline]
pub fn position_compatibility(p: &EdgeGeometry, q: &EdgeGeometry) -> f64 {
    let avg = 0.5 * (p.length + q.length);
    let mid_dist = nalgebra::distance(&p.midpoint, &q.midpoint);
    avg / (avg + mid_dist)
}

/// Visibility of `q` as seen from `p`.
///
/// `q`'s endpoints are projected on the line through `p`; the closer the
/// projected interval's centre is to `p`'s midpoint (relative to the
/// interval's length), the higher the score. An interval shorter than `eps`
/// scores 0.
pub fn directed_visibility(p: &EdgeGeometry, q: &EdgeGeometry, tol: &Tolerances) -> f64 {
    let i0 = project_point_on_segment(&q.source, &p.source, &p.target, tol.degenerate_line_sq);
    let i1 = project_point_on_segment(&q.target, &p.source, &p.target, tol.degenerate_line_sq);
    let interval = nalgebra::distance(&i0, &i1);
    if interval < tol.eps {
        return 0.0;
    }
    let mid_i = nalgebra::center(&i0, &i1);
    let mid_dist = nalgebra::distance(&p.midpoint, &mid_i);
    (1.0 - 2.0 * mid_dist / interval).max(0.0)
}

/// Symmetric visibility: the weaker of the two directed scores.
#[inline]
pub fn visibility_compatibility(p: &EdgeGeometry, q: &EdgeGeometry, tol: &Tolerances) -> f64 {
    directed_visibility(p, q, tol).min(directed_visibility(q, p, tol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom(x1: f64, y1: f64, x2: f64, y2: f64) -> EdgeGeometry {
        EdgeGeometry::new(&Edge::new(x1, y1, x2, y2), 1e-8)
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn angle_ignores_direction() {
        let a = geom(0.0, 0.0, 10.0, 0.0);
        let b = geom(10.0, 1.0, 0.0, 1.0);
        let c = geom(5.0, 0.0, 5.0, 10.0);
        assert!(approx_eq(angle_compatibility(&a, &b, 1e-8), 1.0));
        assert!(approx_eq(angle_compatibility(&a, &c, 1e-8), 0.0));
    }

    #[test]
    fn scale_of_equal_lengths_is_one() {
        let a = geom(0.0, 0.0, 10.0, 0.0);
        let b = geom(0.0, 3.0, 0.0, 13.0);
        assert!(approx_eq(scale_compatibility(&a, &b), 1.0));
        let short = geom(0.0, 0.0, 1.0, 0.0);
        // avg=5.5, min=1, max=10 -> 2 / (5.5 + 10/5.5)
        let expected = 2.0 / (5.5 + 10.0 / 5.5);
        assert!(approx_eq(scale_compatibility(&a, &short), expected));
    }

    #[test]
    fn position_decays_with_midpoint_distance() {
        let a = geom(0.0, 0.0, 10.0, 0.0);
        let b = geom(0.0, 0.5, 10.0, 0.5);
        assert!(approx_eq(position_compatibility(&a, &b), 10.0 / 10.5));
    }

    #[test]
    fn visibility_of_aligned_parallel_edges_is_one() {
        let a = geom(0.0, 0.0, 10.0, 0.0);
        let b = geom(0.0, 1.0, 10.0, 1.0);
        assert!(approx_eq(visibility_compatibility(&a, &b, &Tolerances::default()), 1.0));
    }

    #[test]
    fn visibility_takes_the_weaker_direction() {
        let long = geom(0.0, 0.0, 10.0, 0.0);
        // Short edge over the right half: seen from `long` the projected
        // interval [5, 10] is centred at 7.5, i.e. 2.5 from the midpoint.
        let short = geom(5.0, 1.0, 10.0, 1.0);
        let tol = Tolerances::default();
        let from_long = directed_visibility(&long, &short, &tol);
        let from_short = directed_visibility(&short, &long, &tol);
        assert!(approx_eq(from_long, 0.0));
        assert!(from_short > 0.0);
        assert!(approx_eq(visibility_compatibility(&long, &short, &tol), 0.0));
    }

    #[test]
    fn perpendicular_projection_collapses_interval() {
        let a = geom(0.0, 5.0, 10.0, 5.0);
        let b = geom(5.0, 0.0, 5.0, 10.0);
        assert_eq!(directed_visibility(&a, &b, &Tolerances::default()), 0.0);
    }

    #[test]
    fn zero_length_edges_stay_finite() {
        let dot = geom(1.0, 1.0, 1.0, 1.0);
        let other = geom(1.0, 1.0, 1.0, 1.0);
        let tol = Tolerances::default();
        assert!(angle_compatibility(&dot, &other, tol.angle_floor).is_finite());
        assert!(scale_compatibility(&dot, &other).is_finite());
        assert!(position_compatibility(&dot, &other).is_finite());
        assert_eq!(visibility_compatibility(&dot, &other, &tol), 0.0);
    }
}
