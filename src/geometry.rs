//! Geometry kernel: stateless helpers on points and edges.
//!
//! Every length that ends up in a denominator goes through [`distance`], which
//! floors the result to `eps`. Callers pass the floors explicitly so that the
//! values configured in [`crate::params::Tolerances`] are the only source of
//! truth.
use crate::types::Edge;
use nalgebra::{Point2, Vector2};

/// Default floor applied to distances and internal denominators.
pub const DEFAULT_EPS: f64 = 1e-8;
/// Default squared-length below which a projection line counts as degenerate.
pub const DEFAULT_DEGENERATE_LINE_SQ: f64 = 1e-10;

/// Euclidean distance floored to `eps`.
#[inline]
pub fn distance(p1: &Point2<f64>, p2: &Point2<f64>, eps: f64) -> f64 {
    let d = nalgebra::distance(p1, p2);
    if d < eps {
        eps
    } else {
        d
    }
}

/// Direction vector `target - source`.
#[inline]
pub fn edge_vector(edge: &Edge) -> Vector2<f64> {
    edge.target - edge.source
}

/// Edge length floored to `eps`.
#[inline]
pub fn edge_length(edge: &Edge, eps: f64) -> f64 {
    distance(&edge.source, &edge.target, eps)
}

#[inline]
pub fn midpoint(a: &Point2<f64>, b: &Point2<f64>) -> Point2<f64> {
    nalgebra::center(a, b)
}

/// Projects `point` onto the infinite line through `a` and `b`.
///
/// When `|b - a|^2 < line_sq_floor` the line is degenerate and `a` is returned.
#[inline]
pub fn project_point_on_segment(
    point: &Point2<f64>,
    a: &Point2<f64>,
    b: &Point2<f64>,
    line_sq_floor: f64,
) -> Point2<f64> {
    let dir = b - a;
    let len_sq = dir.norm_squared();
    if len_sq < line_sq_floor {
        return *a;
    }
    let r = (point - a).dot(&dir) / len_sq;
    a + dir * r
}

/// Total arc length of a polyline (unfloored).
pub fn polyline_length(points: &[Point2<f64>]) -> f64 {
    points
        .windows(2)
        .map(|w| nalgebra::distance(&w[0], &w[1]))
        .sum()
}
