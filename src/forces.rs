//! One iteration of the FDEB force simulation.
//!
//! Two forces act on each interior point `i` of edge `e`:
//!
//! - spring: `kP * ((p[i-1] - p[i]) + (p[i+1] - p[i]))` with
//!   `kP = K / (|source - target| * (P + 1))`, which keeps the curve smooth;
//! - electrostatic: for every edge `o` compatible with `e`, the unit vector
//!   from `p_e[i]` towards `p_o[i]`, optionally scaled by `o`'s weight.
//!
//! The displacement is `S * (spring + E * electrostatic)`. Endpoints never
//! move.
//!
//! Every displacement of an iteration is computed from the same snapshot:
//! the simulator reads `current` and writes into a separate `next` buffer,
//! so the order in which edges are visited (or the rayon schedule) cannot
//! change the result.
use crate::compatibility::CompatibilityMatrix;
use crate::geometry::distance;
use crate::subdivision::PolylineSet;
use nalgebra::{Point2, Vector2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Constants of the force law.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceParams {
    /// `K`
    pub spring_constant: f64,
    /// `E`
    pub electrostatic_constant: f64,
    /// Floor for edge lengths and point-to-point distances.
    pub eps: f64,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            spring_constant: 1.0,
            electrostatic_constant: 1.0,
            eps: crate::geometry::DEFAULT_EPS,
        }
    }
}

/// Applies simulation steps against a fixed compatibility matrix.
pub struct ForceSimulator<'a> {
    compat: &'a CompatibilityMatrix,
    weights: Option<&'a [f64]>,
    params: ForceParams,
}

impl<'a> ForceSimulator<'a> {
    pub fn new(compat: &'a CompatibilityMatrix, params: ForceParams) -> Self {
        Self {
            compat,
            weights: None,
            params,
        }
    }

    /// Per-edge attraction weights, indexed like the edges. Expected to be
    /// normalized already (see [`crate::bundler::normalize_weights`]).
    pub fn with_weights(mut self, weights: Option<&'a [f64]>) -> Self {
        self.weights = weights;
        self
    }

    /// Computes one iteration from `current` into `next`.
    ///
    /// `next` is reshaped to match `current` if needed. The subdivision count
    /// `P` used by the spring constant is `current.stride() - 2`.
    pub fn step_into(&self, current: &PolylineSet, next: &mut PolylineSet, step_size: f64) {
        debug_assert_eq!(current.n_edges(), self.compat.len());
        next.reshape_like(current);
        if current.is_empty() {
            return;
        }
        let stride = current.stride();

        #[cfg(feature = "parallel")]
        {
            next.points_mut()
                .par_chunks_mut(stride)
                .enumerate()
                .for_each(|(e, out)| self.displace_edge(current, e, step_size, out));
        }
        #[cfg(not(feature = "parallel"))]
        {
            next.points_mut()
                .chunks_mut(stride)
                .enumerate()
                .for_each(|(e, out)| self.displace_edge(current, e, step_size, out));
        }
    }

    /// Allocating variant of [`step_into`](Self::step_into).
    pub fn step(&self, current: &PolylineSet, step_size: f64) -> PolylineSet {
        let mut next = PolylineSet::zeroed(current.n_edges(), current.stride());
        self.step_into(current, &mut next, step_size);
        next
    }

    fn displace_edge(
        &self,
        current: &PolylineSet,
        edge: usize,
        step_size: f64,
        out: &mut [Point2<f64>],
    ) {
        let points = current.edge(edge);
        out.copy_from_slice(points);
        let n = points.len();
        if n <= 2 {
            return;
        }

        let kp = spring_coefficient(
            points,
            self.params.spring_constant,
            current.subdivisions(),
            self.params.eps,
        );
        let neighbors = self.compat.neighbors(edge);
        for i in 1..n - 1 {
            let spring = spring_force(points, i, kp);
            let electro = if neighbors.is_empty() {
                Vector2::zeros()
            } else {
                electrostatic_force(current, edge, i, neighbors, self.weights, self.params.eps)
            };
            out[i] = points[i] + (spring + electro * self.params.electrostatic_constant) * step_size;
        }
    }
}

/// Runs a single iteration without building a simulator first.
pub fn step(
    polylines: &PolylineSet,
    compat: &CompatibilityMatrix,
    params: ForceParams,
    step_size: f64,
) -> PolylineSet {
    ForceSimulator::new(compat, params).step(polylines, step_size)
}

/// `K / (|first - last| * (P + 1))` with the length floored to `eps`.
#[inline]
pub fn spring_coefficient(points: &[Point2<f64>], spring_constant: f64, p: usize, eps: f64) -> f64 {
    let len = distance(&points[0], &points[points.len() - 1], eps);
    spring_constant / (len * (p + 1) as f64)
}

/// Spring force at interior point `i`.
#[inline]
pub fn spring_force(points: &[Point2<f64>], i: usize, kp: f64) -> Vector2<f64> {
    let curr = points[i];
    ((points[i - 1] - curr) + (points[i + 1] - curr)) * kp
}

/// Spring forces of every point; zero at both endpoints.
pub fn spring_forces(points: &[Point2<f64>], kp: f64) -> Vec<Vector2<f64>> {
    let mut forces = vec![Vector2::zeros(); points.len()];
    if points.len() > 2 {
        for (i, f) in forces.iter_mut().enumerate().take(points.len() - 1).skip(1) {
            *f = spring_force(points, i, kp);
        }
    }
    forces
}

/// Sum of (weighted) unit vectors from point `i` of `edge` towards point `i`
/// of each neighbour. Neighbours are visited in the given order, which keeps
/// the floating-point sum reproducible.
pub fn electrostatic_force(
    polylines: &PolylineSet,
    edge: usize,
    i: usize,
    neighbors: &[usize],
    weights: Option<&[f64]>,
    eps: f64,
) -> Vector2<f64> {
    let curr = polylines.edge(edge)[i];
    let mut force = Vector2::zeros();
    for &o in neighbors {
        let other = polylines.edge(o)[i];
        let diff = other - curr;
        let dist = distance(&other, &curr, eps);
        let w = weights.map_or(1.0, |w| w[o]);
        force += diff * (w / dist);
    }
    force
}
