//! The [`EdgeBundler`] driving a full FDEB run.
//!
//! Typical usage:
//! ```
//! use edge_bundler::{BundleParams, Edge, EdgeBundler};
//!
//! let edges = [
//!     Edge::new(0.0, 0.0, 10.0, 0.0),
//!     Edge::new(0.0, 1.0, 10.0, 1.0),
//! ];
//! let bundler = EdgeBundler::new(BundleParams::default());
//! let bundled = bundler.bundle(&edges).unwrap();
//! assert_eq!(bundled.n_edges(), 2);
//! assert_eq!(bundled.segments(), 34);
//! ```
use super::schedule::Schedule;
use super::weights::prepare_weights;
use crate::compatibility::compute_compatibility_with_stats;
use crate::diagnostics::{BundleOutput, BundlingReport, CycleReport, TimingBreakdown};
use crate::error::BundleError;
use crate::forces::{ForceParams, ForceSimulator};
use crate::output::assemble;
use crate::params::BundleParams;
use crate::subdivision::{resubdivide, PolylineSet};
use crate::types::{BundledEdges, Edge};
use log::debug;
use std::time::Instant;

/// Bundles straight edges with a fixed parameter set.
///
/// The bundler keeps no state between calls; every call recomputes the
/// compatibility matrix for its own edges.
#[derive(Clone, Debug, Default)]
pub struct EdgeBundler {
    params: BundleParams,
}

impl EdgeBundler {
    pub fn new(params: BundleParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BundleParams {
        &self.params
    }

    /// Bundles `edges` with uniform weights.
    pub fn bundle(&self, edges: &[Edge]) -> Result<BundledEdges, BundleError> {
        self.bundle_weighted(edges, None)
    }

    /// Bundles `edges`; `weights` (one per edge) scale how strongly each edge
    /// attracts its neighbours.
    pub fn bundle_weighted(
        &self,
        edges: &[Edge],
        weights: Option<&[f64]>,
    ) -> Result<BundledEdges, BundleError> {
        Ok(self.bundle_with_report(edges, weights)?.bundled)
    }

    /// Runs the bundler and returns the rows together with a report.
    pub fn bundle_with_report(
        &self,
        edges: &[Edge],
        weights: Option<&[f64]>,
    ) -> Result<BundleOutput, BundleError> {
        let (polylines, mut report) = self.run(edges, weights)?;
        let assemble_start = Instant::now();
        let bundled = assemble(&polylines);
        report.timing.push("assemble", ms_since(assemble_start));
        Ok(BundleOutput { bundled, report })
    }

    /// Runs the simulation and returns the final polylines, one per edge.
    pub fn bundle_polylines(
        &self,
        edges: &[Edge],
        weights: Option<&[f64]>,
    ) -> Result<PolylineSet, BundleError> {
        Ok(self.run(edges, weights)?.0)
    }

    fn run(
        &self,
        edges: &[Edge],
        weights: Option<&[f64]>,
    ) -> Result<(PolylineSet, BundlingReport), BundleError> {
        let params = &self.params;
        params.validate()?;
        if let Some(edge) = edges.iter().position(|e| !e.is_finite()) {
            return Err(BundleError::NonFiniteInput { edge });
        }
        let weights = prepare_weights(weights, edges.len())?;

        let total_start = Instant::now();
        let tol = &params.tolerances;
        let mut report = BundlingReport {
            n_edges: edges.len(),
            weighted: weights.is_some(),
            ..Default::default()
        };
        debug!("Bundling {} edges", edges.len());

        let mut front = resubdivide(
            &PolylineSet::from_edges(edges),
            params.initial_subdivisions,
            tol.degenerate_segment,
        );
        if edges.is_empty() {
            report.timing = TimingBreakdown::with_total(ms_since(total_start));
            return Ok((front, report));
        }

        let compat_start = Instant::now();
        let (compat, stats) =
            compute_compatibility_with_stats(edges, params.compatibility_threshold, tol);
        let mut timing = TimingBreakdown::default();
        timing.push("compatibility", ms_since(compat_start));
        report.compatibility = stats;

        let simulator = ForceSimulator::new(
            &compat,
            ForceParams {
                spring_constant: params.spring_constant,
                electrostatic_constant: params.electrostatic_constant,
                eps: tol.eps,
            },
        )
        .with_weights(weights.as_deref());
        let mut back = PolylineSet::zeroed(front.n_edges(), front.stride());

        for settings in Schedule::new(params) {
            let cycle_start = Instant::now();
            // Resubdivide between cycles, also when `P` is unchanged.
            if settings.cycle > 0 {
                front = resubdivide(&front, settings.subdivisions, tol.degenerate_segment);
            }
            debug!(
                "Cycle {}: I={} P={} S={}",
                settings.cycle, settings.iterations, settings.subdivisions, settings.step_size
            );
            for _ in 0..settings.iterations {
                simulator.step_into(&front, &mut back, settings.step_size);
                std::mem::swap(&mut front, &mut back);
            }
            let elapsed_ms = ms_since(cycle_start);
            timing.push(format!("cycle {}", settings.cycle), elapsed_ms);
            report.cycles.push(CycleReport {
                cycle: settings.cycle,
                subdivisions: settings.subdivisions,
                step_size: settings.step_size,
                iterations: settings.iterations,
                elapsed_ms,
            });
        }

        timing.total_ms = ms_since(total_start);
        report.timing = timing;
        debug!(
            "Bundling done: {} iterations in {:.2} ms",
            report.total_iterations(),
            report.timing.total_ms
        );
        Ok((front, report))
    }
}

/// Bundles `edges` with `params` in one call.
pub fn bundle_edges(edges: &[Edge], params: &BundleParams) -> Result<BundledEdges, BundleError> {
    EdgeBundler::new(params.clone()).bundle(edges)
}

fn ms_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
