#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod bundler;
pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod params;
pub mod types;

// Stage modules – public so tools can run a single stage, but their
// signatures may still move.
pub mod compatibility;
pub mod forces;
pub mod geometry;
pub mod output;
pub mod subdivision;

// Demo support.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

// Main entry points: bundler + results.
pub use crate::bundler::{bundle_edges, normalize_weights, EdgeBundler};
pub use crate::error::BundleError;
pub use crate::params::{BundleParams, Tolerances};
pub use crate::types::{BundledEdges, BundledPoint, Edge};

// Run report returned alongside the rows.
pub use crate::diagnostics::{BundleOutput, BundlingReport};

pub use crate::graph::edges_from_graph;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use edge_bundler::prelude::*;
///
/// let edges: Vec<Edge> = (0..4)
///     .map(|i| Edge::new(0.0, i as f64, 20.0, i as f64))
///     .collect();
/// let params = BundleParams::default().with_schedule(3, 20);
/// let bundled = EdgeBundler::new(params).bundle(&edges).unwrap();
/// for group in bundled.groups() {
///     assert_eq!(group.len(), bundled.segments());
/// }
/// ```
pub mod prelude {
    pub use crate::{BundleParams, BundledEdges, Edge, EdgeBundler};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage runners.
    pub use crate::compatibility::{compute_compatibility, compute_compatibility_with_stats};
    pub use crate::forces::{ForceParams, ForceSimulator};
    pub use crate::output::{assemble, assemble_polylines};
    pub use crate::subdivision::{resubdivide, PolylineSet};

    // Structured diagnostics types.
    pub use crate::compatibility::{CompatibilityMatrix, CompatibilityStats};
    pub use crate::diagnostics::{CycleReport, StageTiming, TimingBreakdown};
}
