//! Bundling orchestrator.
//!
//! Overview
//! - Validates parameters, edges and weights before any work starts.
//! - Turns every edge into a polyline with `initial_subdivisions` interior
//!   points and computes the compatibility matrix once.
//! - Runs `cycles` cycles of force iterations. Between cycles the step size
//!   halves, the subdivision count grows by `subdivision_rate`, the
//!   iteration count shrinks by `iteration_rate`, and every polyline is
//!   resampled by arc length.
//! - Flattens the final polylines into output rows.
//!
//! Modules
//! - `pipeline` – the [`EdgeBundler`] itself.
//! - [`schedule`] – the per-cycle `(P, S, I)` sequence.
//! - `weights` – weight validation and normalization.
//!
//! Iterations are sequential; inside one iteration edges are displaced in
//! parallel from a shared snapshot (see [`crate::forces`]).

mod pipeline;
pub mod schedule;
mod weights;

pub use pipeline::{bundle_edges, EdgeBundler};
pub use schedule::{CycleSettings, Schedule};
pub use weights::normalize_weights;
