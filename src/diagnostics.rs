//! Run reports returned by [`EdgeBundler::bundle_with_report`](crate::EdgeBundler).
//!
//! Everything here is plain data with camelCase serde names so the demo can
//! dump it next to the bundled rows.
use crate::compatibility::CompatibilityStats;
use crate::types::BundledEdges;
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of a bundling run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Elapsed time of the first stage called `label`.
    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

/// Schedule of one executed cycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReport {
    pub cycle: usize,
    /// Interior points per edge during the cycle (`P`).
    pub subdivisions: usize,
    pub step_size: f64,
    pub iterations: usize,
    pub elapsed_ms: f64,
}

/// Everything measured during a run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlingReport {
    pub n_edges: usize,
    pub weighted: bool,
    pub compatibility: CompatibilityStats,
    pub cycles: Vec<CycleReport>,
    pub timing: TimingBreakdown,
}

impl BundlingReport {
    /// Total number of force iterations executed.
    pub fn total_iterations(&self) -> usize {
        self.cycles.iter().map(|c| c.iterations).sum()
    }
}

/// Result of [`EdgeBundler::bundle_with_report`](crate::EdgeBundler).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleOutput {
    pub bundled: BundledEdges,
    pub report: BundlingReport,
}
