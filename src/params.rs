//! Parameter types configuring a bundling run.
//!
//! The defaults reproduce the classic FDEB schedule: six cycles, starting
//! with one subdivision point and 50 iterations, doubling the subdivisions
//! and halving the step size after each cycle while the iteration count
//! shrinks by a third. For tuning, start with `compatibility_threshold`
//! (which edges interact at all) and `spring_constant` (how stiff edges are).

use crate::error::BundleError;
use crate::geometry::{DEFAULT_DEGENERATE_LINE_SQ, DEFAULT_EPS};
use serde::{Deserialize, Serialize};

/// Numeric floors used to keep the simulation finite on degenerate input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Floor for distances and edge lengths (`eps`).
    pub eps: f64,
    /// Floor for the length product in the angle compatibility.
    pub angle_floor: f64,
    /// Squared length below which a projection line is degenerate.
    pub degenerate_line_sq: f64,
    /// Segment length below which resubdivision does not advance.
    pub degenerate_segment: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            angle_floor: DEFAULT_EPS,
            degenerate_line_sq: DEFAULT_DEGENERATE_LINE_SQ,
            degenerate_segment: DEFAULT_EPS,
        }
    }
}

/// Simulation parameters for one bundling call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleParams {
    /// Spring constant `K`; larger values keep edges straighter.
    pub spring_constant: f64,
    /// Electrostatic constant `E`; scales the attraction between edges.
    pub electrostatic_constant: f64,
    /// Number of cycles `C` (>=1).
    pub cycles: usize,
    /// Subdivision points per edge in the first cycle `P` (>=1).
    pub initial_subdivisions: usize,
    /// Step size `S` of the first cycle; halved after every cycle.
    pub initial_step_size: f64,
    /// Factor applied to the subdivision count between cycles (`P_rate`).
    pub subdivision_rate: usize,
    /// Iterations in the first cycle `I` (>=1).
    pub initial_iterations: usize,
    /// Factor applied (then floored) to the iteration count between cycles.
    pub iteration_rate: f64,
    /// Pairs scoring below this value do not interact (0..=1).
    pub compatibility_threshold: f64,
    pub tolerances: Tolerances,
}

impl Default for BundleParams {
    fn default() -> Self {
        Self {
            spring_constant: 1.0,
            electrostatic_constant: 1.0,
            cycles: 6,
            initial_subdivisions: 1,
            initial_step_size: 0.04,
            subdivision_rate: 2,
            initial_iterations: 50,
            iteration_rate: 2.0 / 3.0,
            compatibility_threshold: 0.6,
            tolerances: Tolerances::default(),
        }
    }
}

impl BundleParams {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.compatibility_threshold = threshold;
        self
    }

    pub fn with_schedule(mut self, cycles: usize, initial_iterations: usize) -> Self {
        self.cycles = cycles;
        self.initial_iterations = initial_iterations;
        self
    }

    /// Subdivision count of the last cycle, `None` on overflow.
    pub fn final_subdivisions(&self) -> Option<usize> {
        let exp = u32::try_from(self.cycles.saturating_sub(1)).ok()?;
        self.subdivision_rate
            .checked_pow(exp)?
            .checked_mul(self.initial_subdivisions)
    }

    /// Rejects parameter sets that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<(), BundleError> {
        if self.cycles == 0 {
            return Err(BundleError::invalid("cycles", "must be at least 1"));
        }
        if self.initial_iterations == 0 {
            return Err(BundleError::invalid(
                "initial_iterations",
                "must be at least 1",
            ));
        }
        if self.initial_subdivisions == 0 {
            return Err(BundleError::invalid(
                "initial_subdivisions",
                "must be at least 1",
            ));
        }
        if self.subdivision_rate == 0 {
            return Err(BundleError::invalid("subdivision_rate", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.compatibility_threshold) {
            return Err(BundleError::invalid(
                "compatibility_threshold",
                format!("{} is outside [0, 1]", self.compatibility_threshold),
            ));
        }
        if !self.initial_step_size.is_finite() || self.initial_step_size <= 0.0 {
            return Err(BundleError::invalid(
                "initial_step_size",
                format!("{} is not a positive finite number", self.initial_step_size),
            ));
        }
        if !self.spring_constant.is_finite() {
            return Err(BundleError::invalid("spring_constant", "must be finite"));
        }
        if !self.electrostatic_constant.is_finite() {
            return Err(BundleError::invalid(
                "electrostatic_constant",
                "must be finite",
            ));
        }
        if !self.iteration_rate.is_finite() || self.iteration_rate < 0.0 {
            return Err(BundleError::invalid(
                "iteration_rate",
                format!("{} is not a non-negative finite number", self.iteration_rate),
            ));
        }
        if self.final_subdivisions().is_none() {
            return Err(BundleError::invalid(
                "subdivision_rate",
                format!(
                    "{} cycles at rate {} overflow the subdivision count",
                    self.cycles, self.subdivision_rate
                ),
            ));
        }
        let t = &self.tolerances;
        for (name, value) in [
            ("tolerances.eps", t.eps),
            ("tolerances.angle_floor", t.angle_floor),
            ("tolerances.degenerate_line_sq", t.degenerate_line_sq),
            ("tolerances.degenerate_segment", t.degenerate_segment),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BundleError::invalid(
                    name,
                    format!("{value} is not a positive finite number"),
                ));
            }
        }
        Ok(())
    }
}
