//! Per-cycle `(P, S, I)` schedule.
use crate::params::BundleParams;

/// Settings of one cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleSettings {
    pub cycle: usize,
    /// Interior points per edge (`P`).
    pub subdivisions: usize,
    pub step_size: f64,
    pub iterations: usize,
}

/// Iterator over the cycles of a run.
///
/// After each cycle but the last the step size halves, the subdivision count
/// is multiplied by `subdivision_rate` and the iteration count by
/// `iteration_rate`, rounded down. The iteration count may reach zero, in
/// which case the remaining cycles only resubdivide.
#[derive(Clone, Debug)]
pub struct Schedule {
    next: Option<CycleSettings>,
    cycles: usize,
    subdivision_rate: usize,
    iteration_rate: f64,
}

impl Schedule {
    /// Expects parameters that passed [`BundleParams::validate`].
    pub fn new(params: &BundleParams) -> Self {
        let first = CycleSettings {
            cycle: 0,
            subdivisions: params.initial_subdivisions,
            step_size: params.initial_step_size,
            iterations: params.initial_iterations,
        };
        Self {
            next: (params.cycles > 0).then_some(first),
            cycles: params.cycles,
            subdivision_rate: params.subdivision_rate,
            iteration_rate: params.iteration_rate,
        }
    }
}

impl Iterator for Schedule {
    type Item = CycleSettings;

    fn next(&mut self) -> Option<CycleSettings> {
        let current = self.next?;
        self.next = (current.cycle + 1 < self.cycles).then(|| CycleSettings {
            cycle: current.cycle + 1,
            subdivisions: current.subdivisions.saturating_mul(self.subdivision_rate),
            step_size: current.step_size / 2.0,
            iterations: (current.iterations as f64 * self.iteration_rate).floor() as usize,
        });
        Some(current)
    }
}
