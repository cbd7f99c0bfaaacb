//! Optimization outcome types.

use serde::{Deserialize, Serialize};

/// Why the optimization loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// The iteration ceiling was reached.
    MaxIterations,
    /// The configured number of consecutive non-improving iterations was
    /// reached before the ceiling.
    EarlyStopped,
}

/// Outcome of a [`Swarm::optimize`](crate::swarm::Swarm::optimize) run.
///
/// `solution` and `objective_value` are copies of the swarm's global best at
/// termination; `history` records the global best value after each
/// iteration, starting with the value at initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Best position found.
    pub solution: Vec<f64>,
    /// Objective value at `solution`.
    pub objective_value: f64,
    /// Total objective evaluations, including initialization.
    pub evaluations: usize,
    /// Iterations executed by this `optimize` call.
    pub iterations: usize,
    /// Global best value per iteration.
    pub history: Vec<f64>,
    /// Why the loop stopped.
    pub termination: TerminationReason,
}

impl OptimizationResult {
    pub(crate) fn new(
        solution: Vec<f64>,
        objective_value: f64,
        evaluations: usize,
        iterations: usize,
        history: Vec<f64>,
        termination: TerminationReason,
    ) -> Self {
        Self {
            solution,
            objective_value,
            evaluations,
            iterations,
            history,
            termination,
        }
    }
}
