use cartpole_core::Snapshot;

use super::Failure;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    /// Reached the last grid point.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,

    /// The integrator could not reach the next grid point.
    ///
    /// `time` is the last grid point that was reached.
    Failed { failure: Failure, time: f64 },
}

/// Work counters accumulated over all grid intervals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of model evaluations made by the integrator.
    pub evaluations: u64,

    /// Number of accepted integration steps.
    pub accepted_steps: u64,

    /// Number of rejected integration steps.
    pub rejected_steps: u64,
}

/// The result of an ODE integration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the solver terminated.
    pub status: Status,

    /// Snapshots at each grid point reached (including the initial state).
    pub history: Vec<Snapshot<I, O>>,

    /// Number of grid intervals completed.
    pub steps: usize,

    /// Integrator work counters.
    pub stats: Stats,
}
