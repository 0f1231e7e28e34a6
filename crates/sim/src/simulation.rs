use cartpole_plant::{
    ClosedLoop, ControllerGains, Input, Mode, Output, PhysicalParameters, Reference, State,
};
use cartpole_solvers::ode::{self, Action, Event, Grid, Method, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, InvalidParameters, Sample, Trajectory};

/// A complete description of one simulation run.
///
/// All fields are plain values, so a `Simulation` can be cloned, sent to
/// another thread, and run any number of times with identical results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub initial_state: State,
    pub reference: Reference,
    pub params: PhysicalParameters,
    pub gains: ControllerGains,

    /// Total simulated time (s).
    pub duration: f64,

    /// Requested spacing of recorded samples (s).
    pub time_step: f64,

    /// Integrator used between samples.
    pub method: Method,
}

impl Simulation {
    /// Runs the simulation.
    ///
    /// Samples are recorded at `duration·k/n` for `k = 0..=n`, where `n` is
    /// the number of whole time steps in the duration. The first sample is
    /// the initial state and the last is taken exactly at `duration`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] if any input is out of range,
    /// before integrating anything. Returns [`Error::IntegrationFailure`] with
    /// the samples recorded so far if the integrator cannot reach a sample
    /// time.
    pub fn run(&self) -> Result<Trajectory, Error> {
        let grid = self.validate()?;
        let closed_loop = ClosedLoop::new(self.params, self.gains, self.reference)
            .map_err(InvalidParameters::from)?;

        debug!(
            duration = self.duration,
            time_step = grid.spacing(),
            samples = grid.intervals() + 1,
            method = self.method.name(),
            "starting simulation"
        );

        let mut mode: Option<Mode> = None;
        let observer = |event: &Event<Input, Output>| -> Option<Action> {
            let current = event.snapshot.output.command.mode;
            if let Some(previous) = mode.filter(|&previous| previous != current) {
                debug!(time = event.time, from = ?previous, to = ?current, "mode transition");
            }
            mode = Some(current);
            None
        };

        let initial = Input {
            time: 0.0,
            state: self.initial_state,
        };
        let solution = ode::solve::<_, _, 4>(&closed_loop, initial, &grid, self.method, observer)?;

        let samples = solution
            .history
            .iter()
            .map(|snapshot| Sample {
                time: snapshot.input.time,
                state: snapshot.input.state,
                command: snapshot.output.command,
            })
            .collect();
        let trajectory = Trajectory::from_samples(samples);

        if let Status::Failed { failure, time } = solution.status {
            warn!(
                reason = %failure,
                time,
                samples = trajectory.len(),
                "simulation stopped early"
            );
            return Err(Error::IntegrationFailure {
                reason: failure,
                time,
                partial: trajectory,
            });
        }

        debug!(
            samples = trajectory.len(),
            evaluations = solution.stats.evaluations,
            accepted_steps = solution.stats.accepted_steps,
            rejected_steps = solution.stats.rejected_steps,
            "simulation complete"
        );
        Ok(trajectory)
    }

    /// Checks the run inputs and builds the output grid.
    fn validate(&self) -> Result<Grid, InvalidParameters> {
        let grid = Grid::new(self.duration, self.time_step)?;
        if !self.initial_state.is_finite() {
            return Err(InvalidParameters::InitialState);
        }
        self.method.validate()?;
        Ok(grid)
    }
}

/// Simulates the cart-pole with the default integration method.
///
/// This is shorthand for building a [`Simulation`] with [`Method::default`]
/// and calling [`Simulation::run`].
///
/// # Errors
///
/// See [`Simulation::run`].
pub fn simulate(
    initial_state: State,
    reference: Reference,
    params: PhysicalParameters,
    gains: ControllerGains,
    duration: f64,
    time_step: f64,
) -> Result<Trajectory, Error> {
    Simulation {
        initial_state,
        reference,
        params,
        gains,
        duration,
        time_step,
        method: Method::default(),
    }
    .run()
}
