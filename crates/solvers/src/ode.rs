//! Adaptive ODE integration onto a uniform output grid.
//!
//! This module integrates any [`OdeModel`] from `x = 0` to the end of a
//! [`Grid`], recording a [`Snapshot`] of the model at every grid point:
//!
//! ```text
//! y(t_k) -> integrate over [t_k, t_{k+1}] -> y(t_{k+1}) -> model(y(t_{k+1}))
//! ```
//!
//! Between grid points the state is advanced by the selected [`Method`]. The
//! adaptive methods wrap the Dormand–Prince integrators from `ode_solvers`
//! and are restarted on every interval, reading the state at the grid point
//! from their dense output.
//!
//! # Example
//!
//! ```ignore
//! use cartpole_solvers::ode::{self, Grid, Method};
//!
//! let grid = Grid::new(10.0, 0.01)?;
//! let solution = ode::solve_unobserved(&model, initial, &grid, Method::default())?;
//!
//! for snapshot in &solution.history {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod failure;
mod grid;
mod method;
mod solution;
mod stepper;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use failure::Failure;
pub use grid::{Grid, GridError, MAX_INTERVALS};
pub use method::{DEFAULT_TOLERANCE, Method, MethodError};
pub use solution::{Solution, Stats, Status};

use cartpole_core::{Observer, OdeModel, Snapshot};

use stepper::advance;

/// Integrates an ODE model across a uniform grid.
///
/// # Algorithm
///
/// 1. Place the initial input at `x = 0` and call the model to get the
///    initial snapshot.
/// 2. For each grid interval `[t_{k-1}, t_k]`:
///    - Extract the state from the current input.
///    - Advance it to `t_k` with the selected [`Method`].
///    - Build the next input from the advanced state.
///    - Call the model to get the next output.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
///
/// If the integrator cannot reach a grid point, the solution is returned with
/// [`Status::Failed`] and the history up to the last grid point reached.
///
/// # Observer
///
/// The observer receives an [`Event`] for every grid point, starting with the
/// initial state, and may return [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns an error if the method's tolerances are invalid or if the model
/// fails when evaluated at a grid point.
pub fn solve<M, Obs, const N: usize>(
    model: &M,
    initial: M::Input,
    grid: &Grid,
    method: Method,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: OdeModel<N>,
    M::Input: Clone,
    M::Output: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    method.validate()?;

    // Evaluate initial state.
    let initial = M::apply_state(&initial, grid.time(0), M::extract_state(&initial));
    let initial_output = model.call(&initial).map_err(Error::model)?;
    let initial_snapshot = Snapshot::new(initial, initial_output);

    let mut history = Vec::with_capacity(grid.intervals() + 1);
    history.push(initial_snapshot.clone());
    let mut stats = Stats::default();

    // Emit initial event.
    let event = Event {
        step: 0,
        time: grid.time(0),
        snapshot: initial_snapshot.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
            stats,
        });
    }

    let mut current = initial_snapshot;

    for step in 1..=grid.intervals() {
        let start = grid.time(step - 1);
        let end = grid.time(step);

        let state = M::extract_state(&current.input);
        let advanced = match advance(model, &current.input, start, end, state, method) {
            Ok(advanced) => advanced,
            Err(failure) => {
                return Ok(Solution {
                    status: Status::Failed {
                        failure,
                        time: start,
                    },
                    history,
                    steps: step - 1,
                    stats,
                });
            }
        };

        stats.evaluations += advanced.stats.evaluations;
        stats.accepted_steps += advanced.stats.accepted_steps;
        stats.rejected_steps += advanced.stats.rejected_steps;

        // Evaluate model at the grid point.
        let next_input = M::apply_state(&current.input, end, advanced.y);
        let next_output = model.call(&next_input).map_err(Error::model)?;
        let next_snapshot = Snapshot::new(next_input, next_output);

        history.push(next_snapshot.clone());

        // Emit event to observer.
        let event = Event {
            step,
            time: end,
            snapshot: next_snapshot.clone(),
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
                stats,
            });
        }

        current = next_snapshot;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps: grid.intervals(),
        stats,
    })
}

/// Integrates an ODE model across a uniform grid without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the method's tolerances are invalid or if the model
/// fails when evaluated at a grid point.
pub fn solve_unobserved<M, const N: usize>(
    model: &M,
    initial: M::Input,
    grid: &Grid,
    method: Method,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: OdeModel<N>,
    M::Input: Clone,
    M::Output: Clone,
{
    solve::<M, (), N>(model, initial, grid, method, ())
}
