use cartpole_plant::ParameterError;
use cartpole_solvers::ode::{self, Failure, GridError, MAX_INTERVALS, MethodError};
use thiserror::Error;

use crate::Trajectory;

/// Errors returned by a simulation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] InvalidParameters),

    /// The integrator could not reach the next sample time.
    ///
    /// `partial` holds every sample recorded before the failure, and `time` is
    /// the last sample time that was reached.
    #[error("integration failed at t = {time}: {reason}")]
    IntegrationFailure {
        reason: Failure,
        time: f64,
        partial: Trajectory,
    },

    /// The solver could not evaluate the model it was given.
    ///
    /// [`ClosedLoop`](cartpole_plant::ClosedLoop) evaluation cannot fail, so
    /// [`Simulation::run`](crate::Simulation::run) never returns this. It
    /// keeps the conversion from the solver's error total.
    #[error("model error: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A simulation request that was rejected before any integration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidParameters {
    #[error("duration must be finite and positive, got {0}")]
    Duration(f64),

    #[error("time step must be finite and positive, got {0}")]
    TimeStep(f64),

    #[error("time step {time_step} exceeds duration {duration}")]
    TimeStepExceedsDuration { time_step: f64, duration: f64 },

    #[error("duration {duration} at time step {time_step} needs more than {max} samples", max = MAX_INTERVALS)]
    TooManySamples { duration: f64, time_step: f64 },

    #[error("initial state must be finite")]
    InitialState,

    #[error(transparent)]
    Plant(#[from] ParameterError),

    #[error("integration method: {0}")]
    Method(#[from] MethodError),
}

impl From<GridError> for InvalidParameters {
    fn from(err: GridError) -> Self {
        match err {
            GridError::End(duration) => Self::Duration(duration),
            GridError::Spacing(time_step) => Self::TimeStep(time_step),
            GridError::SpacingExceedsEnd { spacing, end } => Self::TimeStepExceedsDuration {
                time_step: spacing,
                duration: end,
            },
            GridError::TooManyIntervals { end, spacing } => Self::TooManySamples {
                duration: end,
                time_step: spacing,
            },
        }
    }
}

impl From<ode::Error> for Error {
    fn from(err: ode::Error) -> Self {
        match err {
            ode::Error::Method(err) => Self::InvalidParameters(err.into()),
            ode::Error::Model(err) => Self::Model(err),
        }
    }
}
