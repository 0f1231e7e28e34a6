use ode_solvers::dop_shared::IntegrationError;

/// Reasons the integrator could not reach the next grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    #[error("maximum number of integration steps reached")]
    MaxStepsReached,

    #[error("step size underflow")]
    StepSizeUnderflow,

    #[error("problem became stiff")]
    StiffnessDetected,

    #[error("state became non-finite")]
    NonFinite,

    #[error("integrator produced no output at the grid point")]
    MissedOutput,
}

impl From<&IntegrationError> for Failure {
    fn from(err: &IntegrationError) -> Self {
        match err {
            IntegrationError::MaxNumStepReached { .. } => Self::MaxStepsReached,
            IntegrationError::StepSizeUnderflow { .. } => Self::StepSizeUnderflow,
            IntegrationError::StiffnessDetected { .. } => Self::StiffnessDetected,
        }
    }
}
