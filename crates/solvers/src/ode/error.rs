use std::error::Error as StdError;

use super::MethodError;

/// Errors that stop the ODE solver before it can return a [`Solution`].
///
/// Integrator breakdowns are not errors; they end the run with
/// [`Status::Failed`] so the history computed so far is kept.
///
/// [`Solution`]: super::Solution
/// [`Status::Failed`]: super::Status::Failed
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("invalid method: {0}")]
    Method(#[from] MethodError),
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}
