use thiserror::Error;

/// Default relative and absolute tolerance for the adaptive methods.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Integration method used between grid points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)
)]
pub enum Method {
    /// Classic fixed-step 4th-order Runge–Kutta method.
    ///
    /// Takes one step per grid interval. Does not adapt step size based on
    /// local error, so accuracy depends entirely on the grid spacing.
    Rk4,

    /// Adaptive Dormand–Prince 5(4) Runge–Kutta method.
    ///
    /// An explicit embedded method that computes both 5th and 4th order
    /// solutions to estimate local truncation error and keeps it within
    /// `abs_tol` and `rel_tol`.
    Dopri5 { rel_tol: f64, abs_tol: f64 },

    /// Adaptive Dormand–Prince 8(5,3) Runge–Kutta method.
    ///
    /// A higher-order embedded method with 8th, 5th, and 3rd order solutions
    /// for precise error control. More work per step than `Dopri5`, but
    /// usually fewer steps at tight tolerances.
    Dop853 { rel_tol: f64, abs_tol: f64 },
}

/// Errors that can occur when validating a [`Method`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MethodError {
    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("rel_tol and abs_tol cannot both be zero")]
    ZeroTolerance,
}

impl Default for Method {
    fn default() -> Self {
        Self::Dop853 {
            rel_tol: DEFAULT_TOLERANCE,
            abs_tol: DEFAULT_TOLERANCE,
        }
    }
}

impl Method {
    /// Checks that the method's tolerances are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite, or if both
    /// tolerances are zero.
    pub fn validate(&self) -> Result<(), MethodError> {
        match *self {
            Self::Rk4 => Ok(()),
            Self::Dopri5 { rel_tol, abs_tol } | Self::Dop853 { rel_tol, abs_tol } => {
                if !rel_tol.is_finite() || rel_tol < 0.0 {
                    return Err(MethodError::RelTol);
                }
                if !abs_tol.is_finite() || abs_tol < 0.0 {
                    return Err(MethodError::AbsTol);
                }
                if rel_tol == 0.0 && abs_tol == 0.0 {
                    return Err(MethodError::ZeroTolerance);
                }
                Ok(())
            }
        }
    }

    /// Returns a short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rk4 => "rk4",
            Self::Dopri5 { .. } => "dopri5",
            Self::Dop853 { .. } => "dop853",
        }
    }
}
