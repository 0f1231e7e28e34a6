use std::f64::consts::PI;

use crate::ParameterError;

/// Target equilibrium of the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Reference {
    /// Desired cart position (m).
    pub x: f64,

    /// Desired pendulum angle (rad).
    pub theta: f64,
}

impl Default for Reference {
    fn default() -> Self {
        Self::upright()
    }
}

impl Reference {
    /// The pendulum at `theta = π` over the cart at the origin.
    #[must_use]
    pub const fn upright() -> Self {
        Self { x: 0.0, theta: PI }
    }

    /// Checks that both targets are finite.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first non-finite target.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.x.is_finite() {
            return Err(ParameterError::NonFinite {
                name: "x_ref",
                value: self.x,
            });
        }
        if !self.theta.is_finite() {
            return Err(ParameterError::NonFinite {
                name: "theta_ref",
                value: self.theta,
            });
        }
        Ok(())
    }
}
