use crate::ParameterError;

/// Gains and limits of the hybrid controller.
///
/// The default is the baseline tuning that swings the default cart-pole up
/// from near rest and holds it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ControllerGains {
    /// Energy-pumping gain used during swing-up.
    pub k_energy: f64,

    /// Angle error gain during stabilization.
    pub k_theta: f64,

    /// Angular velocity gain during stabilization.
    pub k_theta_dot: f64,

    /// Cart position gain during stabilization.
    pub k_x: f64,

    /// Cart velocity gain during stabilization.
    pub k_x_dot: f64,

    /// Damping applied everywhere.
    pub base_damping: f64,

    /// Damping added in proportion to proximity to the target.
    pub extra_damping: f64,

    /// Angle error (rad) below which the stabilizing law takes over.
    pub capture_threshold: f64,

    /// Actuator force limit (N).
    pub f_max: f64,
}

impl Default for ControllerGains {
    fn default() -> Self {
        Self {
            k_energy: 0.5,
            k_theta: 200.0,
            k_theta_dot: 20.0,
            k_x: 0.8,
            k_x_dot: 1.2,
            base_damping: 0.1,
            extra_damping: 0.5,
            capture_threshold: 0.8,
            f_max: 20.0,
        }
    }
}

impl ControllerGains {
    /// Checks that the gains can drive a simulation.
    ///
    /// # Errors
    ///
    /// Returns an error if any gain is non-finite, if the force limit is not
    /// positive, or if the capture threshold is negative.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let gains = [
            ("k_energy", self.k_energy),
            ("k_theta", self.k_theta),
            ("k_theta_dot", self.k_theta_dot),
            ("k_x", self.k_x),
            ("k_x_dot", self.k_x_dot),
            ("base_damping", self.base_damping),
            ("extra_damping", self.extra_damping),
        ];
        if let Some(&(name, value)) = gains.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ParameterError::Gain { name, value });
        }

        if !self.capture_threshold.is_finite() || self.capture_threshold < 0.0 {
            return Err(ParameterError::CaptureThreshold(self.capture_threshold));
        }
        if !self.f_max.is_finite() || self.f_max <= 0.0 {
            return Err(ParameterError::ForceLimit(self.f_max));
        }
        Ok(())
    }
}
