use crate::ParameterError;

/// Physical parameters of the cart-pole.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct PhysicalParameters {
    /// Cart mass `M` (kg).
    pub cart_mass: f64,

    /// Pendulum mass `m` (kg).
    pub pendulum_mass: f64,

    /// Distance `l` from the pivot to the pendulum's center of mass (m).
    pub length: f64,

    /// Gravitational acceleration `g` (m/s²).
    pub gravity: f64,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            cart_mass: 1.0,
            pendulum_mass: 0.1,
            length: 0.5,
            gravity: 9.81,
        }
    }
}

impl PhysicalParameters {
    /// Checks that the parameters describe a physical cart-pole.
    ///
    /// # Errors
    ///
    /// Returns an error if a mass or the length is not finite and positive, or
    /// if gravity is not finite.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.cart_mass.is_finite() || self.cart_mass <= 0.0 {
            return Err(ParameterError::CartMass(self.cart_mass));
        }
        if !self.pendulum_mass.is_finite() || self.pendulum_mass <= 0.0 {
            return Err(ParameterError::PendulumMass(self.pendulum_mass));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(ParameterError::Length(self.length));
        }
        if !self.gravity.is_finite() {
            return Err(ParameterError::Gravity(self.gravity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(PhysicalParameters::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_physical_values() {
        let params = PhysicalParameters {
            cart_mass: 0.0,
            ..PhysicalParameters::default()
        };
        assert_eq!(params.validate(), Err(ParameterError::CartMass(0.0)));

        let params = PhysicalParameters {
            pendulum_mass: -0.1,
            ..PhysicalParameters::default()
        };
        assert_eq!(params.validate(), Err(ParameterError::PendulumMass(-0.1)));

        let params = PhysicalParameters {
            length: f64::INFINITY,
            ..PhysicalParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::Length(f64::INFINITY))
        );

        let params = PhysicalParameters {
            gravity: f64::NAN,
            ..PhysicalParameters::default()
        };
        assert!(matches!(params.validate(), Err(ParameterError::Gravity(_))));
    }

    #[test]
    fn zero_gravity_is_allowed() {
        let params = PhysicalParameters {
            gravity: 0.0,
            ..PhysicalParameters::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }
}
