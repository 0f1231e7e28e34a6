//! Equations of motion for a cart carrying a pendulum on a frictionless pivot.
//!
//! `theta` is measured from the hanging-down position, so `theta = 0` hangs
//! and `theta = π` is upright. Viscous damping acts on both the cart and the
//! pendulum with one shared coefficient.

use crate::{PhysicalParameters, State};

/// Mechanical energy of the pendulum relative to hanging at rest.
///
/// `E = m·g·l·(cos θ − 1) + ½·m·(l·θ̇)²`
///
/// The cart's translational energy is not included.
#[must_use]
pub fn energy(state: &State, params: &PhysicalParameters) -> f64 {
    let PhysicalParameters {
        pendulum_mass: m,
        length: l,
        gravity: g,
        ..
    } = *params;

    let potential = m * g * l * (state.theta.cos() - 1.0);
    let kinetic = 0.5 * m * (l * state.theta_dot).powi(2);
    potential + kinetic
}

/// Time derivative of the state under a horizontal `force` on the cart.
///
/// Returns `(ẋ, θ̇, ẍ, θ̈)` packed as a [`State`].
///
/// The mass-matrix determinant `M + m·sin²θ` is at least `M`, so the result
/// is finite for any finite state when the parameters are valid.
#[must_use]
pub fn derivative(state: &State, force: f64, params: &PhysicalParameters, damping: f64) -> State {
    let PhysicalParameters {
        cart_mass: big_m,
        pendulum_mass: m,
        length: l,
        gravity: g,
    } = *params;
    let State {
        theta,
        x_dot,
        theta_dot,
        ..
    } = *state;

    let (sin, cos) = theta.sin_cos();
    let den = big_m + m * sin * sin;
    debug_assert!(den > 0.0, "mass matrix is singular");

    let x_ddot =
        (force + m * l * theta_dot.powi(2) * sin - m * g * sin * cos - damping * x_dot) / den;
    let theta_ddot = (-force * cos - m * l * theta_dot.powi(2) * sin * cos
        + (big_m + m) * g * sin
        - damping * theta_dot)
        / (l * den);

    State::new(x_dot, theta_dot, x_ddot, theta_ddot)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    #[test]
    fn hanging_at_rest_has_zero_energy() {
        let params = PhysicalParameters::default();
        assert_eq!(energy(&State::default(), &params), 0.0);
    }

    #[test]
    fn upright_at_rest_has_minimum_potential() {
        let params = PhysicalParameters::default();
        let upright = State::new(0.0, PI, 0.0, 0.0);

        // -2·m·g·l
        assert_relative_eq!(energy(&upright, &params), -0.981, epsilon = 1e-12);
    }

    #[test]
    fn kinetic_term_uses_angular_velocity() {
        let params = PhysicalParameters::default();
        let spinning = State::new(3.0, 0.0, 7.0, 2.0);

        // ½·0.1·(0.5·2)²
        assert_relative_eq!(energy(&spinning, &params), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn equilibria_have_zero_acceleration() {
        let params = PhysicalParameters::default();

        for theta in [0.0, PI] {
            let state = State::new(1.5, theta, 0.0, 0.0);
            let d = derivative(&state, 0.0, &params, 0.3);

            assert_eq!(d.x, 0.0);
            assert_eq!(d.theta, 0.0);
            assert_relative_eq!(d.x_dot, 0.0, epsilon = 1e-12);
            assert_relative_eq!(d.theta_dot, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn force_on_hanging_cart() {
        let params = PhysicalParameters::default();
        let d = derivative(&State::default(), 2.0, &params, 0.0);

        // sinθ = 0, so den = M and the pendulum sees -F/(l·M).
        assert_relative_eq!(d.x_dot, 2.0, epsilon = 1e-12);
        assert_relative_eq!(d.theta_dot, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn velocities_pass_through() {
        let params = PhysicalParameters::default();
        let state = State::new(0.0, 1.0, -0.4, 0.7);
        let d = derivative(&state, 0.0, &params, 0.0);

        assert_eq!(d.x, -0.4);
        assert_eq!(d.theta, 0.7);
    }

    #[test]
    fn damping_opposes_motion() {
        let params = PhysicalParameters::default();
        let moving = State::new(0.0, 0.0, 1.0, 0.0);

        let free = derivative(&moving, 0.0, &params, 0.0);
        let damped = derivative(&moving, 0.0, &params, 0.5);

        assert_relative_eq!(free.x_dot, 0.0, epsilon = 1e-12);
        assert_relative_eq!(damped.x_dot, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn finite_for_large_states() {
        let params = PhysicalParameters::default();
        let state = State::new(1e3, 123.4, -50.0, 80.0);

        assert!(derivative(&state, 20.0, &params, 0.6).is_finite());
    }
}
