//! Hybrid swing-up and stabilization controller.
//!
//! Far from the target the controller pumps energy into the pendulum while
//! gently centering the cart. Within the capture threshold it switches to a
//! state-feedback law with gravity compensation. A proximity measure
//! `½·(1 + cos e)` blends in gravity compensation and extra damping as the
//! pendulum nears the target.

use crate::{ControllerGains, PhysicalParameters, Reference, State, dynamics, wrap};

/// Cart position gain of the swing-up law.
const SWING_UP_CENTERING: f64 = 0.1;

/// Cart velocity gain of the swing-up law.
const SWING_UP_DAMPING: f64 = 0.2;

/// Which control law produced a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Mode {
    /// Energy pumping far from the target.
    SwingUp,

    /// State feedback near the target.
    Stabilize,
}

impl Mode {
    /// Selects the control law for a wrapped angle error.
    ///
    /// Stabilization applies strictly inside the threshold.
    #[must_use]
    pub fn classify(theta_error: f64, capture_threshold: f64) -> Self {
        if theta_error.abs() < capture_threshold {
            Self::Stabilize
        } else {
            Self::SwingUp
        }
    }
}

/// The controller's output for one state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    /// Force on the cart after saturation (N).
    pub force: f64,

    /// Viscous damping coefficient applied to the plant.
    pub damping: f64,

    /// The law that produced `force`.
    pub mode: Mode,

    /// Proximity to the target angle, in `[0, 1]`.
    pub proximity: f64,

    /// Whether the requested force exceeded the limit.
    pub saturated: bool,
}

/// Proximity of a wrapped angle error to zero, in `[0, 1]`.
#[must_use]
pub fn proximity(theta_error: f64) -> f64 {
    0.5 * (1.0 + theta_error.cos())
}

/// Computes the saturated force and damping for a state.
#[must_use]
pub fn control(
    state: &State,
    reference: &Reference,
    gains: &ControllerGains,
    params: &PhysicalParameters,
) -> Command {
    let error = wrap(state.theta - reference.theta);
    let proximity = proximity(error);
    let mode = Mode::classify(error, gains.capture_threshold);

    let requested = match mode {
        Mode::Stabilize => stabilizing_force(state, reference, gains, params, error, proximity),
        Mode::SwingUp => swing_up_force(state, reference, gains, params),
    };

    let force = saturate(requested, gains.f_max);

    Command {
        force,
        damping: gains.base_damping + gains.extra_damping * proximity,
        mode,
        proximity,
        saturated: requested.abs() > gains.f_max,
    }
}

/// Clamps a requested force to `[-f_max, f_max]`, passing `NaN` through.
fn saturate(requested: f64, f_max: f64) -> f64 {
    if requested.is_nan() {
        requested
    } else {
        requested.max(-f_max).min(f_max)
    }
}

fn stabilizing_force(
    state: &State,
    reference: &Reference,
    gains: &ControllerGains,
    params: &PhysicalParameters,
    error: f64,
    proximity: f64,
) -> f64 {
    let angle = -gains.k_theta * error;
    let angular_rate = -gains.k_theta_dot * state.theta_dot * (1.0 + 0.5 * state.theta.cos());
    let position = -gains.k_x * (state.x - reference.x) * (1.0 - 0.5 * error.abs());
    let velocity = -gains.k_x_dot * state.x_dot;
    let gravity = params.pendulum_mass * params.gravity * state.theta.sin() * proximity;

    angle + angular_rate + position + velocity + gravity
}

fn swing_up_force(
    state: &State,
    reference: &Reference,
    gains: &ControllerGains,
    params: &PhysicalParameters,
) -> f64 {
    let energy = dynamics::energy(state, params);

    gains.k_energy * energy * state.theta.cos() * state.theta_dot
        - SWING_UP_CENTERING * (state.x - reference.x)
        - SWING_UP_DAMPING * state.x_dot
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn baseline(state: State) -> Command {
        control(
            &state,
            &Reference::default(),
            &ControllerGains::default(),
            &PhysicalParameters::default(),
        )
    }

    #[test]
    fn classify_uses_strict_threshold() {
        assert_eq!(Mode::classify(0.0, 0.8), Mode::Stabilize);
        assert_eq!(Mode::classify(-0.79, 0.8), Mode::Stabilize);
        assert_eq!(Mode::classify(0.8, 0.8), Mode::SwingUp);
        assert_eq!(Mode::classify(-2.0, 0.8), Mode::SwingUp);
    }

    #[test]
    fn zero_threshold_never_stabilizes() {
        assert_eq!(Mode::classify(0.0, 0.0), Mode::SwingUp);
    }

    #[test]
    fn upright_at_rest_needs_no_force() {
        let command = baseline(State::new(0.0, PI, 0.0, 0.0));

        assert_eq!(command.mode, Mode::Stabilize);
        assert_relative_eq!(command.force, 0.0, epsilon = 1e-12);
        assert_relative_eq!(command.proximity, 1.0);
        assert_relative_eq!(command.damping, 0.6, epsilon = 1e-12);
        assert!(!command.saturated);
    }

    #[test]
    fn hanging_at_rest_has_no_energy_to_pump() {
        let command = baseline(State::default());

        assert_eq!(command.mode, Mode::SwingUp);
        assert_eq!(command.force, 0.0);
        assert_relative_eq!(command.proximity, 0.0, epsilon = 1e-12);
        assert_relative_eq!(command.damping, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn swing_up_centers_the_cart() {
        let command = baseline(State::new(2.0, 0.0, -1.0, 0.0));

        // -0.1·2 - 0.2·(-1)
        assert_eq!(command.mode, Mode::SwingUp);
        assert_relative_eq!(command.force, 0.0, epsilon = 1e-12);

        let command = baseline(State::new(1.0, 0.0, 0.0, 0.0));
        assert_relative_eq!(command.force, -0.1, epsilon = 1e-12);
    }

    #[test]
    fn swing_up_pumps_energy() {
        let state = State::new(0.0, 0.3, 0.0, 1.0);
        let params = PhysicalParameters::default();
        let energy = dynamics::energy(&state, &params);
        let command = baseline(state);

        assert_relative_eq!(command.force, 0.5 * energy * 0.3_f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn stabilization_opposes_angle_error() {
        let leaning = baseline(State::new(0.0, PI - 0.01, 0.0, 0.0));
        assert_eq!(leaning.mode, Mode::Stabilize);
        assert!(leaning.force > 0.0);

        let other_side = baseline(State::new(0.0, PI + 0.01, 0.0, 0.0));
        assert!(other_side.force < 0.0);
    }

    #[test]
    fn error_is_wrapped_across_the_branch_cut() {
        let wound = baseline(State::new(0.0, PI - 0.01 + 4.0 * PI, 0.0, 0.0));
        let plain = baseline(State::new(0.0, PI - 0.01, 0.0, 0.0));

        assert_eq!(wound.mode, Mode::Stabilize);
        assert_relative_eq!(wound.force, plain.force, epsilon = 1e-9);
    }

    #[test]
    fn reference_position_shifts_the_target() {
        let reference = Reference { x: 1.0, theta: PI };
        let command = control(
            &State::new(1.0, PI, 0.0, 0.0),
            &reference,
            &ControllerGains::default(),
            &PhysicalParameters::default(),
        );

        assert_relative_eq!(command.force, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn large_request_saturates() {
        let gains = ControllerGains {
            k_theta: 1e4,
            ..ControllerGains::default()
        };
        let command = control(
            &State::new(0.0, PI - 0.5, 0.0, 0.0),
            &Reference::default(),
            &gains,
            &PhysicalParameters::default(),
        );

        assert!(command.saturated);
        assert_eq!(command.force, 20.0);
    }

    #[test]
    fn non_finite_state_is_not_hidden_by_saturation() {
        let command = baseline(State::new(0.0, f64::NAN, 0.0, 0.0));
        assert!(command.force.is_nan());
        assert!(!command.saturated);

        let command = baseline(State::new(0.0, PI - 0.1, 0.0, f64::NAN));
        assert_eq!(command.mode, Mode::Stabilize);
        assert!(command.force.is_nan());
    }

    #[test]
    fn saturate_clamps_both_sides() {
        assert_eq!(saturate(35.0, 20.0), 20.0);
        assert_eq!(saturate(-35.0, 20.0), -20.0);
        assert_eq!(saturate(5.0, 20.0), 5.0);
        assert_eq!(saturate(f64::INFINITY, 20.0), 20.0);
    }

    proptest! {
        #[test]
        fn force_respects_limit(
            x in -10.0..10.0_f64,
            theta in -20.0..20.0_f64,
            x_dot in -20.0..20.0_f64,
            theta_dot in -50.0..50.0_f64,
            f_max in 0.1..100.0_f64,
        ) {
            let gains = ControllerGains { f_max, ..ControllerGains::default() };
            let command = control(
                &State::new(x, theta, x_dot, theta_dot),
                &Reference::default(),
                &gains,
                &PhysicalParameters::default(),
            );

            prop_assert!(command.force.abs() <= f_max);
            prop_assert!((0.0..=1.0).contains(&command.proximity));
            prop_assert!(command.damping >= gains.base_damping - 1e-12);
            prop_assert!(command.damping <= gains.base_damping + gains.extra_damping + 1e-12);
        }
    }
}
