/// Cart-pole state.
///
/// The array form used by integrators is `[x, theta, x_dot, theta_dot]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct State {
    /// Cart position (m).
    pub x: f64,

    /// Pendulum angle (rad).
    pub theta: f64,

    /// Cart velocity (m/s).
    pub x_dot: f64,

    /// Pendulum angular velocity (rad/s).
    pub theta_dot: f64,
}

impl State {
    /// Creates a state from its components.
    #[must_use]
    pub const fn new(x: f64, theta: f64, x_dot: f64, theta_dot: f64) -> Self {
        Self {
            x,
            theta,
            x_dot,
            theta_dot,
        }
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.theta.is_finite()
            && self.x_dot.is_finite()
            && self.theta_dot.is_finite()
    }
}

impl From<[f64; 4]> for State {
    fn from([x, theta, x_dot, theta_dot]: [f64; 4]) -> Self {
        Self::new(x, theta, x_dot, theta_dot)
    }
}

impl From<State> for [f64; 4] {
    fn from(state: State) -> Self {
        [state.x, state.theta, state.x_dot, state.theta_dot]
    }
}
