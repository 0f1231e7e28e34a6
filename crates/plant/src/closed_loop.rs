use std::convert::Infallible;

use cartpole_core::{Model, OdeModel};

use crate::{
    Command, ControllerGains, ParameterError, PhysicalParameters, Reference, State, controller,
    dynamics,
};

/// The cart-pole under hybrid control, as a callable model.
///
/// Calling the model runs the controller on the input state and evaluates the
/// plant dynamics under the resulting command.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClosedLoop {
    pub params: PhysicalParameters,
    pub gains: ControllerGains,
    pub reference: Reference,
}

/// Input to [`ClosedLoop`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Input {
    pub time: f64,
    pub state: State,
}

/// Output of [`ClosedLoop`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Output {
    /// Time derivative of the state.
    pub derivative: State,

    /// The controller command that produced `derivative`.
    pub command: Command,
}

impl ClosedLoop {
    /// Creates a closed loop after validating its parts.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] found in the parameters, the
    /// gains, or the reference.
    pub fn new(
        params: PhysicalParameters,
        gains: ControllerGains,
        reference: Reference,
    ) -> Result<Self, ParameterError> {
        params.validate()?;
        gains.validate()?;
        reference.validate()?;

        Ok(Self {
            params,
            gains,
            reference,
        })
    }

    /// Evaluates the controller and dynamics for a single state.
    #[must_use]
    pub fn evaluate(&self, state: &State) -> Output {
        let command = controller::control(state, &self.reference, &self.gains, &self.params);
        let derivative = dynamics::derivative(state, command.force, &self.params, command.damping);

        Output {
            derivative,
            command,
        }
    }
}

impl Model for ClosedLoop {
    type Input = Input;
    type Output = Output;
    type Error = Infallible;

    fn call(&self, input: &Input) -> Result<Output, Infallible> {
        Ok(self.evaluate(&input.state))
    }
}

impl OdeModel<4> for ClosedLoop {
    fn apply_state(_base: &Input, time: f64, y: [f64; 4]) -> Input {
        Input {
            time,
            state: State::from(y),
        }
    }

    fn extract_state(input: &Input) -> [f64; 4] {
        input.state.into()
    }

    fn extract_derivative(output: &Output) -> [f64; 4] {
        output.derivative.into()
    }
}
