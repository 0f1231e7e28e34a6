use crate::Model;

/// A model that describes an ODE with `N` state variables.
///
/// This trait lets a generic integrator drive a model by describing how to
/// rebuild the model input from the integrator's independent variable and
/// state vector, how to read the state vector back out of an input, and how to
/// extract the state derivative from the model's output.
pub trait OdeModel<const N: usize>: Model {
    /// Builds a model input at independent variable `x` with state `y`.
    ///
    /// `base` carries any input fields that are not integrated.
    fn apply_state(base: &Self::Input, x: f64, y: [f64; N]) -> Self::Input;

    /// Extracts the state vector from a model input.
    fn extract_state(input: &Self::Input) -> [f64; N];

    /// Extracts the state derivative from a model output.
    fn extract_derivative(output: &Self::Output) -> [f64; N];
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// Exponential decay `dy/dx = -rate * y`.
    struct Decay {
        rate: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Input {
        x: f64,
        y: f64,
    }

    impl Model for Decay {
        type Input = Input;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Input) -> Result<f64, Infallible> {
            Ok(-self.rate * input.y)
        }
    }

    impl OdeModel<1> for Decay {
        fn apply_state(_base: &Input, x: f64, y: [f64; 1]) -> Input {
            Input { x, y: y[0] }
        }

        fn extract_state(input: &Input) -> [f64; 1] {
            [input.y]
        }

        fn extract_derivative(output: &f64) -> [f64; 1] {
            [*output]
        }
    }

    #[test]
    fn state_round_trips_through_input() {
        let base = Input { x: 0.0, y: 1.0 };
        let input = Decay::apply_state(&base, 2.0, [0.5]);

        assert_eq!(input, Input { x: 2.0, y: 0.5 });
        assert_eq!(Decay::extract_state(&input), [0.5]);

        let output = Decay { rate: 3.0 }.call(&input).unwrap();
        assert_eq!(Decay::extract_derivative(&output), [-1.5]);
    }
}
