use thiserror::Error;

/// A physical parameter or controller gain that cannot be simulated.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("cart mass must be finite and positive, got {0}")]
    CartMass(f64),

    #[error("pendulum mass must be finite and positive, got {0}")]
    PendulumMass(f64),

    #[error("pendulum length must be finite and positive, got {0}")]
    Length(f64),

    #[error("gravity must be finite, got {0}")]
    Gravity(f64),

    #[error("force limit must be finite and positive, got {0}")]
    ForceLimit(f64),

    #[error("capture threshold must be finite and non-negative, got {0}")]
    CaptureThreshold(f64),

    #[error("gain `{name}` must be finite, got {value}")]
    Gain { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}
