use serde::{Deserialize, Serialize};
use tracing::debug;

use cartpole_plant::Reference;

use crate::{Simulation, Trajectory};

/// Weights of the tracking and smoothness terms in [`fitness`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FitnessWeights {
    /// Weight on squared cart position error.
    pub position: f64,

    /// Weight on squared wrapped angle error.
    pub angle: f64,

    /// Weight on squared cart displacement between samples.
    pub position_oscillation: f64,

    /// Weight on squared angle change between samples.
    pub angle_oscillation: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            position: 1.0,
            angle: 10.0,
            position_oscillation: 0.1,
            angle_oscillation: 0.1,
        }
    }
}

/// Scores a trajectory against its reference. Lower is better.
///
/// ```text
/// position·Σ(x_k − x_ref)² + angle·Σe_k² + position_oscillation·Σ(Δx_k)² + angle_oscillation·Σ(Δθ_k)²
/// ```
///
/// where `e_k` is the wrapped angle error and the differences run over
/// consecutive samples.
#[must_use]
pub fn fitness(trajectory: &Trajectory, reference: &Reference, weights: &FitnessWeights) -> f64 {
    let samples = trajectory.samples();

    let (position, angle) = samples.iter().fold((0.0, 0.0), |(position, angle), sample| {
        (
            position + (sample.state.x - reference.x).powi(2),
            angle + sample.theta_error(reference).powi(2),
        )
    });

    let (position_oscillation, angle_oscillation) = samples.windows(2).fold(
        (0.0, 0.0),
        |(position, angle), pair| {
            (
                position + (pair[1].state.x - pair[0].state.x).powi(2),
                angle + (pair[1].state.theta - pair[0].state.theta).powi(2),
            )
        },
    );

    weights.position * position
        + weights.angle * angle
        + weights.position_oscillation * position_oscillation
        + weights.angle_oscillation * angle_oscillation
}

/// Runs a simulation and scores it, treating any error as infinitely bad.
#[must_use]
pub fn evaluate(simulation: &Simulation, weights: &FitnessWeights) -> f64 {
    match simulation.run() {
        Ok(trajectory) => fitness(&trajectory, &simulation.reference, weights),
        Err(err) => {
            debug!(error = %err, "candidate rejected");
            f64::INFINITY
        }
    }
}
