//! Shared setups for the cross-crate tests.

use std::{f64::consts::PI, path::PathBuf};

use cartpole_sim::{ControllerGains, Method, PhysicalParameters, Reference, Simulation, State};

/// The baseline swing-up run from near hanging.
#[must_use]
pub fn swing_up(duration: f64) -> Simulation {
    Simulation {
        initial_state: State::new(0.0, 0.2, 0.0, 0.0),
        reference: Reference::default(),
        params: PhysicalParameters::default(),
        gains: ControllerGains::default(),
        duration,
        time_step: 0.01,
        method: Method::default(),
    }
}

/// A run starting at rest on the upright equilibrium.
#[must_use]
pub fn balanced(duration: f64) -> Simulation {
    Simulation {
        initial_state: State::new(0.0, PI, 0.0, 0.0),
        ..swing_up(duration)
    }
}

/// Path to a file in this crate's `fixtures` directory.
#[must_use]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}
