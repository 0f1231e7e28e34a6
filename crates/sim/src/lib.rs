//! Closed-loop simulation of the cart-pole.
//!
//! [`simulate`] integrates the plant under the hybrid controller onto a
//! uniform time grid and returns a read-only [`Trajectory`]. Every run is a
//! pure function of its inputs, so independent runs may execute on separate
//! threads without coordination.
//!
//! ```ignore
//! use cartpole_sim::{simulate, ControllerGains, PhysicalParameters, Reference, State};
//!
//! let trajectory = simulate(
//!     State::new(0.0, 0.2, 0.0, 0.0),
//!     Reference::default(),
//!     PhysicalParameters::default(),
//!     ControllerGains::default(),
//!     100.0,
//!     0.01,
//! )?;
//! ```
//!
//! Gain tuners reduce a run to a scalar with [`fitness`] or [`evaluate`], and
//! [`Scenario`] loads a complete run description from TOML or JSON.

mod error;
mod fitness;
mod scenario;
mod simulation;
mod trajectory;

pub use error::{Error, InvalidParameters};
pub use fitness::{FitnessWeights, evaluate, fitness};
pub use scenario::{Scenario, ScenarioError};
pub use simulation::{Simulation, simulate};
pub use trajectory::{Sample, Trajectory};

pub use cartpole_plant::dynamics::energy;
pub use cartpole_plant::{
    Command, ControllerGains, Mode, ParameterError, PhysicalParameters, Reference, State, wrap,
};
pub use cartpole_solvers::ode::{Failure, Method, MethodError};
