//! Cart-pole plant model and hybrid controller.
//!
//! The crate is split along the data flow of one derivative evaluation:
//!
//! ```text
//! State -> controller::control -> Command { force, damping } -> dynamics::derivative -> State'
//! ```
//!
//! - [`dynamics`]: equations of motion and mechanical energy
//! - [`controller`]: energy-pumping swing-up and stabilizing feedback with a
//!   continuous proximity blend
//! - [`ClosedLoop`]: both composed as a [`Model`] that an ODE solver can drive
//!
//! Everything here is a pure function of its inputs.
//!
//! [`Model`]: cartpole_core::Model

mod angle;
mod closed_loop;
pub mod controller;
pub mod dynamics;
mod error;
mod gains;
mod params;
mod reference;
mod state;

pub use angle::wrap;
pub use closed_loop::{ClosedLoop, Input, Output};
pub use controller::{Command, Mode};
pub use error::ParameterError;
pub use gains::ControllerGains;
pub use params::PhysicalParameters;
pub use reference::Reference;
pub use state::State;
