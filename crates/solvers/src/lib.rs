//! Numerical solvers for cart-pole models.
//!
//! # Modules
//!
//! - [`ode`]: adaptive Runge-Kutta integration of an [`OdeModel`] onto a
//!   uniform output grid
//!
//! [`OdeModel`]: cartpole_core::OdeModel

pub mod ode;
