//! Core traits and types for the cart-pole workspace.
//!
//! This crate defines the shared abstractions that the solvers and the plant
//! build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`OdeModel`]: a model whose input carries `N` integrable state variables

mod model;
mod observer;
mod ode;

pub use observer::Observer;
pub use ode::OdeModel;
pub use {model::Model, model::Snapshot};
