//! Core traits and types for the Chord numerical-methods toolkit.
//!
//! This crate defines the shared abstractions the solvers build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions
//! - [`EquationProblem`], [`DifferentiableProblem`], [`IntegrandProblem`],
//!   [`OdeProblem`] — problem traits that adapt solver variables to model
//!   inputs and extract residuals, integrand values, or state derivatives
//!   from model outputs
//! - [`StepIntegrable`], [`StageArithmetic`] — stepping and stage-blending
//!   capabilities used by the transient solvers

mod model;
mod observer;
mod problems;
mod step;

pub use observer::Observer;
pub use problems::{DifferentiableProblem, EquationProblem, IntegrandProblem, OdeProblem};
pub use step::{DerivativeOf, StageArithmetic, StepIntegrable};
pub use {model::Model, model::Snapshot};
