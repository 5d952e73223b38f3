//! Numerical solvers for the Chord toolkit.
//!
//! Solvers are grouped by problem family:
//!
//! - [`equation`] — root finding for scalar nonlinear equations
//! - [`quadrature`] — fixed-grid estimation of definite integrals
//! - [`transient`] — fixed-step integration of first-order ODE problems
//!
//! Every iterative solver follows the same shape: a `solve` entry point
//! that reports each iteration to an [`Observer`], a `solve_unobserved`
//! convenience wrapper, a validated `Config`, and a solution type that
//! records how the solver finished.
//!
//! [`Observer`]: chord_core::Observer

pub mod equation;
pub mod quadrature;
pub mod transient;
