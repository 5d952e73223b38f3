//! Fixed-step solvers for first-order ODE problems.
//!
//! An [`OdeProblem`] extracts a state from model input, computes the state
//! derivative from input and output, and rebuilds input from an advanced
//! state. Solvers in this module step that state forward a fixed number of
//! times and record the full trajectory of snapshots; the final state is
//! the last entry in the history.
//!
//! # Solvers
//!
//! - [`euler`] — forward Euler, first order, one model evaluation per step
//! - [`rk4`] — classic Runge–Kutta, fourth order, four model evaluations
//!   per step
//!
//! [`OdeProblem`]: chord_core::OdeProblem

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

pub mod euler;
pub mod rk4;
