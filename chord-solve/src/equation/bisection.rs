//! Bisection root finding on a bracketed sign change.
//!
//! Given a bracket whose endpoint residuals differ in sign, the solver
//! repeatedly evaluates the midpoint and keeps the half that still
//! brackets the root. The bracket halves every iteration, so convergence
//! is guaranteed in `O(log(width / tol))` iterations.

mod bracket;
mod config;
mod error;

pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;

use chord_core::{EquationProblem, Model, Observer};

use super::{Evaluation, Solution, Status, evaluate};
use bracket::Bounds;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best evaluation so far.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Current search bracket, before shrinking on this evaluation.
    pub bracket: [f64; 2],
    /// Evaluation at the current midpoint.
    pub eval: &'a Evaluation<I, O>,
}

/// Finds a root of the equation using the bisection method.
///
/// Endpoint residuals are evaluated first: an endpoint already within
/// `residual_tol` returns immediately, and a zero-width bracket is
/// reported as converged without iterating. Otherwise the endpoints must
/// bracket a sign change. Observers see each iteration's evaluation and
/// bracket state and may stop the solve early.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, if a residual is
/// not finite, or if the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;

    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();

    let left_eval = checked_eval(model, problem, left)?;
    if left_eval.residual.abs() <= config.residual_tol {
        return Ok(Solution::from_eval(left_eval, Status::Converged, 0));
    }

    // A zero-width bracket is already converged in x.
    if bounds.is_degenerate() {
        return Ok(Solution::from_eval(left_eval, Status::Converged, 0));
    }

    let right_eval = checked_eval(model, problem, right)?;
    if right_eval.residual.abs() <= config.residual_tol {
        return Ok(Solution::from_eval(right_eval, Status::Converged, 0));
    }

    let left_sign = Sign::of(left_eval.residual);
    let right_sign = Sign::of(right_eval.residual);

    let (mut best, mut best_residual) = if left_eval.residual.abs() <= right_eval.residual.abs() {
        let residual = left_eval.residual;
        (left_eval, residual)
    } else {
        let residual = right_eval.residual;
        (right_eval, residual)
    };

    let mut bracket = Bracket::new(bounds, left_sign, right_sign)?;

    for iter in 1..=config.max_iters {
        let mid = bracket.midpoint();
        let mid_eval = checked_eval(model, problem, mid)?;
        let mid_residual = mid_eval.residual;

        let x_converged = bracket.is_within(config.x_abs_tol, config.x_rel_tol);
        let residual_converged = mid_residual.abs() <= config.residual_tol;
        let is_better = mid_residual.abs() < best_residual.abs();

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            eval: &mid_eval,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            let best_eval = if is_better { mid_eval } else { best };
            return Ok(Solution::from_eval(
                best_eval,
                Status::StoppedByObserver,
                iter,
            ));
        }

        if x_converged || residual_converged {
            return Ok(Solution::from_eval(mid_eval, Status::Converged, iter));
        }

        if is_better {
            best = mid_eval;
            best_residual = mid_residual;
        }

        bracket.shrink(mid, Sign::of(mid_residual));
    }

    Ok(Solution::from_eval(
        best,
        Status::MaxIters,
        config.max_iters,
    ))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, if a residual is
/// not finite, or if the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Evaluates the problem at `x` and rejects non-finite residuals.
fn checked_eval<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, x)?;
    if !eval.residual.is_finite() {
        return Err(Error::NonFiniteResidual {
            x,
            residual: eval.residual,
        });
    }
    Ok(eval)
}
