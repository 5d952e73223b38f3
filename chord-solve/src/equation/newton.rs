//! Newton root finding driven by the residual derivative.
//!
//! Each iteration evaluates the residual and its slope at the current
//! iterate and steps by `x ← x − residual / slope`. Convergence is
//! quadratic near a simple root but is not guaranteed: exhausting the
//! iteration limit is reported through [`Status::MaxIters`] on the
//! solution, not as an error, so callers inspect the status to detect
//! non-convergence.
//!
//! With [`DerivativeMode::Frozen`] the slope is evaluated once at the
//! starting point and reused for every step — the classic modified Newton
//! scheme, cheaper per iteration and linearly convergent.

mod config;
mod error;

pub use config::{Config, ConfigError, DerivativeMode};
pub use error::Error;

use chord_core::{DifferentiableProblem, Model, Observer};

use super::{Evaluation, Solution, Status, evaluate};

/// Control actions supported by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current iterate.
    StopEarly,
}

/// Iteration event emitted by the Newton solver.
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based within the Newton loop).
    pub iter: usize,
    /// Slope used for this iteration's update step.
    pub slope: f64,
    /// Evaluation at the current iterate.
    pub eval: &'a Evaluation<I, O>,
}

/// Finds a root of the equation using Newton's method.
///
/// The residual is checked before the derivative each iteration, so a
/// starting point that already satisfies `residual_tol` returns without
/// evaluating the slope. In [`DerivativeMode::Frozen`] the slope is
/// evaluated once, before the first step, and a zero slope there fails
/// fast. Observers see each iteration's evaluation and slope and may stop
/// the solve early.
///
/// # Errors
///
/// Returns an error if the config or starting point is invalid, if a
/// slope is exactly zero or non-finite, if a residual is non-finite, or
/// if the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;

    if !start.is_finite() {
        return Err(Error::NonFiniteStart { value: start });
    }

    let frozen_slope = match config.derivative {
        DerivativeMode::Frozen => Some(slope_at(problem, start)?),
        DerivativeMode::Refreshed => None,
    };

    let mut x = start;
    let mut eval = checked_eval(model, problem, x)?;

    for iter in 1..=config.max_iters {
        if eval.residual.abs() < config.residual_tol {
            return Ok(Solution::from_eval(eval, Status::Converged, iter - 1));
        }

        let slope = match frozen_slope {
            Some(slope) => slope,
            None => slope_at(problem, x)?,
        };

        let event = Event {
            iter,
            slope,
            eval: &eval,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(
                eval,
                Status::StoppedByObserver,
                iter - 1,
            ));
        }

        x -= eval.residual / slope;
        eval = checked_eval(model, problem, x)?;
    }

    // The iteration limit is not an error; the status tells the caller
    // whether the final iterate happens to satisfy the tolerance.
    let status = if eval.residual.abs() < config.residual_tol {
        Status::Converged
    } else {
        Status::MaxIters
    };

    Ok(Solution::from_eval(eval, status, config.max_iters))
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error if the config or starting point is invalid, if a
/// slope is exactly zero or non-finite, if a residual is non-finite, or
/// if the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, start, config, ())
}

/// Evaluates the residual derivative at `x` and rejects unusable slopes.
#[allow(clippy::float_cmp)]
fn slope_at<P>(problem: &P, x: f64) -> Result<f64, Error>
where
    P: DifferentiableProblem,
{
    let slope = problem.residual_derivative(x).map_err(Error::problem)?;

    if slope == 0.0 {
        return Err(Error::ZeroDerivative { x });
    }
    if !slope.is_finite() {
        return Err(Error::NonFiniteDerivative { x, slope });
    }

    Ok(slope)
}

/// Evaluates the problem at `x` and rejects non-finite residuals.
fn checked_eval<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableProblem<Input = M::Input, Output = M::Output>,
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

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use chord_core::EquationProblem;

    /// Model that evaluates `x³ − x − 1`.
    struct CubicModel;

    impl Model for CubicModel {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input.powi(3) - input - 1.0)
        }
    }

    /// Problem that finds the zero of the cubic model.
    struct CubicRoot;

    impl EquationProblem for CubicRoot {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: f64) -> Result<Self::Input, Self::Error> {
            Ok(x)
        }

        fn residual(&self, _input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error> {
            Ok(*output)
        }
    }

    impl DifferentiableProblem for CubicRoot {
        fn residual_derivative(&self, x: f64) -> Result<f64, Self::Error> {
            Ok(3.0 * x * x - 1.0)
        }
    }

    /// Model that evaluates `x² + 1`, which is flat at the origin.
    struct OffsetParabola;

    impl Model for OffsetParabola {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input * input + 1.0)
        }
    }

    /// Problem that finds the zero of the parabola.
    struct ParabolaRoot;

    impl EquationProblem for ParabolaRoot {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: f64) -> Result<Self::Input, Self::Error> {
            Ok(x)
        }

        fn residual(&self, _input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error> {
            Ok(*output)
        }
    }

    impl DifferentiableProblem for ParabolaRoot {
        fn residual_derivative(&self, x: f64) -> Result<f64, Self::Error> {
            Ok(2.0 * x)
        }
    }

    const CUBIC_ROOT: f64 = 1.324_717_957_244_746;

    #[test]
    fn converges_on_the_cubic() {
        let config = Config {
            residual_tol: 1e-5,
            ..Config::default()
        };
        let solution = solve_unobserved(&CubicModel, &CubicRoot, 1.5, &config)
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, CUBIC_ROOT, epsilon = 1e-5);
    }

    #[test]
    fn frozen_derivative_converges_more_slowly() {
        let config = Config {
            residual_tol: 1e-5,
            ..Config::default()
        };

        let refreshed = solve_unobserved(&CubicModel, &CubicRoot, 1.5, &config)
            .expect("should solve");
        let frozen = solve_unobserved(&CubicModel, &CubicRoot, 1.5, &config.frozen())
            .expect("should solve");

        assert_eq!(refreshed.status, Status::Converged);
        assert_eq!(frozen.status, Status::Converged);
        assert_relative_eq!(frozen.x, CUBIC_ROOT, epsilon = 1e-5);
        assert!(frozen.iters > refreshed.iters);
    }

    #[test]
    fn converged_start_returns_without_iterating() {
        let config = Config {
            residual_tol: 1e-3,
            ..Config::default()
        };
        let solution = solve_unobserved(&CubicModel, &CubicRoot, CUBIC_ROOT, &config)
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn errors_on_zero_derivative_at_the_start() {
        let result = solve_unobserved(&OffsetParabola, &ParabolaRoot, 0.0, &Config::default());
        assert!(matches!(result, Err(Error::ZeroDerivative { x }) if x == 0.0));

        let frozen = Config::default().frozen();
        let result = solve_unobserved(&OffsetParabola, &ParabolaRoot, 0.0, &frozen);
        assert!(matches!(result, Err(Error::ZeroDerivative { x }) if x == 0.0));
    }

    #[test]
    fn iteration_limit_is_not_an_error() {
        let config = Config {
            max_iters: 2,
            residual_tol: 1e-12,
            ..Config::default()
        };
        let solution = solve_unobserved(&CubicModel, &CubicRoot, 100.0, &config)
            .expect("should return the last iterate");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 2);
        assert!(solution.residual.is_finite());
    }

    #[test]
    fn errors_on_non_finite_start() {
        let result = solve_unobserved(&CubicModel, &CubicRoot, f64::NAN, &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteStart { .. })));
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config {
            residual_tol: f64::NAN,
            ..Config::default()
        };
        let result = solve_unobserved(&CubicModel, &CubicRoot, 1.5, &config);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let observer =
            |event: &Event<'_, f64, f64>| (event.iter >= 2).then_some(Action::StopEarly);

        let solution = solve(&CubicModel, &CubicRoot, 1.5, &Config::default(), observer)
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
    }
}
