//! Classic fourth-order Runge–Kutta integration for ODE problems.
//!
//! Each step evaluates four stage derivatives and advances the state with
//! their weighted blend:
//!
//! ```text
//! k1 = f(x, y)
//! k2 = f(x + dt/2, y + k1·dt/2)
//! k3 = f(x + dt/2, y + k2·dt/2)
//! k4 = f(x + dt,   y + k3·dt)
//! y_{n+1} = y_n + (k1 + 2·k2 + 2·k3 + k4)/6 · dt
//! ```
//!
//! Four model evaluations per step buy fourth-order global accuracy, the
//! classic trade against forward Euler.

use std::ops::Mul;

use chord_core::{DerivativeOf, Model, Observer, OdeProblem, Snapshot, StageArithmetic, StepIntegrable};

use super::{Action, Error, Event, Solution, Status};

/// Integrates an ODE problem with classic Runge–Kutta for `steps` fixed
/// steps.
///
/// The midpoint stages advance the independent variable by half a step,
/// so the delta type must support scaling by `f64`, and the state's
/// derivative must support the weighted blend via [`StageArithmetic`].
///
/// The observer receives an [`Event`] for the initial state (step 0) and
/// after every integration step, and may return [`Action::StopEarly`] to
/// finish with the trajectory so far.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any point.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone + Mul<f64, Output = P::Delta>,
    DerivativeOf<P::State, P::Delta>: StageArithmetic,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let initial_output = model.call(&initial).map_err(Error::model)?;
    let initial_snapshot = Snapshot::new(initial, initial_output);

    let mut history = Vec::with_capacity(steps + 1);
    history.push(initial_snapshot.clone());

    let event = Event {
        step: 0,
        snapshot: initial_snapshot.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = initial_snapshot;

    for step in 1..=steps {
        let state = problem.state(&current.input).map_err(Error::problem)?;
        let half = dt.clone() * 0.5;

        let k1 = problem
            .derivative(&current.input, &current.output)
            .map_err(Error::problem)?;
        let k2 = stage(model, problem, &current.input, &state, &k1, &half)?;
        let k3 = stage(model, problem, &current.input, &state, &k2, &half)?;
        let k4 = stage(model, problem, &current.input, &state, &k3, &dt)?;

        let blended = k1
            .plus(&k2.scaled(2.0))
            .plus(&k3.scaled(2.0))
            .plus(&k4)
            .scaled(1.0 / 6.0);

        let next_state = state.step(blended, dt.clone());
        let next_input = problem
            .next_input(&current.input, &next_state, &dt)
            .map_err(Error::problem)?;
        let next_output = model.call(&next_input).map_err(Error::model)?;
        let next_snapshot = Snapshot::new(next_input, next_output);

        history.push(next_snapshot.clone());

        let event = Event {
            step,
            snapshot: next_snapshot.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next_snapshot;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Runs classic Runge–Kutta without observation.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone + Mul<f64, Output = P::Delta>,
    DerivativeOf<P::State, P::Delta>: StageArithmetic,
{
    solve(model, problem, initial, dt, steps, ())
}

/// Evaluates the stage derivative at `base` advanced by `derivative` over
/// `delta`.
fn stage<M, P>(
    model: &M,
    problem: &P,
    base: &M::Input,
    state: &P::State,
    derivative: &DerivativeOf<P::State, P::Delta>,
    delta: &P::Delta,
) -> Result<DerivativeOf<P::State, P::Delta>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    DerivativeOf<P::State, P::Delta>: StageArithmetic,
{
    let staged = state.step(derivative.clone(), delta.clone());
    let input = problem
        .next_input(base, &staged, delta)
        .map_err(Error::problem)?;
    let output = model.call(&input).map_err(Error::model)?;
    problem.derivative(&input, &output).map_err(Error::problem)
}
