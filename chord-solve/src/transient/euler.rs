//! Forward Euler integration for ODE problems.
//!
//! Each step advances the state with the derivative at the step's start:
//!
//! ```text
//! state_{n+1} = state_n + derivative_n * dt
//! ```
//!
//! One model evaluation per step; global error is first order in the step
//! size, so halving `dt` roughly halves the error.

use chord_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};

use super::{Action, Error, Event, Solution, Status};

/// Integrates an ODE problem with forward Euler for `steps` fixed steps.
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
    P::Delta: Clone,
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
        let derivative = problem
            .derivative(&current.input, &current.output)
            .map_err(Error::problem)?;

        let next_state = state.step(derivative, dt.clone());
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

/// Runs forward Euler without observation.
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
    P::Delta: Clone,
{
    solve(model, problem, initial, dt, steps, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// A point on the solution curve.
    #[derive(Debug, Clone, Copy)]
    struct Point {
        x: f64,
        y: f64,
    }

    /// Model with a constant slope field.
    struct ConstantSlope(f64);

    impl Model for ConstantSlope {
        type Input = Point;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, _input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(self.0)
        }
    }

    /// Problem that integrates `y` along `x`.
    struct Curve;

    impl OdeProblem for Curve {
        type Input = Point;
        type Output = f64;
        type Delta = f64;
        type State = f64;
        type Error = Infallible;

        fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error> {
            Ok(input.y)
        }

        fn derivative(&self, _input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error> {
            Ok(*output)
        }

        fn next_input(
            &self,
            base: &Self::Input,
            state: &Self::State,
            delta: &Self::Delta,
        ) -> Result<Self::Input, Self::Error> {
            Ok(Point {
                x: base.x + delta,
                y: *state,
            })
        }
    }

    #[test]
    fn constant_slope_advances_linearly() {
        let initial = Point { x: 0.0, y: 0.0 };
        let solution = solve_unobserved(&ConstantSlope(2.0), &Curve, initial, 0.1, 10)
            .expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 10);
        assert_eq!(solution.history.len(), 11);

        let end = solution.history.last().expect("history is never empty");
        assert_relative_eq!(end.input.x, 1.0);
        assert_relative_eq!(end.input.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_steps_returns_the_initial_state() {
        let initial = Point { x: 0.5, y: 3.0 };
        let solution = solve_unobserved(&ConstantSlope(1.0), &Curve, initial, 0.1, 0)
            .expect("should return the initial state");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
        assert_relative_eq!(solution.history[0].input.y, 3.0);
    }

    #[test]
    fn observer_can_stop_early() {
        let initial = Point { x: 0.0, y: 0.0 };
        let observer =
            |event: &Event<Point, f64>| (event.step >= 5).then_some(Action::StopEarly);

        let solution = solve(&ConstantSlope(1.0), &Curve, initial, 0.1, 100, observer)
            .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.history.len(), 6);
    }

    #[test]
    fn events_start_at_step_zero() {
        let initial = Point { x: 0.0, y: 0.0 };
        let mut seen = Vec::new();

        solve(
            &ConstantSlope(1.0),
            &Curve,
            initial,
            0.25,
            4,
            |event: &Event<Point, f64>| {
                seen.push(event.step);
                None
            },
        )
        .expect("should solve");

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }
}
