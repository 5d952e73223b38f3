//! Fixed-grid estimation of definite integrals.
//!
//! An [`IntegrandProblem`] maps a grid point to a model input, calls the
//! model, and extracts the integrand value. [`integrate`] samples the
//! integrand on the grid selected by a [`Rule`] and returns the weighted
//! sum as an [`Estimate`].
//!
//! The rules are non-iterative: the grid is fixed by the config, every
//! call performs the same evaluations in the same order, and identical
//! arguments produce bit-identical estimates.
//!
//! [`IntegrandProblem`]: chord_core::IntegrandProblem

mod config;
mod error;
mod estimate;
mod rule;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use estimate::Estimate;
pub use rule::Rule;

use chord_core::{IntegrandProblem, Model};

/// Estimates the definite integral of the problem's integrand over
/// `interval` using the grid of the given rule.
///
/// The interval is oriented: reversing the bounds negates the estimate,
/// and a zero-width interval yields exactly zero.
///
/// # Errors
///
/// Returns an error if the config or a bound is invalid, if a sampled
/// integrand value is not finite, or if the model or problem fails.
pub fn integrate<M, P>(
    model: &M,
    problem: &P,
    interval: [f64; 2],
    rule: Rule,
    config: &Config,
) -> Result<Estimate, Error>
where
    M: Model,
    P: IntegrandProblem<Input = M::Input, Output = M::Output>,
{
    config.validate()?;

    let [a, b] = interval;
    for bound in [a, b] {
        if !bound.is_finite() {
            return Err(Error::NonFiniteBound { value: bound });
        }
    }

    let n = config.subdivisions;
    let delta = (b - a) / n as f64;

    let value = match rule {
        Rule::LeftRectangle => {
            let mut sum = 0.0;
            for i in 0..n {
                sum += sample(model, problem, a + i as f64 * delta)?;
            }
            delta * sum
        }
        Rule::MidRectangle => {
            let mut sum = 0.0;
            for i in 0..n {
                sum += sample(model, problem, a + (i as f64 + 0.5) * delta)?;
            }
            delta * sum
        }
        Rule::Trapezoidal => {
            let mut sum = 0.5 * (sample(model, problem, a)? + sample(model, problem, b)?);
            for i in 1..n {
                sum += sample(model, problem, a + i as f64 * delta)?;
            }
            delta * sum
        }
    };

    Ok(Estimate {
        value,
        rule,
        subdivisions: n,
        evaluations: rule.evaluations(n),
    })
}

/// Samples the integrand at a single grid point.
fn sample<M, P>(model: &M, problem: &P, x: f64) -> Result<f64, Error>
where
    M: Model,
    P: IntegrandProblem<Input = M::Input, Output = M::Output>,
{
    let input = problem.input(x).map_err(Error::problem)?;
    let output = model.call(&input).map_err(Error::model)?;
    let value = problem.integrand(&input, &output).map_err(Error::problem)?;

    if !value.is_finite() {
        return Err(Error::NonFiniteSample { x, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    /// Model that evaluates `sin(x)`.
    struct SineModel;

    impl Model for SineModel {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input.sin())
        }
    }

    /// Model that inverts its input.
    struct ReciprocalModel;

    impl Model for ReciprocalModel {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(1.0 / input)
        }
    }

    /// Problem that integrates the model output directly.
    struct Direct;

    impl IntegrandProblem for Direct {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: f64) -> Result<Self::Input, Self::Error> {
            Ok(x)
        }

        fn integrand(&self, _input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error> {
            Ok(*output)
        }
    }

    #[test]
    fn second_order_rules_are_accurate_on_sine() {
        // Exact value of the integral over [0, π] is 2.
        for rule in [Rule::Trapezoidal, Rule::MidRectangle] {
            let estimate = integrate(&SineModel, &Direct, [0.0, PI], rule, &Config::default())
                .expect("should integrate");
            assert_relative_eq!(estimate.value, 2.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn left_rectangle_trails_the_trapezoid() {
        // Over [0, π/2] the integrand rises monotonically, so the left
        // rule's first-order error dominates. (Over the full period the
        // two rules coincide because the integrand vanishes at both ends.)
        let config = Config::default();
        let interval = [0.0, PI / 2.0];
        let exact = 1.0;

        let left = integrate(&SineModel, &Direct, interval, Rule::LeftRectangle, &config)
            .expect("should integrate");
        let trapezoid = integrate(&SineModel, &Direct, interval, Rule::Trapezoidal, &config)
            .expect("should integrate");

        assert!((left.value - exact).abs() > (trapezoid.value - exact).abs());
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let first = integrate(
            &SineModel,
            &Direct,
            [0.0, PI],
            Rule::MidRectangle,
            &Config::default(),
        )
        .expect("should integrate");
        let second = integrate(
            &SineModel,
            &Direct,
            [0.0, PI],
            Rule::MidRectangle,
            &Config::default(),
        )
        .expect("should integrate");

        assert_eq!(first, second);
    }

    #[test]
    fn reversed_interval_negates_the_estimate() {
        let forward = integrate(
            &SineModel,
            &Direct,
            [0.0, PI],
            Rule::Trapezoidal,
            &Config::default(),
        )
        .expect("should integrate");
        let backward = integrate(
            &SineModel,
            &Direct,
            [PI, 0.0],
            Rule::Trapezoidal,
            &Config::default(),
        )
        .expect("should integrate");

        // The grids walk opposite directions, so agreement is up to
        // summation roundoff rather than bit-exact.
        assert_relative_eq!(backward.value, -forward.value, epsilon = 1e-12);
    }

    #[test]
    fn zero_width_interval_is_zero() {
        let estimate = integrate(
            &SineModel,
            &Direct,
            [1.0, 1.0],
            Rule::LeftRectangle,
            &Config::default(),
        )
        .expect("should integrate");

        assert_eq!(estimate.value, 0.0);
    }

    #[test]
    fn records_the_evaluation_count() {
        let config = Config { subdivisions: 10 };
        let rectangle = integrate(&SineModel, &Direct, [0.0, 1.0], Rule::MidRectangle, &config)
            .expect("should integrate");
        let trapezoid = integrate(&SineModel, &Direct, [0.0, 1.0], Rule::Trapezoidal, &config)
            .expect("should integrate");

        assert_eq!(rectangle.evaluations, 10);
        assert_eq!(trapezoid.evaluations, 11);
    }

    #[test]
    fn errors_on_empty_grid() {
        let config = Config { subdivisions: 0 };
        let result = integrate(&SineModel, &Direct, [0.0, 1.0], Rule::Trapezoidal, &config);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn errors_on_non_finite_bound() {
        let result = integrate(
            &SineModel,
            &Direct,
            [0.0, f64::INFINITY],
            Rule::Trapezoidal,
            &Config::default(),
        );
        assert!(matches!(result, Err(Error::NonFiniteBound { .. })));
    }

    #[test]
    fn errors_on_non_finite_sample() {
        // The left-edge grid samples x = 0, where the integrand blows up.
        let result = integrate(
            &ReciprocalModel,
            &Direct,
            [0.0, 1.0],
            Rule::LeftRectangle,
            &Config::default(),
        );
        assert!(matches!(result, Err(Error::NonFiniteSample { .. })));
    }
}
