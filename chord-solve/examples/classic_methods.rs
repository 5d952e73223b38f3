//! Runs every solver on the classic reference problems: the root of
//! `x³ − x − 1`, the integral of `sin` over `[0, π]`, and the initial
//! value problem `dy/dx = x + y` with `y(0) = 1`.

use std::convert::Infallible;
use std::f64::consts::PI;

use chord_core::{DifferentiableProblem, EquationProblem, IntegrandProblem, Model, OdeProblem};
use chord_solve::{
    equation::{bisection, newton},
    quadrature::{self, Rule},
    transient::{euler, rk4},
};

/// Evaluates `x³ − x − 1`.
struct Cubic;

impl Model for Cubic {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok(input.powi(3) - input - 1.0)
    }
}

/// Finds the zero of the cubic.
struct CubicRoot;

impl EquationProblem for CubicRoot {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: f64) -> Result<f64, Infallible> {
        Ok(x)
    }

    fn residual(&self, _input: &f64, output: &f64) -> Result<f64, Infallible> {
        Ok(*output)
    }
}

impl DifferentiableProblem for CubicRoot {
    fn residual_derivative(&self, x: f64) -> Result<f64, Infallible> {
        Ok(3.0 * x * x - 1.0)
    }
}

/// Evaluates `sin(x)`.
struct Sine;

impl Model for Sine {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok(input.sin())
    }
}

/// Integrates the sine output directly.
struct SineIntegrand;

impl IntegrandProblem for SineIntegrand {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: f64) -> Result<f64, Infallible> {
        Ok(x)
    }

    fn integrand(&self, _input: &f64, output: &f64) -> Result<f64, Infallible> {
        Ok(*output)
    }
}

/// A point on the solution curve of the initial value problem.
#[derive(Debug, Clone, Copy)]
struct Point {
    x: f64,
    y: f64,
}

/// Evaluates the slope field `dy/dx = x + y`.
struct SlopeField;

impl Model for SlopeField {
    type Input = Point;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Point) -> Result<f64, Infallible> {
        Ok(input.x + input.y)
    }
}

/// Integrates `y` along `x`.
struct Growth;

impl OdeProblem for Growth {
    type Input = Point;
    type Output = f64;
    type Delta = f64;
    type State = f64;
    type Error = Infallible;

    fn state(&self, input: &Point) -> Result<f64, Infallible> {
        Ok(input.y)
    }

    fn derivative(&self, _input: &Point, output: &f64) -> Result<f64, Infallible> {
        Ok(*output)
    }

    fn next_input(&self, base: &Point, state: &f64, delta: &f64) -> Result<Point, Infallible> {
        Ok(Point {
            x: base.x + delta,
            y: *state,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("== Root of x³ − x − 1 ==");

    let solution = bisection::solve_unobserved(
        &Cubic,
        &CubicRoot,
        [1.0, 2.0],
        &bisection::Config::default(),
    )?;
    println!(
        "bisection      x = {:.10}  ({} iterations, {:?})",
        solution.x, solution.iters, solution.status
    );

    let config = newton::Config {
        residual_tol: 1e-10,
        ..newton::Config::default()
    };
    let solution = newton::solve_unobserved(&Cubic, &CubicRoot, 1.5, &config)?;
    println!(
        "newton         x = {:.10}  ({} iterations, {:?})",
        solution.x, solution.iters, solution.status
    );

    let solution = newton::solve_unobserved(&Cubic, &CubicRoot, 1.5, &config.frozen())?;
    println!(
        "frozen newton  x = {:.10}  ({} iterations, {:?})",
        solution.x, solution.iters, solution.status
    );

    println!();
    println!("== ∫ sin x dx over [0, π]  (exact: 2) ==");

    for rule in [Rule::LeftRectangle, Rule::Trapezoidal, Rule::MidRectangle] {
        let estimate = quadrature::integrate(
            &Sine,
            &SineIntegrand,
            [0.0, PI],
            rule,
            &quadrature::Config::default(),
        )?;
        println!(
            "{:<14} {:.8}  (error {:+.2e})",
            format!("{rule:?}"),
            estimate.value,
            estimate.value - 2.0
        );
    }

    println!();
    println!("== dy/dx = x + y, y(0) = 1, h = 0.1, 10 steps ==");

    // Exact solution: y = 2eˣ − x − 1.
    let exact = 2.0 * 1.0_f64.exp() - 1.0 - 1.0;
    let initial = Point { x: 0.0, y: 1.0 };

    let solution = euler::solve_unobserved(&SlopeField, &Growth, initial, 0.1, 10)?;
    let end = solution.history.last().expect("history includes the initial state");
    println!(
        "euler  y({:.1}) = {:.6}  (error {:+.2e})",
        end.input.x,
        end.input.y,
        end.input.y - exact
    );

    let solution = rk4::solve_unobserved(&SlopeField, &Growth, initial, 0.1, 10)?;
    let end = solution.history.last().expect("history includes the initial state");
    println!(
        "rk4    y({:.1}) = {:.6}  (error {:+.2e})",
        end.input.x,
        end.input.y,
        end.input.y - exact
    );

    println!("exact  y(1.0) = {exact:.6}");

    Ok(())
}
