//! Models and problems shared by the cross-method property tests.

use std::convert::Infallible;

use chord_core::{DifferentiableProblem, EquationProblem, IntegrandProblem, Model, OdeProblem};

/// Evaluates `x³ − x − 1`. Its only real root is near 1.3247.
pub struct Cubic;

impl Model for Cubic {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok(input.powi(3) - input - 1.0)
    }
}

/// Evaluates `x² + 1`, which has no real roots.
pub struct OffsetParabola;

impl Model for OffsetParabola {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok(input * input + 1.0)
    }
}

/// Drives any scalar model's output to zero.
pub struct ZeroResidual;

impl EquationProblem for ZeroResidual {
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

/// Finds the zero of [`Cubic`], with its analytic derivative `3x² − 1`.
pub struct CubicRoot;

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
pub struct Sine;

impl Model for Sine {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok(input.sin())
    }
}

/// Integrates any scalar model's output directly.
pub struct DirectIntegrand;

impl IntegrandProblem for DirectIntegrand {
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

/// A point on the solution curve of an initial value problem.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Evaluates the slope field `dy/dx = x + y`.
pub struct SlopeField;

impl Model for SlopeField {
    type Input = Point;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Point) -> Result<f64, Infallible> {
        Ok(input.x + input.y)
    }
}

/// Integrates `y` along `x`.
pub struct Growth;

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
