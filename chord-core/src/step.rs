/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the fixed-step solvers advance the type
/// via `derivative * delta`, where the derivative is with respect to
/// `Delta`. `Delta` is the independent variable of the problem (time, a
/// spatial coordinate) and can be a plain `f64` or a dimensioned scalar.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a [`StepIntegrable`] type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

/// Scaled-sum arithmetic on derivative types.
///
/// Multi-stage integrators compute several stage derivatives per step and
/// advance the state with a weighted combination of them. Implementing
/// this trait alongside [`StepIntegrable`] enables those solvers for a
/// state's derivative type.
pub trait StageArithmetic: Clone {
    /// Returns the derivative scaled by a factor.
    #[must_use]
    fn scaled(&self, factor: f64) -> Self;

    /// Returns the sum of this derivative and another.
    #[must_use]
    fn plus(&self, other: &Self) -> Self;
}

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

impl StageArithmetic for f64 {
    fn scaled(&self, factor: f64) -> Self {
        self * factor
    }

    fn plus(&self, other: &Self) -> Self {
        self + other
    }
}
