/// Defines a scalar equation problem to be solved.
///
/// An equation problem maps the solver variable `x` into a model input and
/// computes a residual from the model input and output. Root finders drive
/// that residual toward zero.
pub trait EquationProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps the solver variable into a model input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be constructed from `x`.
    fn input(&self, x: f64) -> Result<Self::Input, Self::Error>;

    /// Computes the residual from model input and output.
    ///
    /// # Errors
    ///
    /// Returns an error if the residual cannot be computed.
    fn residual(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}

/// An equation problem whose residual derivative is available analytically.
///
/// Newton-type solvers evaluate the derivative to form their update step,
/// so an implementation owns both the residual definition and its slope
/// with respect to the solver variable.
pub trait DifferentiableProblem: EquationProblem {
    /// Computes the derivative of the residual with respect to `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivative cannot be computed.
    fn residual_derivative(&self, x: f64) -> Result<f64, Self::Error>;
}
