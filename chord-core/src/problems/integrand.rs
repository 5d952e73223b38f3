/// Defines a definite-integral problem to be estimated.
///
/// An integrand problem maps a grid point `x` into a model input and
/// extracts the integrand value from the model input and output. A
/// quadrature rule samples the integrand at its grid points and forms a
/// weighted sum of the results.
pub trait IntegrandProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps a grid point into a model input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be constructed from `x`.
    fn input(&self, x: f64) -> Result<Self::Input, Self::Error>;

    /// Extracts the integrand value from model input and output.
    ///
    /// # Errors
    ///
    /// Returns an error if the integrand value cannot be computed.
    fn integrand(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
