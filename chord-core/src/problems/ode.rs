use crate::{DerivativeOf, StepIntegrable};

/// Defines a first-order ODE problem to be integrated.
///
/// An ODE problem extracts a state from model input, computes the state
/// derivative from model input and output, and rebuilds model input from
/// an advanced state and the step that produced it. This lets the
/// fixed-step solvers integrate any model whose state implements
/// [`StepIntegrable`].
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the state from model input.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be extracted from the input.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Computes the derivative of the state from model input and output.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Rebuilds model input from an advanced state.
    ///
    /// `base` is the input the step started from and `delta` is the step
    /// that produced `state`, so implementations advance the independent
    /// variable by the same amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be constructed from the state.
    fn next_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;
}
