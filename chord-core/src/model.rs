/// A callable model that maps an input to an output.
///
/// Models are the functions a solver drives: a residual function for root
/// finding, an integrand for quadrature, a slope field for transient
/// integration. A solver may call the model many times per solve, so
/// implementations should be pure with respect to their input: the same
/// input yields the same output, with no side effects beyond the
/// computation itself.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
///
/// Solvers hand snapshots back to the caller so the model state behind a
/// reported result can be inspected without re-evaluating the model.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
