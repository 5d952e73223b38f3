use super::Rule;

/// The result of a quadrature estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Estimated value of the definite integral.
    pub value: f64,
    /// The rule that produced the estimate.
    pub rule: Rule,
    /// Number of equal-width subintervals in the grid.
    pub subdivisions: usize,
    /// Number of integrand evaluations performed.
    pub evaluations: usize,
}
