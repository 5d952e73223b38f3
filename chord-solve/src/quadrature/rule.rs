/// A fixed-grid quadrature rule.
///
/// Each rule splits the interval into `n` equal-width subintervals and
/// forms a weighted sum of integrand samples. Error shrinks as the grid
/// refines: first order in the subinterval width for `LeftRectangle`,
/// second order for `Trapezoidal` and `MidRectangle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Samples the left edge of each subinterval.
    LeftRectangle,
    /// Samples every grid point, with half weights at both ends.
    Trapezoidal,
    /// Samples the midpoint of each subinterval.
    MidRectangle,
}

impl Rule {
    /// Returns the number of integrand evaluations for `n` subdivisions.
    #[must_use]
    pub fn evaluations(&self, subdivisions: usize) -> usize {
        match self {
            Rule::LeftRectangle | Rule::MidRectangle => subdivisions,
            Rule::Trapezoidal => subdivisions + 1,
        }
    }
}
