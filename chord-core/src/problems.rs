pub mod equation;
pub mod integrand;
pub mod ode;

pub use equation::{DifferentiableProblem, EquationProblem};
pub use integrand::IntegrandProblem;
pub use ode::OdeProblem;
