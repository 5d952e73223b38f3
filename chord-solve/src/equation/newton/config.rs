use thiserror::Error;

/// Controls how often the Newton solver refreshes the residual derivative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DerivativeMode {
    /// Re-evaluate the derivative at every iterate.
    #[default]
    Refreshed,

    /// Evaluate the derivative once at the starting point and reuse it for
    /// every step.
    ///
    /// This trades quadratic convergence for a single derivative
    /// evaluation. The frozen slope is checked once, so a derivative that
    /// becomes zero away from the start cannot fail the solve.
    Frozen,
}

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub max_iters: usize,
    pub residual_tol: f64,
    pub derivative: DerivativeMode,
}

/// Errors that can occur when validating a Newton config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-12,
            derivative: DerivativeMode::Refreshed,
        }
    }
}

impl Config {
    /// Returns this config with the frozen-derivative variant selected.
    #[must_use]
    pub fn frozen(self) -> Self {
        Self {
            derivative: DerivativeMode::Frozen,
            ..self
        }
    }

    /// Validates the configured tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        Ok(())
    }
}
