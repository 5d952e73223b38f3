use thiserror::Error;

/// Configuration for the quadrature rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of equal-width subintervals in the grid.
    pub subdivisions: usize,
}

/// Errors that can occur when validating a quadrature config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("subdivisions must be at least 1")]
    Subdivisions,
}

impl Default for Config {
    fn default() -> Self {
        Self { subdivisions: 100 }
    }
}

impl Config {
    /// Validates the grid size.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no subintervals.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subdivisions == 0 {
            return Err(ConfigError::Subdivisions);
        }
        Ok(())
    }
}
