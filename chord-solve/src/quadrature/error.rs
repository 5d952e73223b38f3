use std::error::Error as StdError;

use thiserror::Error;

use super::ConfigError;

/// Errors that can occur while estimating an integral.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("integration bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("non-finite integrand value {value} at x = {x}")]
    NonFiniteSample { x: f64, value: f64 },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(super) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }

    pub(super) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}
