//! Environment error type.

use thiserror::Error;

/// Errors produced by `sf-env`.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("{kind} #{index} has a non-finite coordinate")]
    NonFinite { kind: &'static str, index: usize },

    #[error("wall #{0} is a box with min > max")]
    InvertedBox(usize),

    #[error("navigator stopping distance must be non-negative, got {0}")]
    StoppingDistance(f32),
}

pub type EnvResult<T> = Result<T, EnvError>;
