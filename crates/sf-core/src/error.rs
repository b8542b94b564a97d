//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `SfError` as one variant
//! via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

/// The top-level error type for `sf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SfError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sf-*` crates.
pub type SfResult<T> = Result<T, SfError>;
