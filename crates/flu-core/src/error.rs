//! Model error type.
//!
//! Sub-crates define their own error enums and wrap `FluError` as one
//! variant via `From`, the same way `flu-sim` folds network errors in.

use thiserror::Error;

/// Configuration errors detected before a run starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FluError {
    #[error("{name} must be a probability in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },
}

/// Shorthand result type for all `flu-*` crates.
pub type FluResult<T> = Result<T, FluError>;
