use flu_core::FluError;
use flu_network::NetworkError;
use thiserror::Error;

/// Configuration errors surfaced by [`SimBuilder::build`](crate::SimBuilder::build).
///
/// A built simulation cannot fail: every step runs over a validated network
/// with validated parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid simulation parameters: {0}")]
    Config(#[from] FluError),

    #[error("malformed flight network: {0}")]
    Network(#[from] NetworkError),
}

pub type SimResult<T> = Result<T, SimError>;
