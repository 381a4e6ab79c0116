//! Network error type.

use thiserror::Error;

/// Errors produced by `flu-network`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("airport {0:?} not found in network")]
    AirportNotFound(String),

    /// A flight whose source or destination was never added as an airport.
    #[error("flight {from} -> {to} references unknown airport {missing:?}")]
    UnknownAirport {
        from:    String,
        to:      String,
        missing: String,
    },

    #[error("airport {0:?} has recovered and cannot be seeded")]
    AlreadyRecovered(String),

    #[error("{what} count {count} exceeds the u32 id space")]
    TooLarge { what: &'static str, count: usize },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
