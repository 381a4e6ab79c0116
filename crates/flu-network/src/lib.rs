//! `flu-network` — the flight network an epidemic spreads over.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `FlightNetwork` (code-addressed, insertion-ordered), `Airport` |
//! | [`routes`]  | `RouteTable` (CSR over dense `AirportId`s)                  |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Ordering contract
//!
//! Airports iterate in the order they were first added; re-adding a code
//! keeps its slot.  Each airport's outgoing flights iterate in the order they
//! were added, duplicates included.  The simulation engine's per-step scan
//! depends on both orders.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Uses FxHash for the code-keyed maps.                       |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.         |

pub mod error;
pub mod network;
pub mod routes;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use network::{Airport, FlightNetwork};
pub use routes::RouteTable;
