//! `flu-core` — foundational types for the `flightsir` epidemic model.
//!
//! This crate is a dependency of every other `flu-*` crate.  It has no
//! `flu-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `AirportId`, `RouteId`                                |
//! | [`state`]  | `InfectionState`, `StateCounts` (per-step snapshot)   |
//! | [`time`]   | `Tick`                                                |
//! | [`params`] | `SirParams` (probabilities, seed, step count)         |
//! | [`rng`]    | `RandomSource` trait, `SimRng` (seeded default)       |
//! | [`error`]  | `FluError`, `FluResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod state;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FluError, FluResult};
pub use ids::{AirportId, RouteId};
pub use params::SirParams;
pub use rng::{RandomSource, SimRng};
pub use state::{InfectionState, StateCounts};
pub use time::Tick;
