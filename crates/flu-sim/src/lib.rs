//! `flu-sim` — the step engine of the flightsir epidemic model.
//!
//! # Two-phase step
//!
//! ```text
//! for each step:
//!   ① Scan     — airports in insertion order; for every INFECTED airport:
//!                  a. each SUSCEPTIBLE destination (flight order): one draw,
//!                     u < infection_chance → mark pending
//!                  b. one draw, u < recovery_chance → RECOVERED now
//!   ② Apply    — every pending airport still SUSCEPTIBLE → INFECTED
//!   ③ Record   — tally S/I/R over all airports, append to history
//! ```
//!
//! Infections marked in ① only take effect in ②, so an infection travels at
//! most one flight per step.  Recoveries take effect immediately, so an
//! airport that recovers early in the scan is no longer a susceptible target
//! for airports scanned after it, while its own infections marked in ①a
//! still stand.
//!
//! # Quick-start
//!
//! ```
//! use flu_core::SirParams;
//! use flu_network::FlightNetwork;
//! use flu_sim::SimBuilder;
//!
//! let mut net = FlightNetwork::new();
//! for code in ["ATL", "JFK", "LAX"] {
//!     net.add_airport(code);
//! }
//! net.add_flight("ATL", "JFK");
//! net.add_flight("JFK", "LAX");
//! net.seed_infection("ATL").unwrap();
//!
//! let mut sim = SimBuilder::new(net, SirParams::new(0.4, 0.2).with_seed(7))
//!     .build()
//!     .unwrap();
//! sim.run(20);
//! assert_eq!(sim.history().len(), 20);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulation;
