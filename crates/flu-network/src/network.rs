//! Code-addressed flight network.
//!
//! # Data layout
//!
//! Two insertion-ordered maps keyed by airport code:
//!
//! ```text
//! airports: code → Airport { code, state }
//! flights:  source code → [destination code, …]
//! ```
//!
//! The airport map's position doubles as the airport's [`AirportId`]: the
//! first airport added is `AirportId(0)`, and so on.  Flights are stored by
//! code and may name airports that do not exist yet; [`FlightNetwork::validate`]
//! (and [`RouteTable::compile`](crate::RouteTable::compile), which the
//! simulation builder calls) rejects such dangling flights before a run.

use indexmap::IndexMap;

use flu_core::{AirportId, InfectionState, StateCounts};

use crate::{NetworkError, NetworkResult};

#[cfg(feature = "fx-hash")]
type CodeMap<V> = IndexMap<String, V, rustc_hash::FxBuildHasher>;
#[cfg(not(feature = "fx-hash"))]
type CodeMap<V> = IndexMap<String, V>;

// ── Airport ───────────────────────────────────────────────────────────────────

/// A node of the flight network: an airport code and its disease state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airport {
    code:  String,
    state: InfectionState,
}

impl Airport {
    fn new(code: String) -> Self {
        Self { code, state: InfectionState::Susceptible }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn state(&self) -> InfectionState {
        self.state
    }
}

// ── FlightNetwork ─────────────────────────────────────────────────────────────

/// Directed graph of airports and flights.
///
/// Build it, seed one or more airports with
/// [`seed_infection`](Self::seed_infection), then hand it to
/// `flu_sim::SimBuilder`.  From then on the simulation owns the network and
/// is the only thing that changes airport states.
///
/// `FlightNetwork` is `Clone`: Monte Carlo replicates each run on their own
/// copy.
///
/// # Example
///
/// ```
/// use flu_core::InfectionState;
/// use flu_network::FlightNetwork;
///
/// let mut net = FlightNetwork::new();
/// net.add_airport("ATL");
/// net.add_airport("JFK");
/// net.add_flight("ATL", "JFK");
/// net.seed_infection("ATL").unwrap();
/// assert_eq!(net.state_of("ATL"), Some(InfectionState::Infected));
/// assert!(net.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightNetwork {
    airports: CodeMap<Airport>,
    flights:  CodeMap<Vec<String>>,
}

impl FlightNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Add an airport in the susceptible state and return its `AirportId`.
    ///
    /// Re-adding an existing code resets that airport to susceptible.  It
    /// keeps its original position (and therefore its `AirportId`) and its
    /// outgoing flights.
    pub fn add_airport(&mut self, code: impl Into<String>) -> AirportId {
        let code = code.into();
        let (index, previous) = self.airports.insert_full(code.clone(), Airport::new(code));
        if let Some(previous) = previous {
            tracing::debug!(
                code = %previous.code,
                previous_state = %previous.state,
                "re-added airport reset to susceptible"
            );
        }
        AirportId(index as u32)
    }

    /// Add a **directed** flight from `src` to `dst`.
    ///
    /// Neither endpoint has to exist yet.  Adding the same flight twice
    /// records it twice.
    pub fn add_flight(&mut self, src: impl Into<String>, dst: impl Into<String>) {
        self.flights.entry(src.into()).or_default().push(dst.into());
    }

    /// Convenience: add flights in **both directions** between `a` and `b`.
    pub fn add_round_trip(&mut self, a: &str, b: &str) {
        self.add_flight(a, b);
        self.add_flight(b, a);
    }

    /// Mark an existing airport as infected before the run starts.
    ///
    /// Seeding an already infected airport is a no-op.
    pub fn seed_infection(&mut self, code: &str) -> NetworkResult<()> {
        let airport = self
            .airports
            .get_mut(code)
            .ok_or_else(|| NetworkError::AirportNotFound(code.to_owned()))?;
        if airport.state.is_recovered() {
            return Err(NetworkError::AlreadyRecovered(code.to_owned()));
        }
        airport.state = InfectionState::Infected;
        Ok(())
    }

    /// Check that every flight connects two known airports.
    ///
    /// Reports the first offending flight in insertion order (sources in the
    /// order their first flight was added, then destinations in order).
    pub fn validate(&self) -> NetworkResult<()> {
        for (src, dst) in self.flights() {
            for code in [src, dst] {
                if !self.airports.contains_key(code) {
                    return Err(NetworkError::UnknownAirport {
                        from:    src.to_owned(),
                        to:      dst.to_owned(),
                        missing: code.to_owned(),
                    });
                }
            }
        }
        Ok(())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Total number of directed flights, duplicates included.
    pub fn flight_count(&self) -> usize {
        self.flights.values().map(Vec::len).sum()
    }

    // ── Lookup by code ────────────────────────────────────────────────────

    pub fn contains(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn state_of(&self, code: &str) -> Option<InfectionState> {
        self.airports.get(code).map(Airport::state)
    }

    pub fn id_of(&self, code: &str) -> Option<AirportId> {
        self.airports.get_index_of(code).map(|i| AirportId(i as u32))
    }

    /// Destinations of `code`'s outgoing flights, in the order added.
    pub fn flights_from(&self, code: &str) -> &[String] {
        self.flights.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    // ── Lookup by id ──────────────────────────────────────────────────────

    pub fn airport_at(&self, id: AirportId) -> Option<&Airport> {
        self.airports.get_index(id.index()).map(|(_, a)| a)
    }

    /// State of the airport at `id`.
    ///
    /// # Panics
    /// Panics if `id` is out of range.
    #[inline]
    pub fn state_at(&self, id: AirportId) -> InfectionState {
        self.airports[id.index()].state
    }

    /// Move the airport at `id` to `next`.
    ///
    /// This is the single mutation point for airport states once a run is
    /// under way.
    ///
    /// # Panics
    /// Panics if `id` is out of range or the move is not a legal
    /// S → I → R transition.  Either is a bug in the caller.
    pub fn transition(&mut self, id: AirportId, next: InfectionState) {
        let airport = &mut self.airports[id.index()];
        assert!(
            airport.state.can_transition_to(next),
            "illegal transition {} -> {} for airport {}",
            airport.state,
            next,
            airport.code,
        );
        airport.state = next;
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// All airports in insertion order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> + '_ {
        self.airports.values()
    }

    /// Every flight as `(source, destination)`, grouped by source in the
    /// order sources first appeared, destinations in the order added.
    pub fn flights(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.flights
            .iter()
            .flat_map(|(src, dsts)| dsts.iter().map(move |dst| (src.as_str(), dst.as_str())))
    }

    /// Codes of the airports currently in `state`, in insertion order.
    pub fn codes_in(&self, state: InfectionState) -> impl Iterator<Item = &str> + '_ {
        self.airports
            .values()
            .filter(move |a| a.state == state)
            .map(Airport::code)
    }

    /// Tally the current state of every airport.
    pub fn count_states(&self) -> StateCounts {
        StateCounts::tally(self.airports.values().map(Airport::state))
    }
}
