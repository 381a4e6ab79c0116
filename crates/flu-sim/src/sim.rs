//! The `Simulation` struct and its step loop.

use flu_core::{AirportId, InfectionState, RandomSource, SimRng, SirParams, StateCounts, Tick};
use flu_network::{FlightNetwork, RouteTable};

use crate::{SimBuilder, SimObserver, SimResult};

// ── Simulation ────────────────────────────────────────────────────────────────

/// The SIR step engine.
///
/// `Simulation<R>` owns its flight network and is the only thing that changes
/// airport states once built.  Each [`step`](Self::step) advances the clock
/// by one and appends one [`StateCounts`] snapshot to the history.
///
/// Create via [`SimBuilder`] or [`Simulation::new`].
pub struct Simulation<R: RandomSource = SimRng> {
    pub(crate) network: FlightNetwork,

    /// Flights resolved to `AirportId`s at build time.
    pub(crate) routes: RouteTable,

    pub(crate) infection_chance: f64,
    pub(crate) recovery_chance:  f64,

    /// Completed steps.  `Tick::ZERO` before the first step.
    pub(crate) time: Tick,

    /// One snapshot per completed step, in step order.
    pub(crate) history: Vec<StateCounts>,

    /// Tally of the network as it stands now.  Equal to the last history
    /// entry once at least one step has run.
    pub(crate) counts: StateCounts,

    /// Scratch buffer for infections marked during the scan.  Kept between
    /// steps to reuse its allocation.
    pub(crate) pending: Vec<AirportId>,

    pub(crate) rng: R,
}

impl<R: RandomSource> Simulation<R> {
    /// Build a simulation from bare chances and an explicit random source.
    ///
    /// Shorthand for `SimBuilder::new(..).rng(rng).build()`.
    pub fn new(
        network:          FlightNetwork,
        infection_chance: f64,
        recovery_chance:  f64,
        rng:              R,
    ) -> SimResult<Self> {
        SimBuilder::new(network, SirParams::new(infection_chance, recovery_chance))
            .rng(rng)
            .build()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run exactly `steps` steps.
    ///
    /// There is no early exit: once no airport is infected each remaining
    /// step still appends a (repeated) snapshot, so the history always grows
    /// by `steps`.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Run exactly `steps` steps, calling observer hooks around each one.
    pub fn run_observed<O: SimObserver>(&mut self, steps: u64, observer: &mut O) {
        for _ in 0..steps {
            observer.on_step_start(self.time);
            let counts = self.step();
            observer.on_step_end(self.time, &counts, &self.network);
        }
        observer.on_run_end(self.time);
    }

    /// Advance one step and return the snapshot appended to the history.
    pub fn step(&mut self) -> StateCounts {
        self.time = self.time.next();

        // With nothing infected no transition can fire and no draw is made,
        // so the tally carries over unchanged.
        if !self.counts.is_extinct() {
            self.spread();
            self.counts = self.network.count_states();
        }
        self.history.push(self.counts);

        tracing::debug!(
            tick = self.time.0,
            susceptible = self.counts.susceptible,
            infected = self.counts.infected,
            recovered = self.counts.recovered,
            "step complete"
        );
        self.counts
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn network(&self) -> &FlightNetwork {
        &self.network
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn time(&self) -> Tick {
        self.time
    }

    /// Snapshots of all completed steps, oldest first.  Index `t` holds the
    /// counts at the end of step `t + 1`.
    pub fn history(&self) -> &[StateCounts] {
        &self.history
    }

    /// Counts as of now: the seeded network before the first step, the last
    /// snapshot afterwards.
    pub fn current_counts(&self) -> StateCounts {
        self.counts
    }

    pub fn infection_chance(&self) -> f64 {
        self.infection_chance
    }

    pub fn recovery_chance(&self) -> f64 {
        self.recovery_chance
    }

    /// Codes of the airports currently in `state`, in insertion order.
    pub fn airports_in(&self, state: InfectionState) -> Vec<&str> {
        self.network.codes_in(state).collect()
    }

    /// Give the network back, with its final states.
    pub fn into_network(self) -> FlightNetwork {
        self.network
    }

    // ── Core step processing ──────────────────────────────────────────────

    /// Scan and apply phases of one step.
    fn spread(&mut self) {
        let mut pending = std::mem::take(&mut self.pending);
        pending.clear();

        // ── Phase 1: scan ─────────────────────────────────────────────────
        //
        // Destinations are checked against their state *now*; marks are not
        // visible until phase 2.  Recovery lands immediately.
        for index in 0..self.routes.airport_count() {
            let source = AirportId(index as u32);
            if !self.network.state_at(source).is_infected() {
                continue;
            }

            for &dest in self.routes.destinations(source) {
                if self.network.state_at(dest).is_susceptible()
                    && self.rng.uniform() < self.infection_chance
                {
                    pending.push(dest);
                }
            }

            if self.rng.uniform() < self.recovery_chance {
                self.network.transition(source, InfectionState::Recovered);
                tracing::trace!(tick = self.time.0, airport = %source, "recovered");
            }
        }

        // ── Phase 2: apply ────────────────────────────────────────────────
        //
        // Duplicates (one destination marked by several sources) are
        // skipped by the susceptible check.
        for &dest in &pending {
            if self.network.state_at(dest).is_susceptible() {
                self.network.transition(dest, InfectionState::Infected);
                tracing::trace!(tick = self.time.0, airport = %dest, "infected");
            }
        }

        self.pending = pending;
    }
}
