//! Fluent builder for constructing a [`Simulation`].

use flu_core::{RandomSource, SimRng, SirParams, StateCounts, Tick};
use flu_network::{FlightNetwork, RouteTable};

use crate::{SimResult, Simulation};

/// Fluent builder for [`Simulation<R>`].
///
/// # Required inputs
///
/// - [`FlightNetwork`] — airports, flights, and any seeded infections
/// - [`SirParams`] — infection and recovery chances, seed
///
/// # Optional inputs (have defaults)
///
/// | Method     | Default                       |
/// |------------|-------------------------------|
/// | `.rng(r)`  | `SimRng::new(params.seed)`    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(network, SirParams::new(0.4, 0.2))
///     .rng(SimRng::new(7))
///     .build()?;
/// sim.run(20);
/// ```
pub struct SimBuilder<R: RandomSource = SimRng> {
    network: FlightNetwork,
    params:  SirParams,
    rng:     R,
}

impl SimBuilder<SimRng> {
    /// Create a builder whose random source is seeded from `params.seed`.
    pub fn new(network: FlightNetwork, params: SirParams) -> Self {
        let rng = SimRng::new(params.seed);
        Self { network, params, rng }
    }
}

impl<R: RandomSource> SimBuilder<R> {
    /// Replace the random source.  `params.seed` is ignored afterwards.
    pub fn rng<S: RandomSource>(self, rng: S) -> SimBuilder<S> {
        SimBuilder {
            network: self.network,
            params:  self.params,
            rng,
        }
    }

    /// Validate parameters and network, compile the route table, and return
    /// a ready-to-run [`Simulation`].
    ///
    /// Fails if either chance is outside `[0, 1]` or any flight references
    /// an airport that was never added.
    pub fn build(self) -> SimResult<Simulation<R>> {
        self.params.validate()?;
        let routes = RouteTable::compile(&self.network)?;
        let counts: StateCounts = self.network.count_states();

        tracing::debug!(
            airports = routes.airport_count(),
            routes = routes.route_count(),
            infection_chance = self.params.infection_chance,
            recovery_chance = self.params.recovery_chance,
            seeded = counts.infected,
            "simulation built"
        );

        Ok(Simulation {
            network:          self.network,
            routes,
            infection_chance: self.params.infection_chance,
            recovery_chance:  self.params.recovery_chance,
            time:             Tick::ZERO,
            history:          Vec::new(),
            counts,
            pending:          Vec::new(),
            rng:              self.rng,
        })
    }
}
