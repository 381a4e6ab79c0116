//! Compiled, id-addressed route table.
//!
//! # Data layout
//!
//! The table uses **Compressed Sparse Row (CSR)** format for outgoing
//! flights.  Given an `AirportId a`, its destinations occupy the slice:
//!
//! ```text
//! route_to[ airport_out_start[a] .. airport_out_start[a+1] ]
//! ```
//!
//! Unlike a general CSR build there is no sort step: airports are walked in
//! id order and each airport's flights are appended in the order they were
//! added, so the per-source destination order is exactly the flight
//! insertion order.

use flu_core::{AirportId, RouteId};

use crate::{FlightNetwork, NetworkError, NetworkResult};

/// Outgoing flights of every airport, resolved to `AirportId`s.
///
/// Fields are `pub` for direct indexed access on the step loop.  Do not
/// construct directly; use [`RouteTable::compile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    /// CSR row pointer.  Length = `airport_count + 1`.
    pub airport_out_start: Vec<u32>,

    /// Destination of each route, indexed by `RouteId`.
    pub route_to: Vec<AirportId>,
}

impl RouteTable {
    /// Validate `network` and resolve its flights to ids.
    ///
    /// Fails with [`NetworkError::UnknownAirport`] if any flight references
    /// an airport that was never added.
    pub fn compile(network: &FlightNetwork) -> NetworkResult<Self> {
        network.validate()?;

        let airport_count = network.len();
        let route_count = network.flight_count();
        check_u32("airport", airport_count)?;
        check_u32("flight", route_count)?;

        let mut airport_out_start = Vec::with_capacity(airport_count + 1);
        let mut route_to = Vec::with_capacity(route_count);
        airport_out_start.push(0u32);

        for airport in network.airports() {
            for dst in network.flights_from(airport.code()) {
                let id = network.id_of(dst).ok_or_else(|| NetworkError::UnknownAirport {
                    from:    airport.code().to_owned(),
                    to:      dst.clone(),
                    missing: dst.clone(),
                })?;
                route_to.push(id);
            }
            airport_out_start.push(route_to.len() as u32);
        }
        debug_assert_eq!(route_to.len(), route_count);

        tracing::debug!(
            airports = airport_count,
            routes = route_count,
            "compiled route table"
        );

        Ok(Self { airport_out_start, route_to })
    }

    pub fn airport_count(&self) -> usize {
        self.airport_out_start.len() - 1
    }

    pub fn route_count(&self) -> usize {
        self.route_to.len()
    }

    /// Iterator over the `RouteId`s of all outgoing routes from `airport`.
    #[inline]
    pub fn out_routes(&self, airport: AirportId) -> impl Iterator<Item = RouteId> + '_ {
        let start = self.airport_out_start[airport.index()] as usize;
        let end   = self.airport_out_start[airport.index() + 1] as usize;
        (start..end).map(|i| RouteId(i as u32))
    }

    /// Destinations of `airport`'s flights, in insertion order.
    #[inline]
    pub fn destinations(&self, airport: AirportId) -> &[AirportId] {
        let start = self.airport_out_start[airport.index()] as usize;
        let end   = self.airport_out_start[airport.index() + 1] as usize;
        &self.route_to[start..end]
    }

    #[inline]
    pub fn out_degree(&self, airport: AirportId) -> usize {
        self.destinations(airport).len()
    }
}

fn check_u32(what: &'static str, count: usize) -> NetworkResult<()> {
    if u32::try_from(count).is_ok_and(|n| n != u32::MAX) {
        Ok(())
    } else {
        Err(NetworkError::TooLarge { what, count })
    }
}
