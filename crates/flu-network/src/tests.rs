//! Unit tests for flu-network.
//!
//! All tests use hand-built networks of a handful of airports.

#[cfg(test)]
mod helpers {
    use crate::FlightNetwork;

    /// The five-airport ring: ATL → JFK → LAX → SFO → MIA → ATL.
    pub fn ring() -> FlightNetwork {
        let mut net = FlightNetwork::new();
        for code in ["ATL", "JFK", "LAX", "MIA", "SFO"] {
            net.add_airport(code);
        }
        net.add_flight("ATL", "JFK");
        net.add_flight("JFK", "LAX");
        net.add_flight("LAX", "SFO");
        net.add_flight("SFO", "MIA");
        net.add_flight("MIA", "ATL");
        net
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use flu_core::{AirportId, InfectionState};

    use crate::FlightNetwork;

    #[test]
    fn empty_network() {
        let net = FlightNetwork::new();
        assert_eq!(net.len(), 0);
        assert_eq!(net.flight_count(), 0);
        assert!(net.is_empty());
        assert!(net.validate().is_ok());
    }

    #[test]
    fn airports_start_susceptible() {
        let net = super::helpers::ring();
        assert_eq!(net.len(), 5);
        assert!(net.airports().all(|a| a.state() == InfectionState::Susceptible));
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut net = FlightNetwork::new();
        assert_eq!(net.add_airport("ZRH"), AirportId(0));
        assert_eq!(net.add_airport("AMS"), AirportId(1));
        assert_eq!(net.id_of("AMS"), Some(AirportId(1)));
        assert_eq!(net.airport_at(AirportId(0)).unwrap().code(), "ZRH");
        let codes: Vec<_> = net.airports().map(|a| a.code()).collect();
        assert_eq!(codes, ["ZRH", "AMS"]);
    }

    #[test]
    fn re_adding_resets_state_and_keeps_slot() {
        let mut net = super::helpers::ring();
        net.seed_infection("LAX").unwrap();
        let id = net.add_airport("LAX");
        assert_eq!(id, AirportId(2));
        assert_eq!(net.len(), 5);
        assert_eq!(net.state_of("LAX"), Some(InfectionState::Susceptible));
        assert_eq!(net.flights_from("LAX"), ["SFO"]);
    }

    #[test]
    fn duplicate_flights_are_kept() {
        let mut net = super::helpers::ring();
        net.add_flight("ATL", "JFK");
        net.add_flight("ATL", "MIA");
        assert_eq!(net.flights_from("ATL"), ["JFK", "JFK", "MIA"]);
        assert_eq!(net.flight_count(), 7);
    }

    #[test]
    fn flights_are_directed() {
        let net = super::helpers::ring();
        assert_eq!(net.flights_from("ATL"), ["JFK"]);
        assert!(!net.flights_from("JFK").contains(&"ATL".to_owned()));
    }

    #[test]
    fn round_trip_adds_both_directions() {
        let mut net = FlightNetwork::new();
        net.add_airport("A");
        net.add_airport("B");
        net.add_round_trip("A", "B");
        assert_eq!(net.flights_from("A"), ["B"]);
        assert_eq!(net.flights_from("B"), ["A"]);
    }

    #[test]
    fn unknown_source_has_no_flights() {
        let net = super::helpers::ring();
        assert!(net.flights_from("ORD").is_empty());
    }

    #[test]
    fn flights_iterate_grouped_by_source() {
        let mut net = FlightNetwork::new();
        net.add_flight("B", "C");
        net.add_flight("A", "B");
        net.add_flight("B", "A");
        let flights: Vec<_> = net.flights().collect();
        assert_eq!(flights, [("B", "C"), ("B", "A"), ("A", "B")]);
    }
}

// ── Seeding & state queries ───────────────────────────────────────────────────

#[cfg(test)]
mod seeding {
    use flu_core::{AirportId, InfectionState, StateCounts};

    use crate::NetworkError;

    #[test]
    fn seed_marks_infected() {
        let mut net = super::helpers::ring();
        net.seed_infection("ATL").unwrap();
        assert_eq!(net.state_of("ATL"), Some(InfectionState::Infected));
        assert_eq!(
            net.count_states(),
            StateCounts { susceptible: 4, infected: 1, recovered: 0 }
        );
    }

    #[test]
    fn seeding_twice_is_noop() {
        let mut net = super::helpers::ring();
        net.seed_infection("ATL").unwrap();
        net.seed_infection("ATL").unwrap();
        assert_eq!(net.count_states().infected, 1);
    }

    #[test]
    fn seed_unknown_airport_errors() {
        let mut net = super::helpers::ring();
        assert_eq!(
            net.seed_infection("ORD"),
            Err(NetworkError::AirportNotFound("ORD".into()))
        );
    }

    #[test]
    fn seed_recovered_airport_errors() {
        let mut net = super::helpers::ring();
        let atl = net.id_of("ATL").unwrap();
        net.seed_infection("ATL").unwrap();
        net.transition(atl, InfectionState::Recovered);
        assert_eq!(
            net.seed_infection("ATL"),
            Err(NetworkError::AlreadyRecovered("ATL".into()))
        );
    }

    #[test]
    fn codes_in_state_follow_insertion_order() {
        let mut net = super::helpers::ring();
        net.seed_infection("SFO").unwrap();
        net.seed_infection("JFK").unwrap();
        let infected: Vec<_> = net.codes_in(InfectionState::Infected).collect();
        assert_eq!(infected, ["JFK", "SFO"]);
    }

    #[test]
    fn transition_follows_model() {
        let mut net = super::helpers::ring();
        let id = AirportId(0);
        net.transition(id, InfectionState::Infected);
        net.transition(id, InfectionState::Recovered);
        assert_eq!(net.state_at(id), InfectionState::Recovered);
    }

    #[test]
    #[should_panic(expected = "illegal transition")]
    fn recovered_cannot_be_reinfected() {
        let mut net = super::helpers::ring();
        let id = AirportId(0);
        net.transition(id, InfectionState::Infected);
        net.transition(id, InfectionState::Recovered);
        net.transition(id, InfectionState::Infected);
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use crate::{FlightNetwork, NetworkError};

    #[test]
    fn ring_is_valid() {
        assert!(super::helpers::ring().validate().is_ok());
    }

    #[test]
    fn dangling_destination_is_reported() {
        let mut net = super::helpers::ring();
        net.add_flight("ATL", "ORD");
        assert_eq!(
            net.validate(),
            Err(NetworkError::UnknownAirport {
                from:    "ATL".into(),
                to:      "ORD".into(),
                missing: "ORD".into(),
            })
        );
    }

    #[test]
    fn dangling_source_is_reported() {
        let mut net = super::helpers::ring();
        net.add_flight("DEN", "ATL");
        let err = net.validate().unwrap_err();
        assert!(matches!(err, NetworkError::UnknownAirport { ref missing, .. } if missing == "DEN"));
    }

    #[test]
    fn flight_before_airport_is_fine_once_added() {
        let mut net = FlightNetwork::new();
        net.add_flight("A", "B");
        assert!(net.validate().is_err());
        net.add_airport("A");
        net.add_airport("B");
        assert!(net.validate().is_ok());
    }

    #[test]
    fn error_message_names_missing_code() {
        let mut net = FlightNetwork::new();
        net.add_airport("A");
        net.add_flight("A", "Q");
        let msg = net.validate().unwrap_err().to_string();
        assert!(msg.contains("\"Q\""), "got {msg}");
    }
}

// ── Route table ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod routes {
    use flu_core::AirportId;

    use crate::{FlightNetwork, NetworkError, RouteTable};

    #[test]
    fn compile_ring() {
        let net = super::helpers::ring();
        let table = RouteTable::compile(&net).unwrap();
        assert_eq!(table.airport_count(), 5);
        assert_eq!(table.route_count(), 5);
        // ATL(0) → JFK(1); SFO(4) → MIA(3).
        assert_eq!(table.destinations(AirportId(0)), [AirportId(1)]);
        assert_eq!(table.destinations(AirportId(4)), [AirportId(3)]);
    }

    #[test]
    fn destinations_keep_insertion_order_and_duplicates() {
        let mut net = FlightNetwork::new();
        for code in ["A", "B", "C"] {
            net.add_airport(code);
        }
        net.add_flight("A", "C");
        net.add_flight("A", "B");
        net.add_flight("A", "C");
        let table = RouteTable::compile(&net).unwrap();
        assert_eq!(
            table.destinations(AirportId(0)),
            [AirportId(2), AirportId(1), AirportId(2)]
        );
        assert_eq!(table.out_degree(AirportId(0)), 3);
        assert_eq!(table.out_degree(AirportId(1)), 0);
        assert_eq!(table.out_routes(AirportId(0)).count(), 3);
    }

    #[test]
    fn sources_added_out_of_order_resolve_by_airport_id() {
        let mut net = FlightNetwork::new();
        net.add_flight("B", "A");
        net.add_flight("A", "B");
        net.add_airport("A");
        net.add_airport("B");
        let table = RouteTable::compile(&net).unwrap();
        assert_eq!(table.destinations(AirportId(0)), [AirportId(1)]);
        assert_eq!(table.destinations(AirportId(1)), [AirportId(0)]);
    }

    #[test]
    fn empty_network_compiles() {
        let table = RouteTable::compile(&FlightNetwork::new()).unwrap();
        assert_eq!(table.airport_count(), 0);
        assert_eq!(table.route_count(), 0);
    }

    #[test]
    fn dangling_flight_fails_compile() {
        let mut net = super::helpers::ring();
        net.add_flight("MIA", "BOS");
        assert!(matches!(
            RouteTable::compile(&net),
            Err(NetworkError::UnknownAirport { .. })
        ));
    }
}
