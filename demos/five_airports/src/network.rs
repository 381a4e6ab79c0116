//! The five-airport ring used by the demo.
//!
//! ```text
//! ATL → JFK → LAX → SFO → MIA → ATL
//! ```

use flu_network::FlightNetwork;

/// Airport codes in insertion order (this is also the per-step scan order).
pub const AIRPORTS: [&str; 5] = ["ATL", "JFK", "LAX", "MIA", "SFO"];

/// Build the ring.  No airport is seeded.
pub fn build_network() -> FlightNetwork {
    let mut net = FlightNetwork::new();
    for code in AIRPORTS {
        net.add_airport(code);
    }

    net.add_flight("ATL", "JFK");
    net.add_flight("JFK", "LAX");
    net.add_flight("LAX", "SFO");
    net.add_flight("SFO", "MIA");
    net.add_flight("MIA", "ATL");
    net
}
