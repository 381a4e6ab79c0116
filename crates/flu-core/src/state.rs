//! Compartment states and the per-step aggregate snapshot.
//!
//! # Transition rules
//!
//! ```text
//! Susceptible ──infect──▶ Infected ──recover──▶ Recovered (terminal)
//! ```
//!
//! No other transition exists.  A recovered airport never becomes
//! susceptible or infected again.

use std::fmt;
use std::ops::Index;

// ── InfectionState ────────────────────────────────────────────────────────────

/// Disease state of a single airport.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfectionState {
    /// Not infected.  Default for every newly added airport.
    #[default]
    Susceptible,
    /// Infected and able to transmit along outgoing flights.
    Infected,
    /// Recovered.  Terminal.
    Recovered,
}

impl InfectionState {
    /// All states, in snapshot order.
    pub const ALL: [InfectionState; 3] = [
        InfectionState::Susceptible,
        InfectionState::Infected,
        InfectionState::Recovered,
    ];

    /// Single-letter compartment label (`"S"`, `"I"`, `"R"`).
    pub fn label(self) -> &'static str {
        match self {
            InfectionState::Susceptible => "S",
            InfectionState::Infected    => "I",
            InfectionState::Recovered   => "R",
        }
    }

    /// `true` if moving from `self` to `next` is a legal model transition.
    ///
    /// Staying in the same state is always allowed.
    pub fn can_transition_to(self, next: InfectionState) -> bool {
        use InfectionState::*;
        matches!(
            (self, next),
            (Susceptible, Susceptible)
                | (Susceptible, Infected)
                | (Infected, Infected)
                | (Infected, Recovered)
                | (Recovered, Recovered)
        )
    }

    #[inline]
    pub fn is_susceptible(self) -> bool {
        self == InfectionState::Susceptible
    }

    #[inline]
    pub fn is_infected(self) -> bool {
        self == InfectionState::Infected
    }

    #[inline]
    pub fn is_recovered(self) -> bool {
        self == InfectionState::Recovered
    }
}

impl fmt::Display for InfectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── StateCounts ───────────────────────────────────────────────────────────────

/// Aggregate compartment counts at the end of one step.
///
/// One `StateCounts` is appended to the simulation history per completed
/// step.  `total()` always equals the number of airports in the network.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCounts {
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl StateCounts {
    /// Tally an iterator of states.
    pub fn tally<I>(states: I) -> Self
    where
        I: IntoIterator<Item = InfectionState>,
    {
        let mut counts = StateCounts::default();
        for state in states {
            counts.increment(state);
        }
        counts
    }

    #[inline]
    pub fn increment(&mut self, state: InfectionState) {
        match state {
            InfectionState::Susceptible => self.susceptible += 1,
            InfectionState::Infected    => self.infected += 1,
            InfectionState::Recovered   => self.recovered += 1,
        }
    }

    /// Count for one compartment.
    #[inline]
    pub fn get(&self, state: InfectionState) -> usize {
        self[state]
    }

    /// Sum over all compartments.
    #[inline]
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }

    /// `true` once no airport is infected.  No further transition is
    /// possible from such a snapshot.
    #[inline]
    pub fn is_extinct(&self) -> bool {
        self.infected == 0
    }

    /// `(state, count)` pairs in `S, I, R` order.
    pub fn iter(&self) -> impl Iterator<Item = (InfectionState, usize)> + '_ {
        InfectionState::ALL.into_iter().map(move |s| (s, self[s]))
    }
}

impl Index<InfectionState> for StateCounts {
    type Output = usize;

    fn index(&self, state: InfectionState) -> &usize {
        match state {
            InfectionState::Susceptible => &self.susceptible,
            InfectionState::Infected    => &self.infected,
            InfectionState::Recovered   => &self.recovered,
        }
    }
}

impl fmt::Display for StateCounts {
    /// Renders as `{S: 4, I: 1, R: 0}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{S: {}, I: {}, R: {}}}",
            self.susceptible, self.infected, self.recovered
        )
    }
}
