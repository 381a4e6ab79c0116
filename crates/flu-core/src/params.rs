//! Run parameters.

use crate::{FluError, FluResult};

/// Parameters for one simulation run.
///
/// Typically filled from command-line flags by the driver and handed to
/// `flu_sim::SimBuilder`.  Both chances are per-draw probabilities: one draw
/// per susceptible destination of an infected airport, one draw per infected
/// airport for recovery.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SirParams {
    /// Chance that an infected airport infects one susceptible destination
    /// in a single step.  Default: 0.3.
    pub infection_chance: f64,

    /// Chance that an infected airport recovers in a single step.
    /// Default: 0.1.
    pub recovery_chance: f64,

    /// Master RNG seed.  The same seed always produces identical histories.
    pub seed: u64,

    /// Steps to run.  Default: 20.
    pub steps: u64,
}

impl SirParams {
    pub fn new(infection_chance: f64, recovery_chance: f64) -> Self {
        Self {
            infection_chance,
            recovery_chance,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    /// Check that both chances are probabilities.
    pub fn validate(&self) -> FluResult<()> {
        check_probability("infection_chance", self.infection_chance)?;
        check_probability("recovery_chance", self.recovery_chance)
    }
}

impl Default for SirParams {
    fn default() -> Self {
        Self {
            infection_chance: 0.3,
            recovery_chance:  0.1,
            seed:             42,
            steps:            20,
        }
    }
}

/// `Ok` if `value` is in `[0, 1]`.  `NaN` is rejected.
pub fn check_probability(name: &'static str, value: f64) -> FluResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(FluError::Probability { name, value })
    }
}
