//! Injectable randomness for the transition rule.
//!
//! The engine never touches a process-wide generator.  Every uniform draw it
//! makes goes through a [`RandomSource`] handed to the simulation at build
//! time, so a run is fully determined by its network, its parameters, and
//! the source's seed.
//!
//! [`SimRng`] is the default source: a `SmallRng` seeded from a `u64`.
//! Tests inject their own sources to script exact draw sequences.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// A stream of independent uniform draws in `[0, 1)`.
///
/// Implementations must return values with `0.0 <= u < 1.0`; the engine
/// compares draws with a strict `<` against each probability, so a chance of
/// `1.0` always fires and a chance of `0.0` never does.
pub trait RandomSource {
    /// Draw the next uniform value in `[0, 1)`.
    fn uniform(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    #[inline]
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    #[inline]
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded simulation RNG.  Used only in single-threaded contexts.
///
/// For independent Monte Carlo replicates derive one source per run with
/// [`for_replicate`](Self::for_replicate) rather than sharing one generator
/// between simulations.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from a root seed and a replicate index.
    ///
    /// Consecutive indices are spread across the seed space, so replicate
    /// `k` always sees the same stream no matter how many replicates run.
    pub fn for_replicate(root_seed: u64, replicate: u64) -> Self {
        SimRng::new(root_seed ^ replicate.wrapping_mul(MIXING_CONSTANT))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn uniform(&mut self) -> f64 {
        // `Standard` for f64 samples [0, 1) with 53 bits of precision.
        self.0.r#gen::<f64>()
    }
}
