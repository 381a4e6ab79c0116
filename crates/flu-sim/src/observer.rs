//! Simulation observer trait for progress reporting and per-step inspection.

use flu_core::{StateCounts, Tick};
use flu_network::FlightNetwork;

/// Callbacks invoked by [`Simulation::run_observed`][crate::Simulation::run_observed]
/// around every step.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl SimObserver for StepPrinter {
///     fn on_step_end(&mut self, tick: Tick, counts: &StateCounts, _net: &FlightNetwork) {
///         println!("t={}: {counts}", tick.0 - 1);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each step.  `tick` is the clock before the step runs.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after each step with the snapshot just appended to history.
    ///
    /// `tick` is the clock after the step, so the snapshot sits at history
    /// index `tick.0 - 1`.  `network` gives read-only access to per-airport
    /// states.
    fn on_step_end(&mut self, _tick: Tick, _counts: &StateCounts, _network: &FlightNetwork) {}

    /// Called once after the last step of a `run_observed` call.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
