//! Simulation observer trait for progress reporting and data collection.

use hv_core::Tick;

use crate::{SimState, TickState};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers see state by value or shared
/// reference only; they cannot steer the run.
///
/// # Example — service cycle counter
///
/// ```rust,ignore
/// struct Dispatches(u32);
///
/// impl SimObserver for Dispatches {
///     fn on_state_change(&mut self, _tick: Tick, _from: SimState, to: SimState) {
///         if matches!(to, SimState::CartApproaching(ApproachStage::EnRoute)) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each tick is processed.  `tick` is the tick about to run.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick with the state bundle it produced.
    fn on_tick_end(&mut self, _state: &TickState) {}

    /// Called when a tick moved the coordinator to a different state,
    /// including each step of the unload countdown.  Runs before
    /// `on_tick_end` for the same tick.
    fn on_state_change(&mut self, _tick: Tick, _from: SimState, _to: SimState) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
