//! The `Sim` struct and its tick loop.

use hv_agents::{CartProgress, Harvester, TransportCart};
use hv_core::{RandomSource, SimClock, SimConfig, Tick};
use hv_telemetry::TelemetrySink;
use tracing::{debug, info};

use crate::{ApproachStage, SimError, SimObserver, SimResult, SimState, TickState};

/// The field run coordinator.
///
/// `Sim<S, G>` owns both vehicles, the telemetry sink `S` and the random
/// source `G`, and applies one state transition per tick:
///
/// 1. **Harvesting**: advance the harvester, send its snapshot to the sink;
///    on alert dispatch the cart, halt the harvester, → `CartApproaching`.
/// 2. **CartApproaching(EnRoute)**: step the cart toward the harvester; on
///    arrival start the unload countdown (or finish at once if it is zero).
/// 3. **CartApproaching(Unloading)**: count down; on the last tick empty the
///    bin and → `CartReturning`.
/// 4. **CartReturning**: step the cart home; once home resume the harvester
///    and → `Harvesting`.
///
/// Agents are exposed read-only.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: TelemetrySink, G: RandomSource> {
    pub(crate) config:         SimConfig,
    pub(crate) clock:          SimClock,
    pub(crate) harvester:      Harvester,
    pub(crate) cart:           TransportCart,
    pub(crate) sink:           S,
    pub(crate) rng:            G,
    pub(crate) state:          SimState,
    pub(crate) service_cycles: u64,
}

impl<S: TelemetrySink, G: RandomSource> Sim<S, G> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick until `config.total_ticks` have elapsed.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(
            ticks = self.clock.current_tick.0,
            service_cycles = self.service_cycles,
            rows = self.harvester.row_index(),
            "run complete"
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `total_ticks`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    /// Advance exactly one tick and return the resulting state bundle.
    pub fn step(&mut self) -> SimResult<TickState> {
        let now = self.clock.advance();
        match self.state {
            SimState::Harvesting => self.harvest(now)?,
            SimState::CartApproaching(ApproachStage::EnRoute) => self.approach(now)?,
            SimState::CartApproaching(ApproachStage::Unloading { ticks_remaining }) => {
                self.count_down_unload(now, ticks_remaining)
            }
            SimState::CartReturning => self.return_home(now)?,
        }
        if cfg!(debug_assertions) {
            self.check_invariants()?;
        }
        Ok(self.tick_state())
    }

    /// The state bundle for the last completed tick.
    pub fn tick_state(&self) -> TickState {
        TickState {
            tick:               self.clock.current_tick,
            harvester_position: self.harvester.position(),
            bin_fill_ratio:     self.harvester.bin_fill_ratio(),
            cart_position:      self.cart.position(),
            cart_mode:          self.cart.mode(),
            state:              self.state,
        }
    }

    /// Verify the cross-agent invariants.
    ///
    /// - `0 ≤ bin_level ≤ bin_capacity`
    /// - the cart mode matches the coordinator state
    /// - the harvester is halted iff the cart is not idle
    pub fn check_invariants(&self) -> SimResult<()> {
        let tick = self.clock.current_tick;
        let violation = |what: String| Err(SimError::Invariant { tick, what });

        let level = self.harvester.bin_level();
        if !(0.0..=self.harvester.bin_capacity()).contains(&level) {
            return violation(format!(
                "bin level {level} outside [0, {}]",
                self.harvester.bin_capacity()
            ));
        }
        let mode = self.cart.mode();
        if mode != self.state.expected_cart_mode() {
            return violation(format!("cart is {mode} while coordinator is {}", self.state));
        }
        if mode.is_active() != self.harvester.is_halted() {
            return violation(format!(
                "cart is {mode} but harvester halted = {}",
                self.harvester.is_halted()
            ));
        }
        Ok(())
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn state(&self) -> SimState {
        self.state
    }

    #[inline]
    pub fn harvester(&self) -> &Harvester {
        &self.harvester
    }

    #[inline]
    pub fn cart(&self) -> &TransportCart {
        &self.cart
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the simulation and return its telemetry sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Number of cart dispatches so far.
    #[inline]
    pub fn service_cycles(&self) -> u64 {
        self.service_cycles
    }

    // ── Per-state handlers ────────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let before = self.state;
        observer.on_tick_start(self.clock.current_tick + 1);
        let state = self.step()?;
        if state.state != before {
            observer.on_state_change(state.tick, before, state.state);
        }
        observer.on_tick_end(&state);
        Ok(())
    }

    fn harvest(&mut self, now: Tick) -> SimResult<()> {
        let row = self.harvester.row_index();
        let moved = self.harvester.advance_tick(&mut self.rng);
        debug_assert!(moved, "harvester halted while harvesting");
        if self.harvester.row_index() != row {
            debug!(
                tick = %now,
                row = self.harvester.row_index(),
                heading = %self.harvester.heading(),
                "row complete"
            );
        }

        let snapshot = self.harvester.snapshot();
        self.sink.receive(snapshot);

        if snapshot.alert {
            // Fails while a cycle is active: at most one cart in service.
            self.cart.dispatch(self.harvester.heading())?;
            self.harvester.halt();
            self.state = SimState::CartApproaching(ApproachStage::EnRoute);
            self.service_cycles += 1;
            info!(
                tick = %now,
                fill = snapshot.bin_fill_ratio,
                harvester = %snapshot.position,
                "cart dispatched"
            );
        }
        Ok(())
    }

    fn approach(&mut self, now: Tick) -> SimResult<()> {
        let target = self.harvester.position();
        if self.cart.advance_toward(target, &mut self.rng)? == CartProgress::Moved {
            return Ok(());
        }

        let duration = self.cart.service_duration();
        let ticks = self.clock.ticks_for_secs(duration);
        info!(tick = %now, service_secs = duration, service_ticks = ticks, "cart alongside harvester");
        if ticks == 0 {
            self.finish_unload(now);
        } else {
            self.state =
                SimState::CartApproaching(ApproachStage::Unloading { ticks_remaining: ticks });
        }
        Ok(())
    }

    fn count_down_unload(&mut self, now: Tick, ticks_remaining: u64) {
        if ticks_remaining <= 1 {
            self.finish_unload(now);
        } else {
            self.state = SimState::CartApproaching(ApproachStage::Unloading {
                ticks_remaining: ticks_remaining - 1,
            });
        }
    }

    fn finish_unload(&mut self, now: Tick) {
        self.harvester.unload();
        self.state = SimState::CartReturning;
        info!(tick = %now, "unload complete");
    }

    fn return_home(&mut self, now: Tick) -> SimResult<()> {
        if self.cart.advance_return()? == CartProgress::Arrived {
            self.harvester.resume();
            self.state = SimState::Harvesting;
            info!(tick = %now, "cart home, harvester resumed");
        }
        Ok(())
    }
}
