//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! animation frame of the field run; the mapping to simulated seconds lives
//! in `SimClock`:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! Durations expressed in seconds (the cart's unload time) are converted to
//! whole ticks with [`SimClock::ticks_for_secs`], so logical waits are counted
//! down by the tick loop rather than slept through.
//!
//! Ticks are numbered from 1: `Tick::ZERO` means "nothing has happened yet",
//! and the first call to `Sim::step` produces `Tick(1)`.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds per tick.  Default: 0.1 (100 ms animation frames).
    pub tick_duration_secs: f64,
    /// The last completed tick; advanced by `SimClock::advance()`.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: f64) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick and return the new tick.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.current_tick
    }

    /// Elapsed simulated seconds since the start of the run.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.tick_duration_secs
    }

    /// Number of ticks spanning `secs` seconds, rounded up so a wait never ends early.
    ///
    /// Non-positive durations take zero ticks.  Ratios within `1e-9` of a
    /// whole number are not rounded up, so `1.5 s / 0.1 s` is 15 ticks.
    pub fn ticks_for_secs(&self, secs: f64) -> u64 {
        if secs <= 0.0 || self.tick_duration_secs <= 0.0 {
            return 0;
        }
        (secs / self.tick_duration_secs - 1e-9).ceil().max(0.0) as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} s)", self.current_tick, self.elapsed_secs())
    }
}
