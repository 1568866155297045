//! Injectable randomness for the simulation.
//!
//! The simulation draws random numbers in exactly two places: the bin fill
//! increment of every harvesting tick, and the cart's unload duration on each
//! arrival.  Both go through the [`RandomSource`] trait so a run can be driven
//! by a seeded [`SimRng`] in production or by a [`ConstantSource`] in tests
//! that need a fully deterministic timeline.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed samples.
pub trait RandomSource {
    /// Draw a sample uniformly from the closed interval `[low, high]`.
    ///
    /// Implementations must return `low` when `low == high`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    #[inline]
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded simulation RNG.  The same seed always produces the same run.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.0.gen_range(low..=high)
    }
}

// ── ConstantSource ────────────────────────────────────────────────────────────

/// A deterministic source that always returns the same relative position in
/// the requested interval.
///
/// `ConstantSource(1.0)` always yields `high`, `ConstantSource(0.0)` always
/// yields `low`, `ConstantSource(0.5)` the midpoint.  The fraction is clamped
/// to `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantSource(pub f64);

impl ConstantSource {
    /// Always sample the upper bound.
    pub const MAX: ConstantSource = ConstantSource(1.0);
    /// Always sample the lower bound.
    pub const MIN: ConstantSource = ConstantSource(0.0);
}

impl RandomSource for ConstantSource {
    #[inline]
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        let t = self.0.clamp(0.0, 1.0);
        if t == 1.0 {
            // Avoid `low + (high - low)` rounding away from `high`.
            return high;
        }
        low + t * (high - low)
    }
}
