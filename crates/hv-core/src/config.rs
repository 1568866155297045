//! Construction-time configuration.
//!
//! All parameters are fixed when a run is built.  Each struct has a
//! `Default` reproducing the reference field run (a 0.01° wide field near
//! 34.05 N, 118.24 W with a 1000-unit bin) and a `validate()` that rejects
//! values the agents cannot work with.  Typically an application loads a
//! [`RunConfig`] from JSON (with the `serde` feature), applies overrides,
//! and hands the parts to `SimBuilder`.

use crate::{GeoPoint, HvError, HvResult, SimClock, Tick};

// ── FieldConfig ───────────────────────────────────────────────────────────────

/// Harvester and field geometry parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// South-west corner of the field; both vehicles start here.
    pub origin: GeoPoint,

    /// Row length in degrees of longitude.
    pub field_width: f64,

    /// Bin capacity in arbitrary fill units.
    pub bin_capacity: f64,

    /// Distance between adjacent rows in metres.
    pub row_spacing_m: f64,

    /// Bin-fill ratio at which the harvester requests service.  In `(0, 1]`.
    pub trigger_fraction: f64,

    /// Distance covered per harvesting tick, in degrees of longitude.  The
    /// cart uses the same step on its approach.
    pub step_size: f64,

    /// Upper bound of the per-tick fill increment as a fraction of capacity.
    pub max_fill_rate: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            origin:           GeoPoint::new(34.0522, -118.2437),
            field_width:      0.01,
            bin_capacity:     1000.0,
            row_spacing_m:    10.0,
            trigger_fraction: 0.8,
            step_size:        0.00001,
            max_fill_rate:    0.002,
        }
    }
}

impl FieldConfig {
    /// Row spacing converted to degrees of latitude.
    #[inline]
    pub fn row_spacing_deg(&self) -> f64 {
        GeoPoint::meters_to_degrees(self.row_spacing_m)
    }

    /// Number of harvesting steps that make up one row: the first step count
    /// whose travel reaches `field_width`.
    ///
    /// Ratios within `1e-9` of a whole number are not rounded up, so
    /// `0.01 / 0.00001` is 1000 steps despite binary representation error.
    /// Never less than one.
    pub fn steps_per_row(&self) -> u64 {
        ((self.field_width / self.step_size - 1e-9).ceil().max(1.0)) as u64
    }

    pub fn validate(&self) -> HvResult<()> {
        if !self.origin.is_finite() {
            return Err(config_err(format!("origin {} is not finite", self.origin)));
        }
        positive("field_width", self.field_width)?;
        positive("bin_capacity", self.bin_capacity)?;
        positive("row_spacing_m", self.row_spacing_m)?;
        positive("step_size", self.step_size)?;
        if !(self.trigger_fraction > 0.0 && self.trigger_fraction <= 1.0) {
            return Err(config_err(format!(
                "trigger_fraction must be in (0, 1], got {}",
                self.trigger_fraction
            )));
        }
        if !(self.max_fill_rate.is_finite() && self.max_fill_rate >= 0.0) {
            return Err(config_err(format!(
                "max_fill_rate must be finite and non-negative, got {}",
                self.max_fill_rate
            )));
        }
        Ok(())
    }
}

// ── CartConfig ────────────────────────────────────────────────────────────────

/// Transport cart parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CartConfig {
    /// Return-trip speed as a multiple of the approach step.  Default: 3.
    pub return_speed_multiplier: f64,

    /// Lower bound of the sampled unload duration, in seconds.
    pub service_duration_min: f64,

    /// Upper bound of the sampled unload duration, in seconds.
    pub service_duration_max: f64,

    /// Per-axis distance (degrees) at which the cart counts as arrived.
    pub arrival_epsilon: f64,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            return_speed_multiplier: 3.0,
            service_duration_min:    0.5,
            service_duration_max:    1.5,
            arrival_epsilon:         0.00001,
        }
    }
}

impl CartConfig {
    pub fn validate(&self) -> HvResult<()> {
        positive("return_speed_multiplier", self.return_speed_multiplier)?;
        positive("arrival_epsilon", self.arrival_epsilon)?;
        let (lo, hi) = (self.service_duration_min, self.service_duration_max);
        if !(lo.is_finite() && hi.is_finite() && lo >= 0.0 && lo <= hi) {
            return Err(config_err(format!(
                "service duration range [{lo}, {hi}] must be finite with 0 <= min <= max"
            )));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration: length, time resolution, seed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks to simulate.  Default: 2000 frames.
    pub total_ticks: u64,

    /// Simulated seconds per tick.  Default: 0.1.
    pub tick_duration_secs: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:        2000,
            tick_duration_secs: 0.1,
            seed:               42,
        }
    }
}

impl SimConfig {
    /// The last tick of the run (inclusive; ticks are numbered from 1).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    pub fn validate(&self) -> HvResult<()> {
        positive("tick_duration_secs", self.tick_duration_secs)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Everything needed to build one run, in a single loadable document.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    pub sim:   SimConfig,
    pub field: FieldConfig,
    pub cart:  CartConfig,
}

impl RunConfig {
    pub fn validate(&self) -> HvResult<()> {
        self.sim.validate()?;
        self.field.validate()?;
        self.cart.validate()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config_err(msg: String) -> HvError {
    HvError::InvalidConfiguration(msg)
}

fn positive(name: &str, value: f64) -> HvResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(config_err(format!("{name} must be finite and positive, got {value}")))
    }
}
