//! The transport cart (boll buggy) agent and its mode state machine.

use std::fmt;

use hv_core::{CartConfig, GeoPoint, Heading, HvError, HvResult, RandomSource};

// ── CartMode ──────────────────────────────────────────────────────────────────

/// What the cart is doing.
///
/// ```text
///   Idle ──dispatch──▶ Approaching ──arrive──▶ Returning ──home──▶ Idle
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CartMode {
    /// Parked at its origin (default state).
    #[default]
    Idle,
    /// Travelling to the harvester.
    Approaching,
    /// Unloaded (or unloading) and travelling back to its origin.
    Returning,
}

impl CartMode {
    /// `true` while a service cycle is in progress.
    #[inline]
    pub fn is_active(self) -> bool {
        !matches!(self, CartMode::Idle)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CartMode::Idle        => "idle",
            CartMode::Approaching => "approaching",
            CartMode::Returning   => "returning",
        }
    }
}

impl fmt::Display for CartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CartProgress ──────────────────────────────────────────────────────────────

/// Outcome of one cart movement call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CartProgress {
    /// The cart took one step toward its target.
    Moved,
    /// The cart was already at its target and changed mode instead of moving.
    Arrived,
}

// ── TransportCart ─────────────────────────────────────────────────────────────

/// The cart that empties the harvester's bin.
///
/// Each movement call moves at most one axis by at most one step, aligning
/// longitude before latitude, in the direction of the remaining coordinate
/// delta.  Steps are clamped so the cart never overshoots its target.
#[derive(Clone, Debug)]
pub struct TransportCart {
    position:                GeoPoint,
    origin:                  GeoPoint,
    mode:                    CartMode,
    travel_direction:        Heading,
    service_duration:        f64,
    step_size:               f64,
    return_speed_multiplier: f64,
    service_duration_min:    f64,
    service_duration_max:    f64,
    arrival_epsilon:         f64,
}

impl TransportCart {
    /// Park an idle cart at `origin`.
    ///
    /// `step_size` is the approach speed in degrees per tick; the return trip
    /// moves `config.return_speed_multiplier` times faster.
    ///
    /// # Errors
    ///
    /// `HvError::InvalidConfiguration` if `config` fails validation, `origin`
    /// is not finite, or `step_size` is not positive.
    pub fn new(origin: GeoPoint, step_size: f64, config: &CartConfig) -> HvResult<Self> {
        config.validate()?;
        if !origin.is_finite() {
            return Err(HvError::InvalidConfiguration(format!(
                "cart origin {origin} is not finite"
            )));
        }
        if !(step_size.is_finite() && step_size > 0.0) {
            return Err(HvError::InvalidConfiguration(format!(
                "cart step_size must be finite and positive, got {step_size}"
            )));
        }
        Ok(Self {
            position: origin,
            origin,
            mode: CartMode::Idle,
            travel_direction: Heading::East,
            service_duration: 0.0,
            step_size,
            return_speed_multiplier: config.return_speed_multiplier,
            service_duration_min: config.service_duration_min,
            service_duration_max: config.service_duration_max,
            arrival_epsilon: config.arrival_epsilon,
        })
    }

    // ── Mode transitions ──────────────────────────────────────────────────

    /// Start a service cycle.  Valid only while `Idle`.
    ///
    /// # Errors
    ///
    /// `HvError::InvalidStateTransition` if a cycle is already in progress.
    pub fn dispatch(&mut self, travel_direction: Heading) -> HvResult<()> {
        self.expect_mode(CartMode::Idle, "dispatch")?;
        self.mode = CartMode::Approaching;
        self.travel_direction = travel_direction;
        Ok(())
    }

    /// Take one step toward `target`.  Valid only while `Approaching`.
    ///
    /// If the cart is already within `arrival_epsilon` of `target` on both
    /// axes it does not move; instead it switches to `Returning`, samples a
    /// new service duration from `rng`, and returns `CartProgress::Arrived`.
    ///
    /// # Errors
    ///
    /// `HvError::InvalidStateTransition` outside `Approaching`.
    pub fn advance_toward<R: RandomSource>(
        &mut self,
        target: GeoPoint,
        rng:    &mut R,
    ) -> HvResult<CartProgress> {
        self.expect_mode(CartMode::Approaching, "advance_toward")?;
        if self.position.step_toward(target, self.step_size, self.arrival_epsilon) {
            return Ok(CartProgress::Moved);
        }
        self.mode = CartMode::Returning;
        self.service_duration =
            rng.uniform(self.service_duration_min, self.service_duration_max);
        Ok(CartProgress::Arrived)
    }

    /// Take one accelerated step back toward the origin.  Valid only while
    /// `Returning`.
    ///
    /// Once within `arrival_epsilon` of the origin the cart snaps exactly
    /// onto it, becomes `Idle`, and returns `CartProgress::Arrived`.
    ///
    /// # Errors
    ///
    /// `HvError::InvalidStateTransition` outside `Returning`.
    pub fn advance_return(&mut self) -> HvResult<CartProgress> {
        self.expect_mode(CartMode::Returning, "advance_return")?;
        let speed = self.step_size * self.return_speed_multiplier;
        if self.position.step_toward(self.origin, speed, self.arrival_epsilon) {
            return Ok(CartProgress::Moved);
        }
        self.position = self.origin;
        self.mode = CartMode::Idle;
        Ok(CartProgress::Arrived)
    }

    // ── Read-only state ───────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    #[inline]
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    #[inline]
    pub fn mode(&self) -> CartMode {
        self.mode
    }

    /// The harvester heading recorded at the last dispatch.
    #[inline]
    pub fn travel_direction(&self) -> Heading {
        self.travel_direction
    }

    /// Unload time in seconds sampled at the last arrival.
    #[inline]
    pub fn service_duration(&self) -> f64 {
        self.service_duration
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn expect_mode(&self, expected: CartMode, operation: &'static str) -> HvResult<()> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(HvError::InvalidStateTransition {
                operation,
                mode: self.mode.as_str(),
            })
        }
    }
}
