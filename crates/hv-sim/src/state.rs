//! Coordinator state and the per-tick state bundle exposed to drivers.

use std::fmt;

use hv_agents::CartMode;
use hv_core::{GeoPoint, Tick};

// ── SimState ──────────────────────────────────────────────────────────────────

/// The coordinator's single authoritative state.
///
/// Cart mode and harvester halt flag are derived from it; they are never
/// tracked independently.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimState {
    /// The harvester works; the cart is parked.
    #[default]
    Harvesting,
    /// The harvester is halted and the cart is on its way or unloading.
    CartApproaching(ApproachStage),
    /// The bin is empty and the cart is driving home; the harvester waits.
    CartReturning,
}

/// Sub-stage of [`SimState::CartApproaching`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApproachStage {
    /// The cart is still driving to the harvester.
    EnRoute,
    /// The cart is alongside the harvester; the unload finishes after
    /// `ticks_remaining` more ticks.
    Unloading { ticks_remaining: u64 },
}

impl SimState {
    #[inline]
    pub fn is_harvesting(self) -> bool {
        matches!(self, SimState::Harvesting)
    }

    /// `true` for both stages of `CartApproaching`.
    #[inline]
    pub fn is_approaching(self) -> bool {
        matches!(self, SimState::CartApproaching(_))
    }

    #[inline]
    pub fn is_unloading(self) -> bool {
        matches!(self, SimState::CartApproaching(ApproachStage::Unloading { .. }))
    }

    /// The cart mode this state implies.
    pub fn expected_cart_mode(self) -> CartMode {
        match self {
            SimState::Harvesting                                       => CartMode::Idle,
            SimState::CartApproaching(ApproachStage::EnRoute)          => CartMode::Approaching,
            SimState::CartApproaching(ApproachStage::Unloading { .. }) => CartMode::Returning,
            SimState::CartReturning                                    => CartMode::Returning,
        }
    }

    /// Label without the stage payload.
    pub fn as_str(self) -> &'static str {
        match self {
            SimState::Harvesting         => "harvesting",
            SimState::CartApproaching(_) => "cart_approaching",
            SimState::CartReturning      => "cart_returning",
        }
    }
}

impl fmt::Display for SimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimState::CartApproaching(ApproachStage::Unloading { ticks_remaining }) => {
                write!(f, "{} (unloading, {ticks_remaining} ticks left)", self.as_str())
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

// ── TickState ─────────────────────────────────────────────────────────────────

/// Read-only bundle a driver or renderer polls after every tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickState {
    /// The tick this bundle describes (first tick is `Tick(1)`).
    pub tick:               Tick,
    pub harvester_position: GeoPoint,
    /// `bin_level / bin_capacity`, in `[0, 1]`.
    pub bin_fill_ratio:     f64,
    pub cart_position:      GeoPoint,
    pub cart_mode:          CartMode,
    pub state:              SimState,
}
