//! `PathRecorder` — the series a field-map renderer draws.
//!
//! A renderer wants four lines: the harvester's path, the bin-fill history,
//! the cart's outbound trail, and its return trail.  The outbound trail gets
//! one point per tick.  While the cart drives home, each tick moves the
//! oldest outbound point off the trail and adds the cart's position to the
//! return trail (as long as the outbound trail still has more than one
//! point), so the trail visibly recedes.  The return trail is cleared once
//! the cart is home.

use std::collections::VecDeque;

use hv_core::GeoPoint;

use crate::{SimObserver, SimState, TickState};

/// Records per-tick positions for rendering.  Owns no simulation logic.
#[derive(Debug, Default)]
pub struct PathRecorder {
    harvester_path: Vec<GeoPoint>,
    bin_levels:     Vec<f64>,
    cart_trail:     VecDeque<GeoPoint>,
    return_trail:   Vec<GeoPoint>,
    prev_state:     SimState,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Harvester position after every tick.
    #[inline]
    pub fn harvester_path(&self) -> &[GeoPoint] {
        &self.harvester_path
    }

    /// Bin-fill ratio after every tick, indexed by tick − 1.
    #[inline]
    pub fn bin_levels(&self) -> &[f64] {
        &self.bin_levels
    }

    /// The cart's receding outbound trail, oldest point first.
    pub fn cart_trail(&self) -> impl Iterator<Item = &GeoPoint> + '_ {
        self.cart_trail.iter()
    }

    #[inline]
    pub fn cart_trail_len(&self) -> usize {
        self.cart_trail.len()
    }

    /// Return-trip positions of the current service cycle.
    #[inline]
    pub fn return_trail(&self) -> &[GeoPoint] {
        &self.return_trail
    }
}

impl SimObserver for PathRecorder {
    fn on_tick_end(&mut self, state: &TickState) {
        if self.prev_state == SimState::CartReturning {
            if self.cart_trail.len() > 1 {
                self.return_trail.push(state.cart_position);
                self.cart_trail.pop_front();
            }
            if state.state.is_harvesting() {
                self.return_trail.clear();
            }
        }

        self.harvester_path.push(state.harvester_position);
        self.bin_levels.push(state.bin_fill_ratio);
        self.cart_trail.push_back(state.cart_position);
        self.prev_state = state.state;
    }
}
