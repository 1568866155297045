//! The harvester agent.

use hv_core::{FieldConfig, GeoPoint, Heading, HvResult, RandomSource};

use crate::TelemetrySnapshot;

/// A cotton harvester working a rectangular field in back-and-forth rows.
///
/// The harvester starts at the field origin heading east.  Each active tick
/// it moves one `step_size` along the row and its bin fills by a random
/// amount.  A row is `steps_per_row` steps long; after the last step the
/// harvester turns: heading reverses, it moves one row spacing north, and its
/// longitude is reset to the edge the new heading departs from (the west
/// edge when heading east, the east edge when heading west).
///
/// Progress along a row is kept as an integer step count and the longitude is
/// derived from it, so the turn always happens on the same tick regardless of
/// floating-point accumulation.
///
/// While [`halted`](Self::is_halted) the harvester ignores
/// [`advance_tick`](Self::advance_tick) entirely: it neither moves nor fills.
#[derive(Clone, Debug)]
pub struct Harvester {
    position:         GeoPoint,
    origin:           GeoPoint,
    field_width:      f64,
    row_spacing:      f64,
    step_size:        f64,
    steps_per_row:    u64,
    steps_in_row:     u64,
    bin_capacity:     f64,
    bin_level:        f64,
    trigger_fraction: f64,
    max_fill_rate:    f64,
    row_index:        u32,
    heading:          Heading,
    halted:           bool,
}

impl Harvester {
    /// Place a harvester at `config.origin` with an empty bin.
    ///
    /// # Errors
    ///
    /// `HvError::InvalidConfiguration` if `config` fails validation.
    pub fn new(config: &FieldConfig) -> HvResult<Self> {
        config.validate()?;
        Ok(Self {
            position:         config.origin,
            origin:           config.origin,
            field_width:      config.field_width,
            row_spacing:      config.row_spacing_deg(),
            step_size:        config.step_size,
            steps_per_row:    config.steps_per_row(),
            steps_in_row:     0,
            bin_capacity:     config.bin_capacity,
            bin_level:        0.0,
            trigger_fraction: config.trigger_fraction,
            max_fill_rate:    config.max_fill_rate,
            row_index:        0,
            heading:          Heading::East,
            halted:           false,
        })
    }

    // ── Per-tick operations ───────────────────────────────────────────────

    /// Move one step along the current row, turning at the row end, and add
    /// a random fill increment to the bin.
    ///
    /// Returns `false` without touching any state if the harvester is halted.
    pub fn advance_tick<R: RandomSource>(&mut self, rng: &mut R) -> bool {
        if self.halted {
            return false;
        }

        self.steps_in_row += 1;
        if self.steps_in_row >= self.steps_per_row {
            self.complete_row();
        } else {
            self.position.lon = self.row_start_lon()
                + self.heading.factor() * self.steps_in_row as f64 * self.step_size;
        }

        let increment = rng.uniform(0.0, self.max_fill_rate) * self.bin_capacity;
        self.bin_level = (self.bin_level + increment).clamp(0.0, self.bin_capacity);
        true
    }

    /// The telemetry report for the current state.  Pure.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            position:       self.position,
            bin_fill_ratio: self.bin_fill_ratio(),
            alert:          self.needs_service(),
        }
    }

    // ── Coordinator controls ──────────────────────────────────────────────

    /// Stop moving until [`resume`](Self::resume) is called.
    #[inline]
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Allow movement again.
    #[inline]
    pub fn resume(&mut self) {
        self.halted = false;
    }

    /// Empty the bin (the cart has taken the load).
    #[inline]
    pub fn unload(&mut self) {
        self.bin_level = 0.0;
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
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Number of completed rows.
    #[inline]
    pub fn row_index(&self) -> u32 {
        self.row_index
    }

    /// Steps taken since the start of the current row.
    #[inline]
    pub fn steps_in_row(&self) -> u64 {
        self.steps_in_row
    }

    #[inline]
    pub fn steps_per_row(&self) -> u64 {
        self.steps_per_row
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn bin_level(&self) -> f64 {
        self.bin_level
    }

    #[inline]
    pub fn bin_capacity(&self) -> f64 {
        self.bin_capacity
    }

    #[inline]
    pub fn trigger_fraction(&self) -> f64 {
        self.trigger_fraction
    }

    /// `bin_level / bin_capacity`, in `[0, 1]`.
    #[inline]
    pub fn bin_fill_ratio(&self) -> f64 {
        (self.bin_level / self.bin_capacity).clamp(0.0, 1.0)
    }

    /// `true` once the bin has reached the service trigger.
    #[inline]
    pub fn needs_service(&self) -> bool {
        self.bin_level >= self.trigger_fraction * self.bin_capacity
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Longitude of the edge the current heading departs from.
    fn row_start_lon(&self) -> f64 {
        match self.heading {
            Heading::East => self.origin.lon,
            Heading::West => self.origin.lon + self.field_width,
        }
    }

    fn complete_row(&mut self) {
        self.row_index += 1;
        self.heading = self.heading.reversed();
        self.steps_in_row = 0;
        self.position.lat += self.row_spacing;
        self.position.lon = self.row_start_lon();
    }
}
