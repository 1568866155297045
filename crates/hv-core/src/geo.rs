//! Geographic coordinate type and flat-earth motion helpers.
//!
//! The field is small enough that latitude and longitude are treated as a
//! Cartesian plane: the row-traversal axis is longitude (east–west) and the
//! cross-row axis is latitude (north–south).  Distances along either axis are
//! plain coordinate deltas in degrees.  No great-circle maths is involved.

use std::fmt;

/// Approximate metres per degree of latitude used to convert row spacing.
pub const METERS_PER_DEGREE: f64 = 111_111.0;

/// A latitude/longitude pair stored as double-precision floats.
///
/// Single precision is not enough here: a harvester step is `1e-5` degrees,
/// which is below `f32` resolution at longitudes around ±118.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// `true` if `self` is within `epsilon` of `other` on both axes.
    #[inline]
    pub fn within(self, other: GeoPoint, epsilon: f64) -> bool {
        (self.lat - other.lat).abs() <= epsilon && (self.lon - other.lon).abs() <= epsilon
    }

    /// Move one step of at most `max_step` toward `target`, aligning the
    /// row-traversal axis (longitude) before the cross-row axis (latitude).
    ///
    /// Only one axis moves per call.  The step is clamped to the remaining
    /// delta so the point lands exactly on the target coordinate instead of
    /// oscillating around it.  Axes already within `epsilon` are skipped.
    /// Returns `false` (and leaves `self` unchanged) when both axes are
    /// already within `epsilon`.
    pub fn step_toward(&mut self, target: GeoPoint, max_step: f64, epsilon: f64) -> bool {
        let d_lon = target.lon - self.lon;
        if d_lon.abs() > epsilon {
            self.lon += d_lon.signum() * max_step.min(d_lon.abs());
            return true;
        }
        let d_lat = target.lat - self.lat;
        if d_lat.abs() > epsilon {
            self.lat += d_lat.signum() * max_step.min(d_lat.abs());
            return true;
        }
        false
    }

    /// Convert a north–south distance in metres to degrees of latitude.
    #[inline]
    pub fn meters_to_degrees(meters: f64) -> f64 {
        meters / METERS_PER_DEGREE
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Heading ───────────────────────────────────────────────────────────────────

/// Direction of travel along the row-traversal axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    /// Increasing longitude (`+1`).  Every run starts heading east.
    #[default]
    East,
    /// Decreasing longitude (`-1`).
    West,
}

impl Heading {
    /// `+1` for east, `-1` for west.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Heading::East => 1,
            Heading::West => -1,
        }
    }

    /// The sign as a float multiplier for coordinate arithmetic.
    #[inline]
    pub fn factor(self) -> f64 {
        f64::from(self.sign())
    }

    /// The opposite heading.
    #[inline]
    pub fn reversed(self) -> Heading {
        match self {
            Heading::East => Heading::West,
            Heading::West => Heading::East,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Heading::East => "east",
            Heading::West => "west",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
