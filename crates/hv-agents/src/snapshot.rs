//! The harvester's per-tick telemetry report.

use std::fmt;

use hv_core::GeoPoint;

/// An immutable telemetry report emitted by the harvester.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetrySnapshot {
    /// Harvester position at snapshot time.
    pub position: GeoPoint,

    /// `bin_level / bin_capacity`, in `[0, 1]`.
    pub bin_fill_ratio: f64,

    /// `true` iff the bin level is at or above the service trigger.
    pub alert: bool,
}

impl fmt::Display for TelemetrySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat={:.6} lon={:.6} bin={:.2} trigger={}",
            self.position.lat, self.position.lon, self.bin_fill_ratio, self.alert
        )
    }
}
