//! The `TelemetrySink` trait implemented by all telemetry receivers.

use hv_agents::TelemetrySnapshot;

/// Receives harvester telemetry in tick order.
///
/// The coordinator calls [`receive`](Self::receive) at most once per tick,
/// and only while the harvester is working.
pub trait TelemetrySink {
    /// Accept one snapshot.
    ///
    /// Returns `true` if the snapshot raised an alert notification.
    fn receive(&mut self, snapshot: TelemetrySnapshot) -> bool;
}

impl<T: TelemetrySink + ?Sized> TelemetrySink for Box<T> {
    #[inline]
    fn receive(&mut self, snapshot: TelemetrySnapshot) -> bool {
        (**self).receive(snapshot)
    }
}
