//! The base station: telemetry log and threshold alerts.

use hv_agents::TelemetrySnapshot;
use tracing::{debug, warn};

use crate::TelemetrySink;

/// When an above-threshold snapshot raises an alert.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertPolicy {
    /// Every snapshot with `alert == true` raises a notification.
    #[default]
    EveryTick,
    /// Only a snapshot with `alert == true` whose predecessor had
    /// `alert == false` (or that is the first snapshot) raises one.
    RisingEdge,
}

/// Append-only telemetry log with alert detection.
#[derive(Debug, Default)]
pub struct BaseStation {
    policy:     AlertPolicy,
    log:        Vec<TelemetrySnapshot>,
    /// Log indices of snapshots that raised an alert.
    alerts:     Vec<usize>,
    last_alert: bool,
}

impl BaseStation {
    /// A base station using [`AlertPolicy::EveryTick`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: AlertPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[inline]
    pub fn policy(&self) -> AlertPolicy {
        self.policy
    }

    /// Every snapshot received so far, oldest first.
    #[inline]
    pub fn log(&self) -> &[TelemetrySnapshot] {
        &self.log
    }

    /// Number of alert notifications raised.
    #[inline]
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    /// The snapshots that raised alerts, oldest first.
    pub fn alerts(&self) -> impl Iterator<Item = &TelemetrySnapshot> + '_ {
        self.alerts.iter().map(|&i| &self.log[i])
    }

    /// The most recent snapshot, if any.
    #[inline]
    pub fn latest(&self) -> Option<&TelemetrySnapshot> {
        self.log.last()
    }
}

impl TelemetrySink for BaseStation {
    fn receive(&mut self, snapshot: TelemetrySnapshot) -> bool {
        debug!(%snapshot, "received telemetry");

        let raise = match self.policy {
            AlertPolicy::EveryTick  => snapshot.alert,
            AlertPolicy::RisingEdge => snapshot.alert && !self.last_alert,
        };
        self.last_alert = snapshot.alert;
        self.log.push(snapshot);

        if raise {
            self.alerts.push(self.log.len() - 1);
            warn!(
                fill = snapshot.bin_fill_ratio,
                position = %snapshot.position,
                "bin level above threshold"
            );
        }
        raise
    }
}
