//! `hv-telemetry` — where the harvester's reports go.
//!
//! The harvester "radios" a [`TelemetrySnapshot`][hv_agents::TelemetrySnapshot]
//! to the base station once per harvesting tick.  The radio link is just a
//! method call on a [`TelemetrySink`]; [`BaseStation`] is the standard sink,
//! keeping an append-only log and raising an alert whenever a snapshot
//! reports the bin at or above the service trigger.
//!
//! Alerts are emitted as `tracing` warnings and counted.  Whether every
//! above-threshold snapshot raises an alert, or only the first of each run of
//! them, is chosen with [`AlertPolicy`].

pub mod base_station;
pub mod sink;


pub use base_station::{AlertPolicy, BaseStation};
pub use sink::TelemetrySink;
