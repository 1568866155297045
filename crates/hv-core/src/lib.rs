//! `hv-core` — foundational types for the cotton harvest field simulation.
//!
//! This crate is a dependency of every other `hv-*` crate.  It has no `hv-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, `Heading`, flat-earth metre conversion    |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `FieldConfig`, `CartConfig`, `SimConfig`, `RunConfig` |
//! | [`rng`]         | `RandomSource` trait, `SimRng`, `ConstantSource`      |
//! | [`error`]       | `HvError`, `HvResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CartConfig, FieldConfig, RunConfig, SimConfig};
pub use error::{HvError, HvResult};
pub use geo::{GeoPoint, Heading, METERS_PER_DEGREE};
pub use rng::{ConstantSource, RandomSource, SimRng};
pub use time::{SimClock, Tick};
