//! `hv-agents` — the two vehicles of the field run.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                        |
//! |-----------------|-----------------------------------------------------------------|
//! | [`harvester`]   | `Harvester` — boustrophedon row traversal and bin filling        |
//! | [`cart`]        | `TransportCart`, `CartMode`, `CartProgress` — the service vehicle |
//! | [`snapshot`]    | `TelemetrySnapshot` — what the harvester reports each tick       |
//!
//! # Movement model
//!
//! Both vehicles move on a flat latitude/longitude plane in fixed steps.  The
//! harvester only ever moves along the row (longitude) except at a turn,
//! where it jumps one row spacing north.  The cart moves one axis per tick,
//! aligning longitude before latitude, which mirrors the harvester's own
//! row-then-turn order.
//!
//! Agents never decide *when* to act: the coordinator in `hv-sim` calls
//! exactly one of them per tick.  Every agent field is private; drivers read
//! state through accessors.

pub mod cart;
pub mod harvester;
pub mod snapshot;


pub use cart::{CartMode, CartProgress, TransportCart};
pub use harvester::Harvester;
pub use snapshot::TelemetrySnapshot;
