//! `hv-sim` — tick loop coordinator for the cotton harvest field simulation.
//!
//! # State machine
//!
//! ```text
//!                 bin ≥ trigger: dispatch cart, halt harvester
//!   Harvesting ───────────────────────────────────────────▶ CartApproaching(EnRoute)
//!       ▲                                                          │ cart reaches harvester
//!       │                                                          ▼
//!       │ cart home:                                   CartApproaching(Unloading { n })
//!       │ resume harvester                                         │ n ticks later: empty bin
//!       │                                                          ▼
//!       └──────────────────────────────────────────────────── CartReturning
//! ```
//!
//! Exactly one arm runs per tick, so at most one vehicle moves per tick.
//! Telemetry reaches the sink only from the `Harvesting` arm.  The unload
//! delay is a countdown of simulated ticks; nothing ever sleeps.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hv_core::{FieldConfig, SimConfig};
//! use hv_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::seeded(SimConfig::default())
//!     .field(FieldConfig::default())
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{} service cycles", sim.service_cycles());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod state;
pub mod trace;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use state::{ApproachStage, SimState, TickState};
pub use trace::PathRecorder;
