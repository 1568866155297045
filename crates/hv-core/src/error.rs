//! Simulation error type.
//!
//! Only two things can go wrong inside the core: a run is built from invalid
//! parameters, or an agent operation is invoked in a mode where it has no
//! meaning.  The second is a contract violation by the caller; the
//! coordinator never triggers it, but it is still reported as a value so it
//! can be propagated with `?` instead of aborting the process.

use thiserror::Error;

/// The top-level error type for `hv-core` and a common base for sub-crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HvError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid state transition: `{operation}` called while cart is {mode}")]
    InvalidStateTransition {
        operation: &'static str,
        mode:      &'static str,
    },
}

/// Shorthand result type for all `hv-*` crates.
pub type HvResult<T> = Result<T, HvError>;
