use hv_core::{HvError, Tick};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("agent error: {0}")]
    Agent(#[from] HvError),

    #[error("invariant violated at {tick}: {what}")]
    Invariant { tick: Tick, what: String },
}

pub type SimResult<T> = Result<T, SimError>;
