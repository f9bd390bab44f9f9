//! Error taxonomy for the pursuit simulation
//!
//! Two fatal families surface through [`SimError`]:
//! - configuration errors, raised before any simulation work begins
//! - protocol violations, indicating a caller-ordering bug
//!
//! Convergence and the frame-limit cutoff are not errors; they are
//! reported through `StepDecision` and `RunOutcome` instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("a pursuit ring needs at least 3 ants, got {0}")]
    TooFewAnts(usize),

    #[error("alpha must lie strictly between 0 and 1, got {0}")]
    InvalidAlpha(f64),

    #[error("speed must be positive, got {0}")]
    InvalidSpeed(f64),

    #[error("radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("max_frames must be at least 1")]
    InvalidMaxFrames,

    #[error("reduction_factor must be at least 1")]
    InvalidReductionFactor,

    #[error("ant has no ant to chase")]
    NoNextAnt,

    #[error("ant has no pending position to step to")]
    NoNextPosition,

    #[error("simulation has already run; results are read through accessors")]
    AlreadyRun,
}
