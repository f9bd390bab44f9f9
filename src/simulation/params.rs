//! Numerical parameters for a pursuit run
//!
//! `Parameters` holds the runtime settings of one simulation:
//! - ring shape (ant count, starting radius) and uniform speed,
//! - adaptive-step tuning (`alpha`) and convergence threshold (`epsilon`),
//! - recording limits (`max_frames`, `reduction_factor`)

use super::error::SimError;

/// Separation below which the ants count as having reached the center
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Default recording budget in frames
pub const DEFAULT_MAX_FRAMES: usize = 1 << 20;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub ants: usize,             // number of ants, one per polygon vertex
    pub speed: f64,              // uniform ant speed
    pub radius: f64,             // distance from the center to each starting vertex
    pub alpha: f64,              // fraction of the separation traversed per step, in (0,1)
    pub epsilon: f64,            // separation below which the run has converged
    pub max_frames: usize,       // recording buffer capacity in frames
    pub reduction_factor: usize, // keep every r-th recorded frame
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            ants: 4,
            speed: 1.0,
            radius: 1.0,
            alpha: 1e-3,
            epsilon: DEFAULT_EPSILON,
            max_frames: DEFAULT_MAX_FRAMES,
            reduction_factor: 1,
        }
    }
}

impl Parameters {
    /// Reject out-of-range settings before any simulation work begins
    pub fn validate(&self) -> Result<(), SimError> {
        if self.ants < 3 {
            return Err(SimError::TooFewAnts(self.ants));
        }
        if self.speed <= 0.0 {
            return Err(SimError::InvalidSpeed(self.speed));
        }
        if self.radius <= 0.0 {
            return Err(SimError::InvalidRadius(self.radius));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(SimError::InvalidAlpha(self.alpha));
        }
        if self.max_frames < 1 {
            return Err(SimError::InvalidMaxFrames);
        }
        if self.reduction_factor < 1 {
            return Err(SimError::InvalidReductionFactor);
        }
        Ok(())
    }
}
