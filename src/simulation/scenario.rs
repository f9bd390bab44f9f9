//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - the wired ant ring (`AntRing` with all ants at t = 0)
//!
//! The bundle is handed to a `SimulationRunner` to execute, or inspected
//! directly by the CLI binary.

use crate::configuration::config::ScenarioConfig;
use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::runner::SimulationRunner;
use crate::simulation::states::AntRing;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub ring: AntRing,
}

impl Scenario {
    /// Map a `ScenarioConfig` into the runtime bundle, validating every
    /// setting before the ring is built
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let parameters = Parameters {
            ants: cfg.ring.ants,
            speed: cfg.ring.speed,
            radius: cfg.ring.radius,
            alpha: cfg.parameters.alpha,
            epsilon: cfg.parameters.epsilon,
            max_frames: cfg.parameters.max_frames,
            reduction_factor: cfg.parameters.reduction_factor,
        };
        parameters.validate()?;

        let ring = AntRing::new(parameters.ants, parameters.speed, parameters.radius)?;

        Ok(Self { parameters, ring })
    }

    /// Hand the bundle to a runner ready to `run()`
    pub fn into_runner(self) -> Result<SimulationRunner, SimError> {
        SimulationRunner::new(self.ring, &self.parameters)
    }
}
