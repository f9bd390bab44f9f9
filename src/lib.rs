pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Ant, AntRing, NVec2};
pub use simulation::ngon::{analytical_convergence_time, Ngon};
pub use simulation::params::{Parameters, DEFAULT_EPSILON, DEFAULT_MAX_FRAMES};
pub use simulation::scheduler::{StepDecision, StepScheduler};
pub use simulation::runner::{RunOutcome, SimulationRunner};
pub use simulation::scenario::Scenario;
pub use simulation::error::SimError;

pub use configuration::config::{ParametersConfig, RingConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_run, bench_step};
