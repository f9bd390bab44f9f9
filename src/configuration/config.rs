//! Configuration types for loading pursuit scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`RingConfig`]       – the pursuit ring (ant count, speed, radius)
//! - [`ParametersConfig`] – stepping and recording parameters
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! ring:
//!   ants: 4                 # one ant per vertex of a regular polygon, >= 3
//!   speed: 1.0              # uniform ant speed
//!   radius: 1.0             # distance from the center to each vertex
//!
//! parameters:
//!   alpha: 0.001            # fraction of the separation traversed per step
//!   epsilon: 1.0e-4         # convergence threshold (optional)
//!   max_frames: 1048576     # recording budget in frames (optional, 2^20)
//!   reduction_factor: 64    # keep every 64th frame (optional, 1)
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! representation via `Scenario::build_scenario`.

use serde::Deserialize;

use crate::simulation::params::{DEFAULT_EPSILON, DEFAULT_MAX_FRAMES};

/// The pursuit ring: how many ants, how fast, and how far out they start
#[derive(Deserialize, Debug, Clone)]
pub struct RingConfig {
    pub ants: usize, // number of ants, one per polygon vertex, >= 3
    pub speed: f64,  // uniform ant speed
    pub radius: f64, // distance from the center to each starting vertex
}

/// Stepping and recording parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub alpha: f64, // fraction of the separation traversed per step, in (0,1)

    #[serde(default = "default_epsilon")]
    pub epsilon: f64, // separation below which the run has converged

    #[serde(default = "default_max_frames")]
    pub max_frames: usize, // recording budget in frames

    #[serde(default = "default_reduction_factor")]
    pub reduction_factor: usize, // keep every r-th recorded frame
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub ring: RingConfig,             // ring shape and speed
    pub parameters: ParametersConfig, // stepping and recording settings
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

fn default_max_frames() -> usize {
    DEFAULT_MAX_FRAMES
}

fn default_reduction_factor() -> usize {
    1
}
