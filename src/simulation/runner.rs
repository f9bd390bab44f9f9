//! Simulation runner: drives the ring, records every frame, reduces
//!
//! `SimulationRunner` owns one `AntRing` and the recording it produces.
//! `run()` loops up to `max_frames` times: record the current frame
//! first, then ask the scheduler for a step. Convergence stops the loop
//! with the terminal frame already captured; exhausting the frame budget
//! stops it with a valid but incomplete recording, reported as a
//! distinct outcome. The recording is then downsampled in place, keeping
//! every `reduction_factor`-th frame starting with frame 0.

use log::{debug, info};

use super::error::SimError;
use super::params::Parameters;
use super::scheduler::{StepDecision, StepScheduler};
use super::states::{AntRing, NVec2};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The separation fell below epsilon; the recording reaches the center
    Converged { frames_recorded: usize },
    /// The frame budget ran out first; the recording stops short of
    /// convergence
    FrameLimitReached { frames_recorded: usize },
}

#[derive(Debug)]
pub struct SimulationRunner {
    ring: AntRing,
    scheduler: StepScheduler,
    max_frames: usize,
    reduction_factor: usize,
    positions: Vec<NVec2>, // frame-major, ring.len() entries per frame
    times: Vec<f64>,
    distances: Vec<f64>,
    frames_used: usize, // frames kept after reduction
    outcome: Option<RunOutcome>,
}

impl SimulationRunner {
    /// Build a runner around a fully wired ring
    ///
    /// Out-of-range recording settings are rejected here, before any
    /// simulation work happens. The scheduler takes its speed from the
    /// ring's ants, which all share one value.
    pub fn new(ring: AntRing, params: &Parameters) -> Result<Self, SimError> {
        if params.max_frames < 1 {
            return Err(SimError::InvalidMaxFrames);
        }
        if params.reduction_factor < 1 {
            return Err(SimError::InvalidReductionFactor);
        }
        let speed = ring.ants()[0].speed;
        let scheduler = StepScheduler::new(params.alpha, speed, params.epsilon)?;

        let n = ring.len();
        Ok(Self {
            ring,
            scheduler,
            max_frames: params.max_frames,
            reduction_factor: params.reduction_factor,
            positions: Vec::with_capacity(n * params.max_frames),
            times: Vec::with_capacity(params.max_frames),
            distances: Vec::with_capacity(params.max_frames),
            frames_used: 0,
            outcome: None,
        })
    }

    /// Drive the ring until convergence or frame exhaustion, recording
    /// one frame per step
    ///
    /// One-shot: a second call is a protocol violation. The frame is
    /// recorded before the scheduler is consulted, so frame 0 is the
    /// initial state and the terminal frame is captured on convergence.
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        if self.outcome.is_some() {
            return Err(SimError::AlreadyRun);
        }
        info!(
            "starting pursuit run: {} ants, alpha = {}, frame budget = {}",
            self.ring.len(),
            self.scheduler.alpha(),
            self.max_frames
        );

        let mut recorded = 0;
        let mut converged = false;
        while recorded < self.max_frames {
            self.record_frame();
            recorded += 1;
            match self.scheduler.next_dt(self.ring.distance_between_ants()) {
                StepDecision::Converged => {
                    converged = true;
                    break;
                }
                StepDecision::Advance(dt) => self.ring.step(dt)?,
            }
        }

        self.reduce(recorded);

        let outcome = if converged {
            RunOutcome::Converged {
                frames_recorded: recorded,
            }
        } else {
            RunOutcome::FrameLimitReached {
                frames_recorded: recorded,
            }
        };
        info!(
            "run finished: {:?}, {} frames kept, t = {:.6}",
            outcome, self.frames_used, self.ring.t
        );
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    fn record_frame(&mut self) {
        self.positions.extend(self.ring.positions());
        self.times.push(self.ring.t);
        self.distances.push(self.ring.distance_between_ants());
    }

    /// Compact the buffers in place, keeping frames 0, r, 2r, ...
    ///
    /// Keeps ceil(recorded / r) frames; the source index never trails the
    /// destination, so forward copying is safe.
    fn reduce(&mut self, recorded: usize) {
        let n = self.ring.len();
        let r = self.reduction_factor;

        let mut kept = 0;
        for src in (0..recorded).step_by(r) {
            self.times[kept] = self.times[src];
            self.distances[kept] = self.distances[src];
            for a in 0..n {
                self.positions[kept * n + a] = self.positions[src * n + a];
            }
            kept += 1;
        }
        self.times.truncate(kept);
        self.distances.truncate(kept);
        self.positions.truncate(kept * n);
        self.frames_used = kept;

        if r > 1 {
            debug!("reduced {recorded} recorded frames to {kept} (factor {r})");
        }
    }

    /// Number of frames kept after reduction
    pub fn frames_used(&self) -> usize {
        self.frames_used
    }

    /// How the run ended, or `None` before `run()`
    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn ring(&self) -> &AntRing {
        &self.ring
    }

    /// Elapsed time of every kept frame in chronological order
    pub fn all_times(&self) -> &[f64] {
        &self.times
    }

    /// Separation of every kept frame in chronological order
    pub fn all_distances(&self) -> &[f64] {
        &self.distances
    }

    /// All kept positions, frame-major: `ring.len()` entries per frame
    pub fn all_positions(&self) -> &[NVec2] {
        &self.positions
    }

    /// Positions of the `frame`-th kept frame in ring order
    pub fn positions_at(&self, frame: usize) -> &[NVec2] {
        let n = self.ring.len();
        &self.positions[frame * n..(frame + 1) * n]
    }

    /// X coordinates of the `frame`-th kept frame
    pub fn x_positions_at(&self, frame: usize) -> Vec<f64> {
        self.positions_at(frame).iter().map(|p| p.x).collect()
    }

    /// Y coordinates of the `frame`-th kept frame
    pub fn y_positions_at(&self, frame: usize) -> Vec<f64> {
        self.positions_at(frame).iter().map(|p| p.y).collect()
    }

    /// Every kept position from frame 0 through `frame`, the flat trail
    /// shape replay plotting consumes
    pub fn positions_through(&self, frame: usize) -> &[NVec2] {
        &self.positions[..(frame + 1) * self.ring.len()]
    }

    pub fn time_at(&self, frame: usize) -> f64 {
        self.times[frame]
    }

    pub fn distance_at(&self, frame: usize) -> f64 {
        self.distances[frame]
    }
}
