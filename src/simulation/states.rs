//! Core state types for the pursuit simulation
//!
//! Defines the ant/ring structs:
//! - `Ant`     one chaser, owning its position and a pending next position
//! - `AntRing` the cyclic arrangement of ants plus the elapsed time `t`
//!
//! Stepping is split into two phases so that every ant computes its next
//! position against the same pre-step snapshot before any ant moves.

use nalgebra::Vector2;

use super::error::SimError;
use super::ngon::Ngon;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Ant {
    pub position: NVec2, // current position
    pub speed: f64,      // constant speed, uniform across the ring
    target: Option<usize>,  // index of the ant directly ahead in the ring
    pending: Option<NVec2>, // next position, set between compute and commit
}

impl Ant {
    pub fn new(position: NVec2, speed: f64) -> Self {
        Self {
            position,
            speed,
            target: None,
            pending: None,
        }
    }

    /// Index of the ant this one chases, once the ring is wired
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Wire this ant to the ant at `index`. The ring does this once at
    /// construction; the wiring never changes afterwards.
    pub fn set_target(&mut self, index: usize) {
        self.target = Some(index);
    }

    /// Phase 1: compute where this ant moves next
    ///
    /// `snapshot` holds every ant's pre-step position in ring order; the
    /// target is read from there rather than from the live ring, so the
    /// result is independent of iteration order. Recomputing before a
    /// commit overwrites the pending position harmlessly.
    ///
    /// The unit vector toward the target is undefined at zero separation;
    /// the scheduler terminates the run before that can happen.
    pub fn compute_next_position(&mut self, snapshot: &[NVec2], dt: f64) -> Result<(), SimError> {
        let target = self.target.ok_or(SimError::NoNextAnt)?;
        let chase = snapshot[target] - self.position;
        let u = chase / chase.norm();
        self.pending = Some(self.position + self.speed * dt * u);
        Ok(())
    }

    /// Phase 2: advance to the pending position computed earlier
    pub fn commit_step(&mut self) -> Result<(), SimError> {
        let next = self.pending.take().ok_or(SimError::NoNextPosition)?;
        self.position = next;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AntRing {
    ants: Vec<Ant>,
    pub t: f64, // elapsed simulation time
}

impl AntRing {
    /// Place `n` ants on the vertices of a regular n-gon and wire each one
    /// to chase the next, the last wrapping around to the first
    ///
    /// Fewer than 3 ants leaves the pursuit geometry undefined and is
    /// rejected, as are non-positive speeds and radii.
    pub fn new(n: usize, speed: f64, radius: f64) -> Result<Self, SimError> {
        if n < 3 {
            return Err(SimError::TooFewAnts(n));
        }
        if speed <= 0.0 {
            return Err(SimError::InvalidSpeed(speed));
        }
        if radius <= 0.0 {
            return Err(SimError::InvalidRadius(radius));
        }

        let ngon = Ngon::new(n, radius);
        let mut ants: Vec<Ant> = ngon
            .vertices()
            .into_iter()
            .map(|v| Ant::new(v, speed))
            .collect();
        for i in 0..n {
            ants[i].set_target((i + 1) % n);
        }

        Ok(Self { ants, t: 0.0 })
    }

    pub fn len(&self) -> usize {
        self.ants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ants.is_empty()
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Advance every ant by one synchronized step of length `dt`
    ///
    /// Phase 1 computes all pending positions against a snapshot of the
    /// pre-step state, phase 2 commits them, then `t` advances. Without
    /// the split, ants late in iteration order would chase targets that
    /// already moved within the same step.
    pub fn step(&mut self, dt: f64) -> Result<(), SimError> {
        let snapshot: Vec<NVec2> = self.ants.iter().map(|a| a.position).collect();
        for ant in &mut self.ants {
            ant.compute_next_position(&snapshot, dt)?;
        }
        for ant in &mut self.ants {
            ant.commit_step()?;
        }
        self.t += dt;
        Ok(())
    }

    /// Separation between ants 0 and 1
    ///
    /// The ring starts as a regular polygon with uniform speed, so every
    /// adjacent separation stays equal and one pair stands in for all of
    /// them. Not valid for non-uniform speeds or asymmetric placements.
    pub fn distance_between_ants(&self) -> f64 {
        (self.ants[0].position - self.ants[1].position).norm()
    }

    /// Current position of every ant in ring order
    pub fn positions(&self) -> Vec<NVec2> {
        self.ants.iter().map(|a| a.position).collect()
    }
}
