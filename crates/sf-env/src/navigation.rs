//! Navigation seam and the default straight-line navigator.
//!
//! # Pluggability
//!
//! `sf-sim` only talks to navigation through the [`Navigator`] trait: it asks
//! for a steering target, asks whether the agent has arrived, and hands over
//! the next destination once it has.  Path planning (navigation meshes,
//! visibility graphs, flow fields) lives behind that trait and is not part of
//! this workspace.  [`StraightLineNavigator`] steers directly at the
//! destination, which is what open plazas and the tests need.

use sf_core::plane::planar;
use sf_core::{AgentId, Vec3};

use crate::{EnvError, EnvResult};

/// Default stopping distance of [`StraightLineNavigator`].
pub const DEFAULT_STOPPING_DISTANCE: f32 = 0.5;

// ── Navigator trait ───────────────────────────────────────────────────────────

/// Pluggable navigation collaborator.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the force phase queries steering
/// targets from Rayon worker threads under the `parallel` feature.  Only
/// [`set_destination`](Navigator::set_destination) mutates, and the engine
/// calls it from the sequential apply phase.
pub trait Navigator: Send + Sync {
    /// Point the agent at `position` should currently steer toward.
    ///
    /// An agent without a destination should get its own position back, which
    /// the driving force treats as "stand still".
    fn steering_target(&self, agent: AgentId, position: Vec3) -> Vec3;

    /// `true` once the remaining distance to the destination is below the
    /// stopping distance.  `false` for agents with no destination.
    fn has_arrived(&self, agent: AgentId, position: Vec3) -> bool;

    /// Replace the agent's destination.
    fn set_destination(&mut self, agent: AgentId, destination: Vec3);
}

// ── StraightLineNavigator ─────────────────────────────────────────────────────

/// Steers every agent straight at its destination.
///
/// Remaining distance is measured on the ground plane.
#[derive(Clone, Debug)]
pub struct StraightLineNavigator {
    stopping_distance: f32,
    targets:           Vec<Option<Vec3>>,
}

impl StraightLineNavigator {
    pub fn new(stopping_distance: f32) -> EnvResult<Self> {
        if !(stopping_distance.is_finite() && stopping_distance >= 0.0) {
            return Err(EnvError::StoppingDistance(stopping_distance));
        }
        Ok(Self { stopping_distance, targets: Vec::new() })
    }

    #[inline]
    pub fn stopping_distance(&self) -> f32 {
        self.stopping_distance
    }

    /// Current destination of `agent`, if any.
    pub fn destination(&self, agent: AgentId) -> Option<Vec3> {
        self.targets.get(agent.index()).copied().flatten()
    }

    /// Planar distance left to the destination.
    pub fn remaining_distance(&self, agent: AgentId, position: Vec3) -> Option<f32> {
        self.destination(agent).map(|target| planar(target - position).length())
    }
}

impl Default for StraightLineNavigator {
    fn default() -> Self {
        Self { stopping_distance: DEFAULT_STOPPING_DISTANCE, targets: Vec::new() }
    }
}

impl Navigator for StraightLineNavigator {
    fn steering_target(&self, agent: AgentId, position: Vec3) -> Vec3 {
        self.destination(agent).unwrap_or(position)
    }

    fn has_arrived(&self, agent: AgentId, position: Vec3) -> bool {
        self.remaining_distance(agent, position)
            .is_some_and(|d| d < self.stopping_distance)
    }

    fn set_destination(&mut self, agent: AgentId, destination: Vec3) {
        let slot = agent.index();
        if slot >= self.targets.len() {
            self.targets.resize(slot + 1, None);
        }
        self.targets[slot] = Some(destination);
    }
}
