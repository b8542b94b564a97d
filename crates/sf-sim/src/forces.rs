//! Net-acceleration assembly for the read phase.
//!
//! Everything here borrows simulation state immutably, so the per-agent sums
//! can run in any order (or in parallel) without changing the result.

use sf_agent::{AgentStore, ForceTerm, InteractionShape, ProfileTable};
use sf_core::{AgentId, SimConfig, Vec3};
use sf_env::{Environment, Navigator};
use sf_force::{Repulsion, attraction, driving_force, pairwise_repulsion, wall_repulsion};

/// Reusable range-query buffers, one per worker.
#[derive(Default)]
pub(crate) struct Scratch {
    obstacles:  Vec<usize>,
    attractors: Vec<usize>,
}

/// Read-only view of everything the force phase needs.
pub(crate) struct ForceContext<'a, N> {
    agents:          &'a AgentStore,
    profiles:        &'a ProfileTable,
    environment:     &'a Environment,
    navigator:       &'a N,
    relaxation_time: f32,
}

fn repulsion(term: &ForceTerm, shape: &InteractionShape) -> Repulsion {
    Repulsion {
        range:               term.range,
        strength:            term.strength,
        direction_weight:    shape.direction_weight,
        range_dir_factor:    shape.range_dir_factor,
        angular_range:       shape.angular_range,
        angular_range_large: shape.angular_range_large,
    }
}

impl<'a, N: Navigator> ForceContext<'a, N> {
    /// Borrow the read-phase state field by field, so callers can keep the
    /// acceleration buffer mutably borrowed alongside.
    pub fn new(
        config:      &SimConfig,
        agents:      &'a AgentStore,
        profiles:    &'a ProfileTable,
        environment: &'a Environment,
        navigator:   &'a N,
    ) -> Self {
        Self {
            agents,
            profiles,
            environment,
            navigator,
            relaxation_time: config.relaxation_time_secs,
        }
    }

    /// Weighted sum of every force acting on agent `i`, in the fixed order
    /// driving, obstacles, agents, wall, attractors.
    pub fn net_acceleration(&self, i: usize, scratch: &mut Scratch) -> Vec3 {
        let agents = self.agents;
        let env = self.environment;
        let position = agents.position[i];
        let velocity = agents.velocity[i];
        let radius = agents.radius[i];
        let profile = &self.profiles[agents.profile[i]];

        let target = self.navigator.steering_target(AgentId(i as u32), position);
        let mut acc = profile.driving_weight
            * driving_force(profile.desired_speed, target - position, velocity, self.relaxation_time);

        let obstacle = repulsion(&profile.obstacle, &profile.shape);
        env.obstacles_within(position, obstacle.range, &mut scratch.obstacles);
        for &o in &scratch.obstacles {
            acc += profile.obstacle.weight
                * pairwise_repulsion(position, velocity, env.obstacles()[o], Vec3::ZERO, &obstacle);
        }

        let neighbour = repulsion(&profile.agent, &profile.shape);
        for j in 0..agents.count {
            if j == i {
                continue;
            }
            acc += profile.agent.weight
                * pairwise_repulsion(
                    position,
                    velocity,
                    agents.position[j],
                    agents.velocity[j],
                    &neighbour,
                );
        }

        if let Some((point, _)) = env.nearest_wall(position) {
            acc += profile.wall.weight
                * wall_repulsion(position, radius, profile.wall.range, profile.wall.strength, point);
        }

        let pull = &profile.attraction;
        env.attractors_within(position, pull.range, &mut scratch.attractors);
        for &a in &scratch.attractors {
            acc += pull.weight
                * attraction(position, radius, pull.range, pull.strength, env.attractors()[a]);
        }

        acc
    }
}

/// Fill `out[i]` with the net acceleration of agent `i`.
#[cfg(not(feature = "parallel"))]
pub(crate) fn compute_accelerations<N: Navigator>(ctx: &ForceContext<'_, N>, out: &mut [Vec3]) {
    let mut scratch = Scratch::default();
    for (i, acc) in out.iter_mut().enumerate() {
        *acc = ctx.net_acceleration(i, &mut scratch);
    }
}

/// Fill `out[i]` with the net acceleration of agent `i` on the current Rayon
/// pool.  Each agent's sum is computed by one thread in the same order as
/// the sequential path, so results are bit-identical.
#[cfg(feature = "parallel")]
pub(crate) fn compute_accelerations<N: Navigator>(ctx: &ForceContext<'_, N>, out: &mut [Vec3]) {
    use rayon::prelude::*;

    out.par_iter_mut()
        .enumerate()
        .for_each_init(Scratch::default, |scratch, (i, acc)| {
            *acc = ctx.net_acceleration(i, scratch);
        });
}
