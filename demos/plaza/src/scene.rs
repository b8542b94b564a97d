//! The plaza layout and its crowd.
//!
//! ```text
//!            gate 1 (0, 14)
//!     +--------  ----------+
//!     |  k0            p p |
//!     |       (fountain)   |   gate 0 (14, 0) / gate 2 (−14, 0)
//!     |            k1      |
//!     +--------  ----------+
//!            gate 3 (0, −14)
//! ```

use sf_agent::{AgentSpawn, AgentStore, AgentStoreBuilder, ProfileResult, ProfileTable};
use sf_core::{ProfileId, SimRng, Vec3};
use sf_env::{EnvResult, Environment, EnvironmentBuilder, Wall};

const HALF_SIZE: f32 = 15.0;
/// Half-width of the openings in the middle of each side.
const GATE_HALF_WIDTH: f32 = 2.0;

/// Four walls with a gap in the middle of each side, so every side is two
/// segments.
fn perimeter() -> Vec<Wall> {
    let h = HALF_SIZE;
    let g = GATE_HALF_WIDTH;
    let corners = [
        (Vec3::new(-h, 0.0, -h), Vec3::new(h, 0.0, -h)),
        (Vec3::new(h, 0.0, -h), Vec3::new(h, 0.0, h)),
        (Vec3::new(h, 0.0, h), Vec3::new(-h, 0.0, h)),
        (Vec3::new(-h, 0.0, h), Vec3::new(-h, 0.0, -h)),
    ];
    corners
        .into_iter()
        .flat_map(|(a, b)| {
            let mid = (a + b) * 0.5;
            let dir = (b - a).normalize();
            [
                Wall::Segment { start: a, end: mid - dir * g },
                Wall::Segment { start: mid + dir * g, end: b },
            ]
        })
        .collect()
}

pub fn build_environment() -> EnvResult<Environment> {
    EnvironmentBuilder::new()
        .walls(perimeter())
        // Fountain basin.
        .wall(Wall::block(Vec3::new(-2.0, 0.0, -2.0), Vec3::new(2.0, 0.8, 2.0)))
        // Pillars along the north-east arcade.
        .obstacles((0..4).map(|i| Vec3::new(5.0 + i as f32 * 2.5, 0.0, 10.0)))
        // Kiosks.
        .attractors([Vec3::new(-9.0, 0.0, 9.0), Vec3::new(6.0, 0.0, -6.0)])
        // Gates, just inside each opening.
        .destinations([
            Vec3::new(HALF_SIZE - 1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, HALF_SIZE - 1.0),
            Vec3::new(-(HALF_SIZE - 1.0), 0.0, 0.0),
            Vec3::new(0.0, 0.0, -(HALF_SIZE - 1.0)),
        ])
        .build()
}

/// `count` agents on a jittered ring around the fountain, profiles assigned
/// in table order.
pub fn spawn_crowd(
    count:    usize,
    seed:     u64,
    profiles: &ProfileTable,
    radius:   f32,
) -> ProfileResult<AgentStore> {
    let mut rng = SimRng::child(seed, 1);
    let profile_count = profiles.len().max(1);

    let spawns = (0..count).map(|i| {
        let angle = i as f32 / count as f32 * std::f32::consts::TAU;
        let ring = 7.0 + rng.gen_range(-1.5f32..1.5);
        let position = Vec3::new(ring * angle.cos(), 0.0, ring * angle.sin());
        AgentSpawn::at(position, ProfileId((i % profile_count) as u16))
    });

    AgentStoreBuilder::new(radius).spawn_all(spawns).build(profiles)
}
