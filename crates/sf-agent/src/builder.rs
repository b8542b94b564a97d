//! Fluent builder for constructing an `AgentStore` in one step.
//!
//! # Usage
//!
//! ```rust
//! use sf_agent::{AgentSpawn, AgentStoreBuilder, ProfileTable};
//! use sf_core::{PersonalityType, ProfileId, Vec3};
//!
//! let profiles = ProfileTable::presets();
//! let cautious = ProfileId(PersonalityType::Cautious.index() as u16);
//!
//! let store = AgentStoreBuilder::new(0.5)
//!     .spawn(AgentSpawn::at(Vec3::new(0.0, 0.0, 0.0), ProfileId(0)))
//!     .spawn(AgentSpawn::at(Vec3::new(2.0, 0.0, 0.0), cautious).radius(0.3))
//!     .build(&profiles)
//!     .unwrap();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(store.max_speed[1], profiles[cautious].desired_speed);
//! ```

use sf_core::{ProfileId, Vec3};

use crate::{AgentStore, ProfileError, ProfileResult, ProfileTable};

/// Initial state of one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSpawn {
    pub position: Vec3,
    pub velocity: Vec3,
    /// `None` takes the builder's default radius.
    pub radius:   Option<f32>,
    pub profile:  ProfileId,
}

impl AgentSpawn {
    /// A stationary agent at `position`.
    pub fn at(position: Vec3, profile: ProfileId) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            radius: None,
            profile,
        }
    }

    pub fn velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }
}

/// Fluent builder for [`AgentStore`].
///
/// Spawns are only checked against the profile table in
/// [`build`](Self::build), so the builder can be filled before profiles are
/// loaded.
pub struct AgentStoreBuilder {
    default_radius: f32,
    spawns:         Vec<AgentSpawn>,
}

impl AgentStoreBuilder {
    /// `default_radius` is used for spawns that do not set one
    /// (typically `SimConfig::default_agent_radius`).
    pub fn new(default_radius: f32) -> Self {
        Self {
            default_radius,
            spawns: Vec::new(),
        }
    }

    pub fn spawn(mut self, spawn: AgentSpawn) -> Self {
        self.spawns.push(spawn);
        self
    }

    pub fn spawn_all(mut self, spawns: impl IntoIterator<Item = AgentSpawn>) -> Self {
        self.spawns.extend(spawns);
        self
    }

    /// Validate every spawn against `profiles` and construct the store.
    ///
    /// Each agent's velocity clamp is derived from its profile here.
    pub fn build(self, profiles: &ProfileTable) -> ProfileResult<AgentStore> {
        let mut store = AgentStore::with_capacity(self.spawns.len());

        for spawn in self.spawns {
            let radius = spawn.radius.unwrap_or(self.default_radius);
            if !(radius.is_finite() && radius >= 0.0) {
                return Err(ProfileError::InvalidRadius { agent: store.count, radius });
            }
            let desired_speed = profiles.require(spawn.profile)?.desired_speed;
            store.push(spawn.position, spawn.velocity, radius, spawn.profile, desired_speed);
        }

        Ok(store)
    }
}
