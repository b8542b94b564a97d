//! Core agent storage: `AgentStore` (SoA data).
//!
//! # Read phase / write phase
//!
//! The engine's force phase reads every agent's position and velocity while
//! computing one agent's acceleration, so agent state is only ever written
//! after all accelerations for the tick are known:
//!
//! ```ignore
//! // sf-sim tick loop (simplified):
//! let accel: Vec<Vec3> = store.agent_ids().map(|a| net_force(a, &store)).collect();
//! for (i, a) in accel.into_iter().enumerate() {
//!     store.velocity[i] = clamp_speed(a, store.max_speed[i]);
//!     store.position[i] += store.velocity[i] * dt;
//! }
//! ```
//!
//! Plain `Vec`s keep the read phase a linear scan over contiguous memory and
//! let Rayon split the write phase into disjoint slices.

use sf_core::plane;
use sf_core::{AgentId, DestinationId, ProfileId, Tick, Vec3};

use crate::{ProfileError, ProfileResult, ProfileTable};

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
#[derive(Clone, Debug)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematics ────────────────────────────────────────────────────────
    pub position: Vec<Vec3>,

    /// Velocity after the last clamp, in units per second.
    pub velocity: Vec<Vec3>,

    /// Body radius.  Fixed for the agent's lifetime.
    pub radius: Vec<f32>,

    // ── Personality ───────────────────────────────────────────────────────
    /// Index into the session's `ProfileTable`.  Change only through
    /// [`set_profile`](Self::set_profile) so `max_speed` stays in sync.
    pub profile: Vec<ProfileId>,

    /// Velocity clamp, derived from the profile's desired speed.
    pub max_speed: Vec<f32>,

    // ── Destination cycle ─────────────────────────────────────────────────
    /// Destination currently being walked to.  `DestinationId::INVALID`
    /// until the engine assigns the first one.
    pub destination: Vec<DestinationId>,

    /// Set on the tick an arrival is reported; cleared once the navigator no
    /// longer reports the agent as arrived.  Keeps one arrival from being
    /// reported on several consecutive ticks.
    pub reached: Vec<bool>,

    /// Tick at which the current destination leg started.
    pub leg_start: Vec<Tick>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn speed(&self, agent: AgentId) -> f32 {
        self.velocity[agent.index()].length()
    }

    /// Facing yaw implied by the agent's velocity; `None` while standing.
    #[inline]
    pub fn heading(&self, agent: AgentId) -> Option<f32> {
        plane::heading(self.velocity[agent.index()])
    }

    /// Swap the agent's whole profile and re-derive its velocity clamp.
    ///
    /// Profiles are never edited in place; this is the only way an agent's
    /// coefficients change.
    pub fn set_profile(
        &mut self,
        agent:    AgentId,
        profile:  ProfileId,
        profiles: &ProfileTable,
    ) -> ProfileResult<()> {
        if agent.index() >= self.count {
            return Err(ProfileError::UnknownAgent(agent));
        }
        let desired_speed = profiles.require(profile)?.desired_speed;
        self.profile[agent.index()] = profile;
        self.max_speed[agent.index()] = desired_speed;
        Ok(())
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            count:       0,
            position:    Vec::with_capacity(capacity),
            velocity:    Vec::with_capacity(capacity),
            radius:      Vec::with_capacity(capacity),
            profile:     Vec::with_capacity(capacity),
            max_speed:   Vec::with_capacity(capacity),
            destination: Vec::with_capacity(capacity),
            reached:     Vec::with_capacity(capacity),
            leg_start:   Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(
        &mut self,
        position:  Vec3,
        velocity:  Vec3,
        radius:    f32,
        profile:   ProfileId,
        max_speed: f32,
    ) -> AgentId {
        let id = AgentId(self.count as u32);
        self.position.push(position);
        self.velocity.push(velocity);
        self.radius.push(radius);
        self.profile.push(profile);
        self.max_speed.push(max_speed);
        self.destination.push(DestinationId::INVALID);
        self.reached.push(false);
        self.leg_start.push(Tick::ZERO);
        self.count += 1;
        id
    }
}
