//! Fluent builder for constructing a [`Sim`].

use sf_agent::{AgentStore, ProfileError, ProfileTable};
use sf_core::{AgentId, SimConfig, Tick, Vec3};
use sf_env::{DestinationCycler, Environment, Navigator};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<N>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick duration, total ticks, seed, …
/// - [`AgentStore`] — from [`sf_agent::AgentStoreBuilder`]
/// - [`ProfileTable`] — every agent's `ProfileId` must resolve in it
/// - [`Environment`] — must contain at least one destination
/// - `N: Navigator` — e.g. [`sf_env::StraightLineNavigator`]
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                              |
/// |----------------|--------------------------------------|
/// | `.cycler(c)`   | `DestinationCycler::round_robin()`   |
///
/// # Example
///
/// ```rust,ignore
/// let profiles = ProfileTable::presets();
/// let agents = AgentStoreBuilder::new(0.5).spawn_all(spawns).build(&profiles)?;
/// let mut sim = SimBuilder::new(config, agents, profiles, environment, StraightLineNavigator::default())
///     .cycler(DestinationCycler::uniform_random(seed))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<N: Navigator> {
    config:      SimConfig,
    agents:      AgentStore,
    profiles:    ProfileTable,
    environment: Environment,
    navigator:   N,
    cycler:      Option<DestinationCycler>,
}

impl<N: Navigator> SimBuilder<N> {
    /// Create a builder with all required inputs.
    pub fn new(
        config:      SimConfig,
        agents:      AgentStore,
        profiles:    ProfileTable,
        environment: Environment,
        navigator:   N,
    ) -> Self {
        Self { config, agents, profiles, environment, navigator, cycler: None }
    }

    /// Choose the next-destination policy.
    pub fn cycler(mut self, cycler: DestinationCycler) -> Self {
        self.cycler = Some(cycler);
        self
    }

    /// Validate inputs, hand every agent its first destination, and return a
    /// ready-to-run [`Sim`].
    ///
    /// First destinations are drawn from the cycler in ascending `AgentId`
    /// order, so a round-robin cycler spreads agents over the destinations.
    pub fn build(self) -> SimResult<Sim<N>> {
        self.config.validate()?;

        let agent_count = self.agents.count;
        check_lengths(&self.agents)?;
        for &profile in &self.agents.profile {
            if self.profiles.get(profile).is_none() {
                tracing::warn!(%profile, "agent references a profile missing from the table");
                return Err(ProfileError::UnknownProfile(profile).into());
            }
        }

        let destination_count = self.environment.destination_count();
        if destination_count == 0 {
            tracing::warn!("environment has no destinations");
            return Err(SimError::NoDestinations);
        }

        let mut agents = self.agents;
        let mut navigator = self.navigator;
        let mut cycler = self.cycler.unwrap_or_default();

        for i in 0..agent_count {
            let next = cycler.next(destination_count);
            if let Some(point) = self.environment.destination(next) {
                navigator.set_destination(AgentId(i as u32), point);
                agents.destination[i] = next;
                agents.reached[i] = false;
                agents.leg_start[i] = Tick::ZERO;
            }
        }

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };

        tracing::info!(
            agents = agent_count,
            profiles = self.profiles.len(),
            destinations = destination_count,
            obstacles = self.environment.obstacles().len(),
            walls = self.environment.walls().len(),
            attractors = self.environment.attractors().len(),
            "simulation built"
        );

        Ok(Sim {
            clock:       self.config.make_clock(),
            config:      self.config,
            agents,
            profiles:    self.profiles,
            environment: self.environment,
            navigator,
            cycler,
            accel:       vec![Vec3::ZERO; agent_count],
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}

/// Every SoA column must have exactly `count` entries.
fn check_lengths(agents: &AgentStore) -> SimResult<()> {
    let columns = [
        ("positions", agents.position.len()),
        ("velocities", agents.velocity.len()),
        ("radii", agents.radius.len()),
        ("profiles", agents.profile.len()),
        ("max speeds", agents.max_speed.len()),
        ("destinations", agents.destination.len()),
        ("reached flags", agents.reached.len()),
        ("leg starts", agents.leg_start.len()),
    ];
    for (what, got) in columns {
        if got != agents.count {
            return Err(SimError::AgentCountMismatch { expected: agents.count, got, what });
        }
    }
    Ok(())
}
