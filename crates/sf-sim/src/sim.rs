//! The `Sim` struct and its tick loop.

use sf_agent::{AgentStore, ProfileTable};
use sf_core::plane::clamp_speed;
use sf_core::{AgentId, ProfileId, SimClock, SimConfig, Tick, Vec3};
use sf_env::{DestinationCycler, Environment, Navigator, StraightLineNavigator};

use crate::forces::{ForceContext, Scratch, compute_accelerations};
use crate::{ArrivalEvent, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<N>` holds all simulation state and drives the three-phase tick loop:
///
/// 1. **Force phase** (optionally parallel with the `parallel` feature): the
///    net acceleration of every agent is computed from a frozen snapshot of
///    positions and velocities into a scratch buffer.
/// 2. **Integrate** (write phase): `velocity = clamp(acceleration,
///    desired_speed)`, then `position += velocity · dt`.  The clamp acts on
///    the raw acceleration and the tick duration is applied afterwards.
/// 3. **Arrivals** (sequential, ascending `AgentId` for determinism): agents
///    the navigator reports as arrived get their next destination from the
///    cycler, and first arrivals are reported to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<N: Navigator = StraightLineNavigator> {
    /// Global configuration (tick duration, total ticks, seed, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to simulated time.
    pub clock: SimClock,

    /// Agent state (SoA arrays).
    pub agents: AgentStore,

    /// Personality profiles, indexed by each agent's `ProfileId`.
    pub profiles: ProfileTable,

    /// Static obstacles, walls, destinations and attractors.
    pub environment: Environment,

    /// Steering targets and arrival detection.
    pub navigator: N,

    /// Next-destination policy shared by all agents.
    pub cycler: DestinationCycler,

    /// Per-agent acceleration from the force phase, reused every tick.
    pub(crate) accel: Vec<Vec3>,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<N: Navigator> Sim<N> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.step(now, observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        tracing::info!(tick = %self.clock.current_tick, "simulation finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.step(now, observer);
        }
        Ok(())
    }

    /// Net acceleration currently acting on `agent`, before the clamp.
    ///
    /// Recomputes the force sum from the present state; the tick loop does
    /// not need to have run.
    pub fn net_acceleration(&self, agent: AgentId) -> Vec3 {
        let ctx = ForceContext::new(
            &self.config,
            &self.agents,
            &self.profiles,
            &self.environment,
            &self.navigator,
        );
        ctx.net_acceleration(agent.index(), &mut Scratch::default())
    }

    /// Swap `agent` to another profile of the session's table.
    pub fn set_profile(&mut self, agent: AgentId, profile: ProfileId) -> SimResult<()> {
        self.agents.set_profile(agent, profile, &self.profiles)?;
        Ok(())
    }

    /// Rewind the round-robin cursor, e.g. when a timing session begins.
    pub fn reset_cycler(&mut self) {
        self.cycler.reset();
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        observer.on_tick_start(now);
        let arrivals = self.process_tick(now, observer);
        observer.on_tick_end(now, arrivals);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents);
        }
        self.clock.advance();
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        if self.agents.is_empty() {
            return 0;
        }

        // ── Phase 1: force phase (read) ───────────────────────────────────
        //
        // Field borrows, not `&self`: the context reads agent state while
        // `accel` is written.
        let ctx = ForceContext::new(
            &self.config,
            &self.agents,
            &self.profiles,
            &self.environment,
            &self.navigator,
        );
        let accel = &mut self.accel;

        #[cfg(feature = "parallel")]
        match &self.pool {
            Some(pool) => pool.install(|| compute_accelerations(&ctx, accel)),
            None => compute_accelerations(&ctx, accel),
        }
        #[cfg(not(feature = "parallel"))]
        compute_accelerations(&ctx, accel);

        // ── Phase 2: integrate (write) ────────────────────────────────────
        let dt = self.clock.tick_duration_secs;
        for (i, &acc) in self.accel.iter().enumerate() {
            let velocity = clamp_speed(acc, self.agents.max_speed[i]);
            self.agents.velocity[i] = velocity;
            self.agents.position[i] += velocity * dt;
        }

        // ── Phase 3: arrivals (sequential, ascending AgentId) ─────────────
        let arrivals = self.apply_arrivals(now, observer);
        tracing::trace!(tick = %now, arrivals, "tick complete");
        arrivals
    }

    /// Hand arrived agents their next destination and report first arrivals.
    ///
    /// `reached` latches on the first tick an agent is reported as arrived
    /// and clears once the navigator stops reporting it, so lingering inside
    /// the stopping distance produces a single event.  A new destination is
    /// requested on every arrived tick regardless of the latch.
    fn apply_arrivals<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let destination_count = self.environment.destination_count();
        let leg_end = now.offset(1);
        let mut arrivals = 0;

        for i in 0..self.agents.count {
            let agent = AgentId(i as u32);
            if !self.navigator.has_arrived(agent, self.agents.position[i]) {
                self.agents.reached[i] = false;
                continue;
            }

            if !self.agents.reached[i] {
                let profile = self.agents.profile[i];
                let event = ArrivalEvent {
                    agent,
                    profile,
                    personality:  self.profiles[profile].personality,
                    destination:  self.agents.destination[i],
                    tick:         now,
                    elapsed_secs: self.clock.secs_for_ticks(leg_end.since(self.agents.leg_start[i])),
                };
                tracing::debug!(
                    agent = %agent,
                    destination = %event.destination,
                    elapsed_secs = event.elapsed_secs,
                    "agent arrived"
                );
                observer.on_arrival(&event);
                self.agents.reached[i] = true;
                self.agents.leg_start[i] = leg_end;
                arrivals += 1;
            }

            let next = self.cycler.next(destination_count);
            if let Some(point) = self.environment.destination(next) {
                self.navigator.set_destination(agent, point);
                self.agents.destination[i] = next;
            }
        }
        arrivals
    }
}
