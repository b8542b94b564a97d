//! Simulation observer trait for progress reporting and data collection.

use sf_agent::AgentStore;
use sf_core::{AgentId, DestinationId, PersonalityType, ProfileId, Tick};

/// An agent finished a destination leg.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrivalEvent {
    pub agent:        AgentId,
    pub profile:      ProfileId,
    pub personality:  PersonalityType,
    /// The destination that was reached.
    pub destination:  DestinationId,
    /// Tick during which the arrival was detected.
    pub tick:         Tick,
    /// Simulated time spent on the leg.
    pub elapsed_secs: f32,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — arrival counter
///
/// ```rust,ignore
/// struct Arrivals(usize);
///
/// impl SimObserver for Arrivals {
///     fn on_arrival(&mut self, _event: &ArrivalEvent) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per arrival, in ascending `AgentId` order, during the
    /// sequential apply phase.
    fn on_arrival(&mut self, _event: &ArrivalEvent) {}

    /// Called at the end of each tick.
    ///
    /// `arrivals` is the number of arrivals reported this tick.
    fn on_tick_end(&mut self, _tick: Tick, _arrivals: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to the agent state after integration so
    /// output writers can record positions without the sim knowing about any
    /// output format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
