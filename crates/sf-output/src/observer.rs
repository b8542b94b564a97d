//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sf_agent::AgentStore;
use sf_core::{SimClock, SimConfig, Tick};
use sf_sim::{ArrivalEvent, SimObserver};

use crate::OutputError;
use crate::row::{AgentSnapshotRow, ArrivalRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes agent snapshots, arrivals and tick summaries
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for simulated
    /// time conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self { writer, clock: config.make_clock(), last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn time_secs(&self, tick: Tick) -> f32 {
        self.clock.secs_for_ticks(tick.0)
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_arrival(&mut self, event: &ArrivalEvent) {
        let row = ArrivalRow {
            tick:         event.tick.0,
            agent_id:     event.agent.0,
            profile:      event.profile.0,
            personality:  event.personality,
            destination:  event.destination.0,
            elapsed_secs: event.elapsed_secs,
        };
        let result = self.writer.write_arrival(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: Tick, arrivals: usize) {
        let row = TickSummaryRow {
            tick:      tick.0,
            time_secs: self.time_secs(tick),
            arrivals:  arrivals as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let time_secs = self.time_secs(tick);
        let rows: Vec<AgentSnapshotRow> = agents
            .agent_ids()
            .map(|agent| {
                let i = agent.index();
                let position = agents.position[i];
                let velocity = agents.velocity[i];
                AgentSnapshotRow {
                    agent_id: agent.0,
                    tick:     tick.0,
                    time_secs,
                    x:        position.x,
                    y:        position.y,
                    z:        position.z,
                    vx:       velocity.x,
                    vz:       velocity.z,
                    speed:    agents.speed(agent),
                    heading:  agents.heading(agent),
                    profile:  agents.profile[i].0,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
