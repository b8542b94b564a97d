//! Arrival-timing recording sessions.
//!
//! A session measures how long agents take to walk each destination leg.
//! It keeps the most recent leg time per destination and closes itself after
//! `destination_count + 1` arrivals, enough for one full pass over the
//! destinations plus the leg that started before the session did.

use sf_core::{DestinationId, PersonalityType, Tick};
use sf_sim::{ArrivalEvent, SimObserver};

/// The latest leg time recorded for one destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedTime {
    pub personality:  PersonalityType,
    pub elapsed_secs: f32,
}

/// A [`SimObserver`] that records leg times while a session is open.
///
/// Pair [`start`](Self::start) with `Sim::reset_cycler` so the round-robin
/// order restarts along with the session.
#[derive(Debug, Clone)]
pub struct ArrivalRecorder {
    times:        Vec<Option<RecordedTime>>,
    recorded:     usize,
    recording:    bool,
    completed_at: Option<Tick>,
}

impl ArrivalRecorder {
    /// A closed recorder with one slot per destination.
    pub fn new(destination_count: usize) -> Self {
        Self {
            times:        vec![None; destination_count],
            recorded:     0,
            recording:    false,
            completed_at: None,
        }
    }

    /// Open a new session, discarding the previous one's count.
    pub fn start(&mut self) {
        self.recording = true;
        self.recorded = 0;
        self.completed_at = None;
        tracing::info!(destinations = self.times.len(), "recording started");
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Arrivals recorded in the current (or last) session.
    #[inline]
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    /// Tick of the arrival that closed the last session.
    #[inline]
    pub fn completed_at(&self) -> Option<Tick> {
        self.completed_at
    }

    /// Latest time per destination, indexed by `DestinationId`.
    pub fn times(&self) -> &[Option<RecordedTime>] {
        &self.times
    }

    pub fn time_for(&self, destination: DestinationId) -> Option<RecordedTime> {
        self.times.get(destination.index()).copied().flatten()
    }

    /// Record one arrival.  Returns `false` when no session is open or the
    /// destination has no slot.
    pub fn record(&mut self, event: &ArrivalEvent) -> bool {
        if !self.recording {
            return false;
        }
        let Some(slot) = self.times.get_mut(event.destination.index()) else {
            tracing::warn!(destination = %event.destination, "arrival at unknown destination ignored");
            return false;
        };
        *slot = Some(RecordedTime {
            personality:  event.personality,
            elapsed_secs: event.elapsed_secs,
        });
        self.recorded += 1;

        if self.recorded == self.times.len() + 1 {
            self.recording = false;
            self.completed_at = Some(event.tick);
            tracing::info!(tick = %event.tick, arrivals = self.recorded, "recording complete");
        }
        true
    }
}

impl SimObserver for ArrivalRecorder {
    fn on_arrival(&mut self, event: &ArrivalEvent) {
        self.record(event);
    }
}
