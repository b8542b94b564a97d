//! Simulation time model.
//!
//! Time advances in fixed-size ticks (one physics frame each).  The canonical
//! time unit is the integer `Tick`; simulated seconds are derived from it:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! Deriving seconds from an integer counter instead of accumulating floats
//! keeps elapsed-time measurements identical between runs of different
//! lengths.

use std::fmt;

/// Fixed physics step used by the reference scenes (50 Hz).
pub const DEFAULT_TICK_DURATION_SECS: f32 = 0.02;

/// Relaxation time of the driving force, in seconds.
pub const DEFAULT_RELAXATION_TIME_SECS: f32 = 0.54;

/// Body radius given to agents that do not specify one.
pub const DEFAULT_AGENT_RADIUS: f32 = 0.5;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts tick counts to simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds per tick.
    pub tick_duration_secs: f32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: f32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated seconds spanned by `ticks` ticks.
    #[inline]
    pub fn secs_for_ticks(&self, ticks: u64) -> f32 {
        (ticks as f64 * self.tick_duration_secs as f64) as f32
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.secs_for_ticks(self.current_tick.0)
    }

    /// How many ticks span `secs` seconds (rounds up).
    pub fn ticks_for_secs(&self, secs: f32) -> u64 {
        if self.tick_duration_secs <= 0.0 {
            return 0;
        }
        (secs / self.tick_duration_secs).ceil().max(0.0) as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Simulated seconds per tick.  Must be positive.
    pub tick_duration_secs: f32,

    /// Total ticks to simulate with [`run`](../sf_sim/struct.Sim.html).
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count for the parallel force phase.  `None` uses all
    /// logical cores.  Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,

    /// Take a position snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Relaxation time of the driving force, in seconds.  Must be positive.
    pub relaxation_time_secs: f32,

    /// Radius assigned to agents spawned without an explicit radius.
    pub default_agent_radius: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs:    DEFAULT_TICK_DURATION_SECS,
            total_ticks:           3_000,
            seed:                  0,
            num_threads:           None,
            output_interval_ticks: 0,
            relaxation_time_secs:  DEFAULT_RELAXATION_TIME_SECS,
            default_agent_radius:  DEFAULT_AGENT_RADIUS,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    /// Reject configurations the tick loop cannot integrate.
    pub fn validate(&self) -> crate::SfResult<()> {
        if !(self.tick_duration_secs.is_finite() && self.tick_duration_secs > 0.0) {
            return Err(crate::SfError::Config(format!(
                "tick_duration_secs must be positive, got {}",
                self.tick_duration_secs
            )));
        }
        if !(self.relaxation_time_secs.is_finite() && self.relaxation_time_secs > 0.0) {
            return Err(crate::SfError::Config(format!(
                "relaxation_time_secs must be positive, got {}",
                self.relaxation_time_secs
            )));
        }
        if !(self.default_agent_radius.is_finite() && self.default_agent_radius >= 0.0) {
            return Err(crate::SfError::Config(format!(
                "default_agent_radius must be non-negative, got {}",
                self.default_agent_radius
            )));
        }
        Ok(())
    }
}
