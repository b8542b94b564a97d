//! Plain data row types written by output backends.

use sf_core::PersonalityType;

/// A snapshot of one agent's kinematic state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub time_secs: f32,
    pub x:        f32,
    pub y:        f32,
    pub z:        f32,
    pub vx:       f32,
    pub vz:       f32,
    pub speed:    f32,
    /// Facing yaw in radians; `None` while the agent stands still.
    pub heading:  Option<f32>,
    pub profile:  u16,
}

/// One completed destination leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrivalRow {
    pub tick:         u64,
    pub agent_id:     u32,
    pub profile:      u16,
    pub personality:  PersonalityType,
    pub destination:  u32,
    pub elapsed_secs: f32,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:      u64,
    pub time_secs: f32,
    pub arrivals:  u64,
}
