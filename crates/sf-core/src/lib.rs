//! `sf-core` — foundational types for the social-force crowd simulator.
//!
//! This crate is a dependency of every other `sf-*` crate.  It has no `sf-*`
//! dependencies and only a handful of external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ProfileId`, `DestinationId`               |
//! | [`plane`]       | Ground-plane helpers over `glam::Vec3`                |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`personality`] | `PersonalityType` enum                                |
//! | [`error`]       | `SfError`, `SfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod personality;
pub mod plane;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use glam::Vec3;

pub use error::{SfError, SfResult};
pub use ids::{AgentId, DestinationId, ProfileId};
pub use personality::PersonalityType;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
