//! `sf-sim` — tick loop orchestrator for the crowd simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Forces     — net acceleration per agent from a frozen snapshot
//!                  (parallel with the `parallel` feature):
//!                    driving + Σ obstacles + Σ agents + nearest wall + Σ attractors,
//!                    each scaled by the profile's weight
//!   ② Integrate  — velocity = clamp(acceleration, desired_speed)
//!                  position += velocity · dt
//!   ③ Arrivals   — in ascending AgentId order:
//!                    navigator says arrived → cycler picks next destination
//!                    first tick of an arrival → observer.on_arrival
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the force phase on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sf_agent::{AgentSpawn, AgentStoreBuilder, ProfileTable};
//! use sf_core::{ProfileId, SimConfig, Vec3};
//! use sf_env::{EnvironmentBuilder, StraightLineNavigator};
//! use sf_sim::{NoopObserver, SimBuilder};
//!
//! let profiles = ProfileTable::presets();
//! let agents = AgentStoreBuilder::new(0.5)
//!     .spawn(AgentSpawn::at(Vec3::ZERO, ProfileId(0)))
//!     .build(&profiles)?;
//! let env = EnvironmentBuilder::new().destination(Vec3::new(10.0, 0.0, 0.0)).build()?;
//! let mut sim = SimBuilder::new(SimConfig::default(), agents, profiles, env, StraightLineNavigator::default())
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
mod forces;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{ArrivalEvent, NoopObserver, SimObserver};
pub use sim::Sim;
