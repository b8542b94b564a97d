//! `sf-agent` — personality profiles and Structure-of-Arrays agent storage.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`profile`]     | `PersonalityProfile`, `ForceTerm`, `InteractionShape`, `ProfileTable` |
//! | [`loader`]      | `load_profiles_csv` / `load_profiles_reader`              |
//! | [`store`]       | `AgentStore` (SoA arrays)                                 |
//! | [`builder`]     | `AgentStoreBuilder`, `AgentSpawn`                         |
//! | [`error`]       | `ProfileError`, `ProfileResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on profile types.        |

pub mod builder;
pub mod error;
pub mod loader;
pub mod profile;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::{AgentSpawn, AgentStoreBuilder};
pub use error::{ProfileError, ProfileResult};
pub use loader::{load_profiles_csv, load_profiles_reader};
pub use profile::{ForceTerm, InteractionShape, PersonalityProfile, ProfileTable};
pub use store::AgentStore;
