//! `sf-env` — the static world agents move through.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`environment`] | `Environment` (R-tree indexed), `EnvironmentBuilder`       |
//! | [`wall`]        | `Wall` primitives and nearest-point queries                |
//! | [`cycler`]      | `DestinationCycler` (uniform random / round-robin)         |
//! | [`navigation`]  | `Navigator` trait, `StraightLineNavigator`                 |
//! | [`error`]       | `EnvError`, `EnvResult<T>`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Wall`.                 |

pub mod cycler;
pub mod environment;
pub mod error;
pub mod navigation;
pub mod wall;


pub use cycler::DestinationCycler;
pub use environment::{Environment, EnvironmentBuilder};
pub use error::{EnvError, EnvResult};
pub use navigation::{DEFAULT_STOPPING_DISTANCE, Navigator, StraightLineNavigator};
pub use wall::Wall;
