//! `sf-force` — the social-force interaction kernels.
//!
//! Every function here is pure: inputs in, one force vector out, no state
//! and no errors.  Degenerate geometry (coincident points, zero-length
//! directions, zero ranges) yields the zero vector instead of NaN.
//!
//! | Function                 | Force                                            |
//! |--------------------------|--------------------------------------------------|
//! | [`pairwise_repulsion`]   | anisotropic repulsion from an agent or obstacle  |
//! | [`wall_repulsion`]       | exponential push away from the nearest wall point|
//! | [`attraction`]           | pull toward a point of interest                  |
//! | [`driving_force`]        | relaxation toward the desired walking velocity   |
//!
//! All forces lie in the ground plane (`y = 0`).

pub mod kernel;


pub use kernel::{
    Repulsion, angle_sign, attraction, driving_force, pairwise_repulsion, wall_repulsion,
};
