//! Interaction kernels.
//!
//! # Anisotropic repulsion
//!
//! [`pairwise_repulsion`] follows the heuristic pedestrian-interaction model:
//! the interaction direction `t` blends the relative velocity with the
//! direction to the other body,
//!
//! ```text
//! D = λ·(v_self − v_other) + e        e = unit vector self → other
//! B = γ·|D|                            interaction scale
//! t = D / |D|,  θ = ∠(t, e)
//! f = −A·exp(−d/B − (n'·B·θ)²)·t  −  A·sign(θ)·exp(−d/B − (n·B·θ)²)·n_t
//! ```
//!
//! where `n_t` is `t` rotated 90° in the ground plane.  The first term slows
//! the agent down along its line of approach; the second steers it sideways,
//! away from the side the other body is on.
//!
//! `sign(θ)` uses the vertical component of `t × e` (see
//! [`sf_core::plane::side_of`]), which agrees with the orientation of
//! [`sf_core::plane::perpendicular`], so the lateral term always pushes away
//! from the other body.  Bodies exactly ahead or exactly behind get no
//! lateral push.
//!
//! Beyond `range` the result is exactly zero.

use sf_core::Vec3;
use sf_core::plane::{perpendicular, planar, side_of, unsigned_angle};

/// Coefficients of one repulsion kernel evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Repulsion {
    /// Hard cutoff distance.
    pub range:               f32,
    /// Amplitude `A`.
    pub strength:            f32,
    /// Relative-velocity weight `λ`.
    pub direction_weight:    f32,
    /// Scale factor `γ`.
    pub range_dir_factor:    f32,
    /// Angular falloff `n` of the lateral term.
    pub angular_range:       f32,
    /// Angular falloff `n'` of the forward term.
    pub angular_range_large: f32,
}

/// Sign of the turn from `from` toward `to` given their unsigned `angle`.
///
/// 0 when `angle` is exactly 0 or the vectors are collinear, otherwise ±1
/// with +1 meaning `to` lies on the `perpendicular(from)` side.
#[inline]
pub fn angle_sign(angle: f32, from: Vec3, to: Vec3) -> f32 {
    if angle == 0.0 {
        return 0.0;
    }
    let side = side_of(from, to);
    if side > 0.0 {
        1.0
    } else if side < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Repulsion felt by a body at `self_pos` moving with `self_vel` from a body
/// at `other_pos` moving with `other_vel`.
///
/// Pass `Vec3::ZERO` as `other_vel` for static obstacles.
pub fn pairwise_repulsion(
    self_pos:  Vec3,
    self_vel:  Vec3,
    other_pos: Vec3,
    other_vel: Vec3,
    params:    &Repulsion,
) -> Vec3 {
    let to_other = planar(other_pos - self_pos);
    if to_other.length_squared() > params.range * params.range {
        return Vec3::ZERO;
    }

    // Coincident bodies have no direction to push along.
    let dir_to_other = to_other.normalize_or_zero();
    if dir_to_other == Vec3::ZERO {
        return Vec3::ZERO;
    }

    let interaction = params.direction_weight * planar(self_vel - other_vel) + dir_to_other;
    let scale = params.range_dir_factor * interaction.length();
    let direction = interaction.normalize_or_zero();

    // No interaction direction (or no scale) means no directional force.
    if direction == Vec3::ZERO || scale <= 0.0 {
        return Vec3::ZERO;
    }

    let angle = unsigned_angle(direction, dir_to_other);
    let sign = angle_sign(angle, direction, dir_to_other);
    let distance = to_other.length();

    let radial = -distance / scale;
    let forward_falloff = params.angular_range_large * scale * angle;
    let lateral_falloff = params.angular_range * scale * angle;

    let forward = -params.strength * (radial - forward_falloff * forward_falloff).exp();
    let lateral = -params.strength * sign * (radial - lateral_falloff * lateral_falloff).exp();

    forward * direction + lateral * perpendicular(direction)
}

/// Push away from `nearest_point` on a wall.
///
/// `d = |position − nearest_point| − radius`; magnitude `strength·exp(−d/range)`
/// along the planar direction from the wall to the agent.  There is no
/// cutoff: the force fades with distance but never reaches zero.
pub fn wall_repulsion(
    position:      Vec3,
    radius:        f32,
    range:         f32,
    strength:      f32,
    nearest_point: Vec3,
) -> Vec3 {
    if range <= 0.0 {
        return Vec3::ZERO;
    }
    let away = position - nearest_point;
    let gap = away.length() - radius;
    let magnitude = strength * (-gap / range).exp();
    planar(away).normalize_or_zero() * magnitude
}

/// Pull toward `attractor`, zero beyond `range`.
///
/// Magnitude `strength·exp((distance − radius)/range)` grows with distance up
/// to the cutoff, so the pull fades as the agent closes in instead of making
/// it orbit the attractor.
pub fn attraction(
    position:  Vec3,
    radius:    f32,
    range:     f32,
    strength:  f32,
    attractor: Vec3,
) -> Vec3 {
    let to_attractor = planar(attractor - position);
    if range <= 0.0 || to_attractor.length_squared() > range * range {
        return Vec3::ZERO;
    }
    let distance = to_attractor.length();
    let magnitude = strength * ((distance - radius) / range).exp();
    to_attractor.normalize_or_zero() * magnitude
}

/// Relaxation toward walking at `desired_speed` along `steering_direction`.
///
/// `(desired_speed·ê − velocity) / relaxation_time`.  A zero steering
/// direction relaxes the agent toward standing still.
#[inline]
pub fn driving_force(
    desired_speed:      f32,
    steering_direction: Vec3,
    velocity:           Vec3,
    relaxation_time:    f32,
) -> Vec3 {
    let desired = desired_speed * planar(steering_direction).normalize_or_zero();
    (desired - planar(velocity)) / relaxation_time
}
