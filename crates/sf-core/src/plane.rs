//! Ground-plane vector helpers.
//!
//! Positions and velocities are `glam::Vec3` with `y` pointing up.  Agents
//! move on the `x`/`z` plane; every horizontal force discards the vertical
//! component of its inputs through [`planar`].
//!
//! Orientation convention: looking down the `y` axis, "left of `d`" is the
//! side [`perpendicular`] points to, and [`side_of`] is positive for vectors
//! on that side.  The force kernel relies on both agreeing.

use glam::Vec3;

/// `v` with its vertical component zeroed.
#[inline]
pub fn planar(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// 90° rotation of `dir` within the ground plane.
///
/// `(x, y, z) → (−z, y, x)`; `y` passes through untouched so an already
/// planar input stays planar.
#[inline]
pub fn perpendicular(dir: Vec3) -> Vec3 {
    Vec3::new(-dir.z, dir.y, dir.x)
}

/// Vertical component of `from × to` with the sign flipped to match
/// [`perpendicular`]: positive when `to` lies on the `perpendicular(from)`
/// side, negative on the opposite side, zero when collinear.
#[inline]
pub fn side_of(from: Vec3, to: Vec3) -> f32 {
    from.x * to.z - from.z * to.x
}

/// Unsigned angle between two unit vectors, in radians.
///
/// Returns 0 when either input is the zero vector.
#[inline]
pub fn unsigned_angle(a: Vec3, b: Vec3) -> f32 {
    if a == Vec3::ZERO || b == Vec3::ZERO {
        return 0.0;
    }
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// Rescale `v` to length `max` when `|v|² > max²`; otherwise return it as is.
#[inline]
pub fn clamp_speed(v: Vec3, max: f32) -> Vec3 {
    if v.length_squared() > max * max {
        v.normalize_or_zero() * max
    } else {
        v
    }
}

/// Facing yaw (radians about `y`, 0 = `+z`) implied by a velocity.
///
/// Returns `None` for a zero planar velocity, where facing is undefined.
#[inline]
pub fn heading(velocity: Vec3) -> Option<f32> {
    let flat = planar(velocity);
    if flat == Vec3::ZERO {
        None
    } else {
        Some(flat.x.atan2(flat.z))
    }
}
