//! Wall primitives.
//!
//! The force model only needs one thing from a wall: the point on it closest
//! to a query position.  Each variant answers that in closed form.

use sf_core::Vec3;

/// A static wall.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Wall {
    /// A thin wall between two points.
    Segment { start: Vec3, end: Vec3 },
    /// A solid axis-aligned block.  Points inside it are their own nearest
    /// point.
    Box { min: Vec3, max: Vec3 },
}

impl Wall {
    /// Axis-aligned block from any two opposite corners.
    pub fn block(a: Vec3, b: Vec3) -> Self {
        Wall::Box { min: a.min(b), max: a.max(b) }
    }

    /// Point on the wall nearest to `query`.
    pub fn nearest_point(&self, query: Vec3) -> Vec3 {
        match *self {
            Wall::Segment { start, end } => {
                let along = end - start;
                let len_sq = along.length_squared();
                if len_sq == 0.0 {
                    return start;
                }
                let t = ((query - start).dot(along) / len_sq).clamp(0.0, 1.0);
                start + along * t
            }
            Wall::Box { min, max } => query.clamp(min, max),
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        match *self {
            Wall::Segment { start, end } => start.is_finite() && end.is_finite(),
            Wall::Box { min, max } => min.is_finite() && max.is_finite(),
        }
    }

    /// `false` for a box whose `min` exceeds `max` on some axis.
    pub(crate) fn is_ordered(&self) -> bool {
        match *self {
            Wall::Segment { .. } => true,
            Wall::Box { min, max } => min.cmple(max).all(),
        }
    }
}
