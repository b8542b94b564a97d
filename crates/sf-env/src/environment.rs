//! The static environment and its builder.
//!
//! # Data layout
//!
//! Obstacles, walls, destinations and attractors are stored in plain `Vec`s
//! in registration order; that order is their identity (`DestinationId`,
//! obstacle index, …) and the tie-break order of every query.
//!
//! # Spatial index
//!
//! Two R-trees (via `rstar`) index obstacle and attractor positions on the
//! ground plane (`[x, z]`).  Range queries return indices sorted ascending,
//! so summing forces over the result visits entities in the same order a
//! linear scan would and trajectories stay bit-identical whichever path is
//! used.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use sf_core::{DestinationId, Vec3};

use crate::{EnvError, EnvResult, Wall};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// A ground-plane `[x, z]` point tagged with its registration index.
#[derive(Clone, Debug)]
struct IndexedPoint {
    point: [f32; 2],
    index: u32,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for IndexedPoint {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dz = self.point[1] - point[1];
        dx * dx + dz * dz
    }
}

fn index_points(points: &[Vec3]) -> RTree<IndexedPoint> {
    let entries = points
        .iter()
        .enumerate()
        .map(|(i, p)| IndexedPoint { point: [p.x, p.z], index: i as u32 })
        .collect();
    RTree::bulk_load(entries)
}

fn within(tree: &RTree<IndexedPoint>, position: Vec3, range: f32, out: &mut Vec<usize>) {
    out.clear();
    if range < 0.0 {
        return;
    }
    out.extend(
        tree.locate_within_distance([position.x, position.z], range * range)
            .map(|e| e.index as usize),
    );
    out.sort_unstable();
}

// ── Environment ───────────────────────────────────────────────────────────────

/// Read-only registry of everything agents interact with besides each other.
///
/// Built once per session with [`EnvironmentBuilder`] and shared by reference
/// for the rest of the run.
#[derive(Debug)]
pub struct Environment {
    obstacles:      Vec<Vec3>,
    walls:          Vec<Wall>,
    destinations:   Vec<Vec3>,
    attractors:     Vec<Vec3>,
    obstacle_index:  RTree<IndexedPoint>,
    attractor_index: RTree<IndexedPoint>,
}

impl Environment {
    /// An environment with nothing in it.
    pub fn empty() -> Self {
        EnvironmentBuilder::new()
            .build()
            .unwrap_or_else(|_| unreachable!("an empty environment is always valid"))
    }

    pub fn obstacles(&self) -> &[Vec3] {
        &self.obstacles
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn destinations(&self) -> &[Vec3] {
        &self.destinations
    }

    pub fn attractors(&self) -> &[Vec3] {
        &self.attractors
    }

    #[inline]
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    #[inline]
    pub fn destination(&self, id: DestinationId) -> Option<Vec3> {
        self.destinations.get(id.index()).copied()
    }

    /// Nearest point over all walls and its squared distance to `position`.
    ///
    /// Linear scan in registration order; on equal distances the first wall
    /// wins.  `None` when there are no walls.
    pub fn nearest_wall(&self, position: Vec3) -> Option<(Vec3, f32)> {
        let mut best: Option<(Vec3, f32)> = None;
        for wall in &self.walls {
            let point = wall.nearest_point(position);
            let dist_sq = (position - point).length_squared();
            match best {
                Some((_, best_sq)) if dist_sq >= best_sq => {}
                _ => best = Some((point, dist_sq)),
            }
        }
        best
    }

    /// Indices of obstacles within `range` of `position` on the ground plane,
    /// ascending.  Overwrites `out`.
    pub fn obstacles_within(&self, position: Vec3, range: f32, out: &mut Vec<usize>) {
        within(&self.obstacle_index, position, range, out);
    }

    /// Indices of attractors within `range` of `position` on the ground
    /// plane, ascending.  Overwrites `out`.
    pub fn attractors_within(&self, position: Vec3, range: f32, out: &mut Vec<usize>) {
        within(&self.attractor_index, position, range, out);
    }
}

// ── EnvironmentBuilder ────────────────────────────────────────────────────────

/// Incremental builder for [`Environment`].
///
/// Entities keep the order they were added in.
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    obstacles:    Vec<Vec3>,
    walls:        Vec<Wall>,
    destinations: Vec<Vec3>,
    attractors:   Vec<Vec3>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obstacle(mut self, position: Vec3) -> Self {
        self.obstacles.push(position);
        self
    }

    pub fn wall(mut self, wall: Wall) -> Self {
        self.walls.push(wall);
        self
    }

    /// Register a destination; ids are assigned in call order.
    pub fn destination(mut self, position: Vec3) -> Self {
        self.destinations.push(position);
        self
    }

    pub fn attractor(mut self, position: Vec3) -> Self {
        self.attractors.push(position);
        self
    }

    pub fn obstacles(mut self, positions: impl IntoIterator<Item = Vec3>) -> Self {
        self.obstacles.extend(positions);
        self
    }

    pub fn walls(mut self, walls: impl IntoIterator<Item = Wall>) -> Self {
        self.walls.extend(walls);
        self
    }

    pub fn destinations(mut self, positions: impl IntoIterator<Item = Vec3>) -> Self {
        self.destinations.extend(positions);
        self
    }

    pub fn attractors(mut self, positions: impl IntoIterator<Item = Vec3>) -> Self {
        self.attractors.extend(positions);
        self
    }

    /// Validate coordinates and build the spatial indices.
    pub fn build(self) -> EnvResult<Environment> {
        check_points("obstacle", &self.obstacles)?;
        check_points("destination", &self.destinations)?;
        check_points("attractor", &self.attractors)?;
        for (index, wall) in self.walls.iter().enumerate() {
            if !wall.is_finite() {
                return Err(EnvError::NonFinite { kind: "wall", index });
            }
            if !wall.is_ordered() {
                return Err(EnvError::InvertedBox(index));
            }
        }

        Ok(Environment {
            obstacle_index:  index_points(&self.obstacles),
            attractor_index: index_points(&self.attractors),
            obstacles:       self.obstacles,
            walls:           self.walls,
            destinations:    self.destinations,
            attractors:      self.attractors,
        })
    }
}

fn check_points(kind: &'static str, points: &[Vec3]) -> EnvResult<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(EnvError::NonFinite { kind, index }),
        None => Ok(()),
    }
}
