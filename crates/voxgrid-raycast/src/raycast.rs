//! Grid-line to grid-line voxel raycast.
//!
//! The ray advances from one grid plane crossing to the next (in the spirit
//! of Amanatides & Woo), so every cell it passes through is visited and
//! thin occupied cells cannot be tunnelled through. Each advance overshoots
//! the nearest plane by a small epsilon so that a ray landing exactly on a
//! boundary always ends up in the next cell.
//!
//! References:
//! - "A Fast Voxel Traversal Algorithm for Ray Tracing" by John Amanatides & Andrew Woo

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::trace;
use voxgrid_core::{Face, Ray, WorldPos};
use voxgrid_volume::VoxelVolume;

/// Traversal limits and tolerances.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaycastConfig {
    /// Stop once this much distance has been travelled.
    pub max_distance: f32,
    /// Stop after this many steps regardless of distance.
    pub max_iterations: u32,
    /// Overshoot added to every step.
    pub epsilon: f32,
    /// Axis speeds below this never reach a grid plane.
    pub min_speed: f32,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            max_distance: 32.0,
            max_iterations: 100,
            epsilon: 0.01,
            min_speed: 0.001,
        }
    }
}

impl RaycastConfig {
    /// Set the distance budget.
    #[must_use]
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the step budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Outcome of one raycast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastResult {
    /// An occupied cell was reached.
    pub hit: bool,
    /// The cell containing the ray origin lies inside the volume.
    ///
    /// Rays that start inside stop as soon as they leave the volume; rays
    /// that start outside keep travelling until a budget runs out.
    pub started_in_bounds: bool,
    /// The hit cell, or the last cell visited before the traversal stopped.
    pub voxel: WorldPos,
    /// Face of `voxel` the ray came in through. `None` until the ray first
    /// changes cell.
    pub hit_face: Option<Face>,
    /// Distance travelled along the normalized direction.
    pub distance: f32,
}

impl RaycastResult {
    /// The occupied cell that was struck.
    pub fn hit_cell(&self) -> Option<WorldPos> {
        self.hit.then_some(self.voxel)
    }

    /// The cell in front of the struck face, where a new block would go.
    ///
    /// `None` without a hit, or when that cell lies past the `i32` range.
    pub fn adjacent_cell(&self) -> Option<WorldPos> {
        match (self.hit, self.hit_face) {
            (true, Some(face)) => self.voxel.neighbor(face),
            _ => None,
        }
    }
}

/// Time until a coordinate moving at `speed` reaches its next grid plane.
fn until_grid_line(coord: f32, speed: f32, min_speed: f32) -> f32 {
    if speed.abs() < min_speed {
        return f32::INFINITY;
    }
    if speed > 0.0 {
        (coord.ceil() - coord) / speed
    } else {
        (coord - coord.floor()) / -speed
    }
}

/// Face of `next` that a ray moving from `prev` came in through.
///
/// Axes are checked x, then y, then z.
fn entry_face(prev: WorldPos, next: WorldPos) -> Option<Face> {
    use std::cmp::Ordering::{Greater, Less};

    match (
        next.x.cmp(&prev.x),
        next.y.cmp(&prev.y),
        next.z.cmp(&prev.z),
    ) {
        (Greater, _, _) => Some(Face::Left),
        (Less, _, _) => Some(Face::Right),
        (_, Greater, _) => Some(Face::Bottom),
        (_, Less, _) => Some(Face::Top),
        (_, _, Greater) => Some(Face::Back),
        (_, _, Less) => Some(Face::Front),
        _ => None,
    }
}

/// Cast a ray through `volume` with the default limits.
///
/// `direction` need not be normalized. A zero direction makes no progress
/// and returns a miss immediately.
pub fn raycast(volume: &VoxelVolume, origin: Vec3, direction: Vec3) -> RaycastResult {
    raycast_with(volume, origin, direction, &RaycastConfig::default())
}

/// Cast a ray through `volume` with explicit limits.
pub fn raycast_with(
    volume: &VoxelVolume,
    origin: Vec3,
    direction: Vec3,
    config: &RaycastConfig,
) -> RaycastResult {
    let start = WorldPos::containing(origin);
    let mut result = RaycastResult {
        hit: false,
        started_in_bounds: volume.in_bounds(start),
        voxel: start,
        hit_face: None,
        distance: 0.0,
    };

    let Some(ray) = Ray::new(origin, direction) else {
        trace!(%start, "degenerate ray direction");
        return result;
    };

    let mut position = ray.origin;
    let mut iterations = 0;
    while result.distance < config.max_distance && iterations < config.max_iterations {
        iterations += 1;

        let step = until_grid_line(position.x, ray.direction.x, config.min_speed)
            .min(until_grid_line(position.y, ray.direction.y, config.min_speed))
            .min(until_grid_line(position.z, ray.direction.z, config.min_speed))
            + config.epsilon;
        if !step.is_finite() {
            break;
        }
        result.distance += step;
        position += ray.direction * step;

        let cell = WorldPos::containing(position);
        trace!(%cell, distance = result.distance, "raycast step");

        if result.started_in_bounds && !volume.in_bounds(cell) {
            return result;
        }
        if let Some(face) = entry_face(result.voxel, cell) {
            result.hit_face = Some(face);
        }
        result.voxel = cell;

        if volume.contains_occupied(cell) {
            result.hit = true;
            return result;
        }
    }

    result
}
