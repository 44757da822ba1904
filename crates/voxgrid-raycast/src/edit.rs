//! Turning a raycast into a voxel edit.
//!
//! Removal targets the struck cell. Placement targets the cell in front of
//! the struck face, i.e. the empty cell the ray passed through last. A
//! placement ray that hits nothing may still drop a block onto the lowest
//! layer of the volume when the traversal ended there.

use glam::Vec3;
use tracing::{debug, warn};
use voxgrid_core::{BlockId, Result, Voxel, WorldPos};
use voxgrid_volume::{SharedVolume, VoxelVolume};

use crate::raycast::{raycast_with, RaycastConfig, RaycastResult};

/// What the user wants to do to the picked cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditIntent {
    /// Put a block against the struck face.
    Place(BlockId),
    /// Clear the struck cell.
    Remove,
}

impl EditIntent {
    /// The voxel written to the target cell.
    #[must_use]
    pub const fn voxel(self) -> Voxel {
        match self {
            Self::Place(block) => Voxel::new(block),
            Self::Remove => Voxel::EMPTY,
        }
    }
}

/// A performed edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    /// The cell that was written.
    pub target: WorldPos,
    /// Its contents before the edit.
    pub previous: Voxel,
    /// Its contents after the edit.
    pub current: Voxel,
}

impl EditOutcome {
    /// Returns `true` if the edit changed the cell.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// The cell an edit should write, if any.
pub fn resolve_target(
    volume: &VoxelVolume,
    result: &RaycastResult,
    intent: EditIntent,
) -> Option<WorldPos> {
    match intent {
        EditIntent::Remove => result.hit_cell(),
        EditIntent::Place(_) if result.hit => result.adjacent_cell(),
        EditIntent::Place(_) => {
            let on_floor = result.voxel.y == volume.bounds().min.y;
            (on_floor && volume.in_bounds(result.voxel)).then_some(result.voxel)
        }
    }
}

/// Write the resolved target of an already computed raycast.
///
/// Returns `Ok(None)` when there is nothing to edit. A target outside the
/// volume (placing against the outer face of a boundary cell) is an error.
pub fn apply_resolved(
    volume: &mut VoxelVolume,
    result: &RaycastResult,
    intent: EditIntent,
) -> Result<Option<EditOutcome>> {
    let Some(target) = resolve_target(volume, result, intent) else {
        debug!(?intent, voxel = %result.voxel, hit = result.hit, "no edit target");
        return Ok(None);
    };

    let current = intent.voxel();
    let previous = volume.set(target, current).inspect_err(|err| {
        warn!(?intent, %target, %err, "edit target rejected");
    })?;
    debug!(?intent, %target, "applied edit");

    Ok(Some(EditOutcome {
        target,
        previous,
        current,
    }))
}

/// Raycast from `origin` along `direction` and apply `intent` to the result.
pub fn apply_edit(
    volume: &mut VoxelVolume,
    origin: Vec3,
    direction: Vec3,
    intent: EditIntent,
) -> Result<Option<EditOutcome>> {
    apply_edit_with(volume, origin, direction, intent, &RaycastConfig::default())
}

/// [`apply_edit`] with explicit raycast limits.
pub fn apply_edit_with(
    volume: &mut VoxelVolume,
    origin: Vec3,
    direction: Vec3,
    intent: EditIntent,
    config: &RaycastConfig,
) -> Result<Option<EditOutcome>> {
    let result = raycast_with(volume, origin, direction, config);
    apply_resolved(volume, &result, intent)
}

/// Pick and edit a shared volume under a single write guard.
pub fn apply_edit_shared(
    volume: &SharedVolume,
    origin: Vec3,
    direction: Vec3,
    intent: EditIntent,
) -> Result<Option<EditOutcome>> {
    volume.with_write(|volume| apply_edit(volume, origin, direction, intent))
}
