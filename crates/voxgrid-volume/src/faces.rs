//! Exposed-face queries for mesh building.

use voxgrid_core::{Face, FaceSet, WorldPos};

use crate::volume::VoxelVolume;

impl VoxelVolume {
    /// Faces of the cell at `pos` whose neighbor is not occupied.
    ///
    /// Neighbors outside the volume, including ones past the edge of the
    /// `i32` range, count as empty, so boundary cells expose their outward
    /// faces. The cell itself need not be occupied.
    pub fn visible_faces(&self, pos: WorldPos) -> FaceSet {
        Face::ALL
            .into_iter()
            .filter(|&face| !pos.neighbor(face).is_some_and(|n| self.contains_occupied(n)))
            .fold(FaceSet::empty(), |set, face| set | face.flag())
    }
}
