//! Fixed-size chunk storage.

use voxgrid_core::constants::CHUNK_SIZE_CUBED;
use voxgrid_core::{BlockId, LocalPos, Voxel};

/// A single chunk of voxel data (16x16x16 voxels).
///
/// Chunks are owned by a volume and only addressed through it; they carry
/// no position of their own.
#[derive(Clone)]
pub struct Chunk {
    voxels: Box<[Voxel]>,
}

impl Chunk {
    /// Create a chunk with every voxel empty.
    pub fn new() -> Self {
        Self {
            voxels: vec![Voxel::EMPTY; CHUNK_SIZE_CUBED].into_boxed_slice(),
        }
    }

    /// Read the voxel at a local position.
    #[inline]
    pub fn get(&self, local: LocalPos) -> Voxel {
        self.voxels[local.to_index()]
    }

    /// Replace the voxel at a local position, returning the previous value.
    #[inline]
    pub fn set(&mut self, local: LocalPos, voxel: Voxel) -> Voxel {
        std::mem::replace(&mut self.voxels[local.to_index()], voxel)
    }

    /// Check if this chunk is empty (all air).
    pub fn is_empty(&self) -> bool {
        self.voxels.iter().all(Voxel::is_empty)
    }

    /// Number of occupied voxels in this chunk.
    pub fn occupied_count(&self) -> usize {
        self.voxels.iter().filter(|v| v.is_occupied()).count()
    }

    /// Voxels in local index order.
    #[inline]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Raw block ids in local index order, for handing to a mesh builder.
    #[inline]
    pub fn block_ids(&self) -> &[u16] {
        bytemuck::cast_slice(&self.voxels[..])
    }

    /// Block id at a local position.
    #[inline]
    pub fn block_id(&self, local: LocalPos) -> BlockId {
        self.get(local).block_id
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("occupied", &self.occupied_count())
            .finish()
    }
}
