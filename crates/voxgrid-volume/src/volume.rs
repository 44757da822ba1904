//! Bounded voxel volume built from a fixed grid of chunks.

use serde::{Deserialize, Serialize};
use tracing::debug;
use voxgrid_core::{
    BlockId, ChunkLayout, ChunkPos, Error, LocalPos, Result, VolumeBounds, Voxel, WorldPos,
};

use crate::chunk::Chunk;

/// Volume construction parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Requested size in voxels along x, y and z. Rounded up to whole chunks.
    pub extent: [u32; 3],
    /// World position of the volume's lowest corner.
    pub origin: WorldPos,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            extent: [16, 16, 16],
            origin: WorldPos::default(),
        }
    }
}

impl VolumeConfig {
    /// Create a config for a volume of the given size anchored at the world origin.
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            extent: [width, height, depth],
            ..Default::default()
        }
    }

    /// Set the world position of the lowest corner.
    pub fn with_origin(mut self, x0: i32, y0: i32, z0: i32) -> Self {
        self.origin = WorldPos::new(x0, y0, z0);
        self
    }
}

/// A fixed-extent voxel volume.
///
/// The chunk array is allocated once at construction and never resized.
/// `get`/`set` reject coordinates outside the volume with
/// [`Error::OutOfBounds`]; [`VoxelVolume::contains_occupied`] is the only
/// accessor that treats outside cells as simply empty.
#[derive(Clone, Debug)]
pub struct VoxelVolume {
    layout: ChunkLayout,
    chunks: Vec<Chunk>,
}

impl VoxelVolume {
    /// Create a volume anchored at the world origin.
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self> {
        Self::from_config(&VolumeConfig::new(width, height, depth))
    }

    /// Create a volume anchored at `(x0, y0, z0)`.
    pub fn with_origin(
        width: u32,
        height: u32,
        depth: u32,
        x0: i32,
        y0: i32,
        z0: i32,
    ) -> Result<Self> {
        Self::from_config(&VolumeConfig::new(width, height, depth).with_origin(x0, y0, z0))
    }

    /// Create a volume from a config.
    pub fn from_config(config: &VolumeConfig) -> Result<Self> {
        let layout = ChunkLayout::new(config.origin, config.extent)?;
        let chunks = vec![Chunk::new(); layout.chunk_count()];
        debug!(
            origin = %config.origin,
            chunks = ?layout.chunk_counts(),
            "allocated voxel volume"
        );
        Ok(Self { layout, chunks })
    }

    /// The coordinate mapping used by this volume.
    #[inline]
    pub const fn layout(&self) -> &ChunkLayout {
        &self.layout
    }

    /// Inclusive bounds of every addressable cell.
    #[inline]
    pub const fn bounds(&self) -> VolumeBounds {
        self.layout.bounds()
    }

    /// Check whether a cell is addressable.
    #[inline]
    pub const fn in_bounds(&self, pos: WorldPos) -> bool {
        self.layout.contains(pos)
    }

    /// Number of chunks along each axis.
    #[inline]
    pub const fn chunk_counts(&self) -> [u32; 3] {
        self.layout.chunk_counts()
    }

    /// Total number of chunks.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// The chunk at a chunk grid position, if it exists.
    pub fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        let [x, y, z] = self.layout.chunk_counts();
        let inside = |c: i32, n: u32| c >= 0 && c.unsigned_abs() < n;
        if inside(pos.x, x) && inside(pos.y, y) && inside(pos.z, z) {
            self.chunks.get(self.layout.chunk_index(pos))
        } else {
            None
        }
    }

    fn locate(&self, pos: WorldPos) -> Result<(usize, LocalPos)> {
        if !self.in_bounds(pos) {
            return Err(Error::OutOfBounds {
                pos,
                bounds: self.bounds(),
            });
        }
        let (chunk, local) = self.layout.split(pos);
        Ok((self.layout.chunk_index(chunk), local))
    }

    /// Read the voxel at `pos`.
    pub fn get(&self, pos: WorldPos) -> Result<Voxel> {
        let (index, local) = self.locate(pos)?;
        Ok(self.chunks[index].get(local))
    }

    /// Write the voxel at `pos`, returning the previous value.
    ///
    /// Only the targeted cell changes.
    pub fn set(&mut self, pos: WorldPos, voxel: impl Into<Voxel>) -> Result<Voxel> {
        let (index, local) = self.locate(pos)?;
        Ok(self.chunks[index].set(local, voxel.into()))
    }

    /// Returns `true` if `pos` is inside the volume and holds a block.
    ///
    /// Out-of-range positions read as empty.
    #[inline]
    pub fn contains_occupied(&self, pos: WorldPos) -> bool {
        self.locate(pos)
            .is_ok_and(|(index, local)| self.chunks[index].get(local).is_occupied())
    }

    /// Set every cell of the inclusive box spanned by `a` and `b`.
    ///
    /// Both corners are checked before anything is written. Returns the
    /// number of cells written.
    pub fn fill(&mut self, a: WorldPos, b: WorldPos, block: BlockId) -> Result<usize> {
        self.locate(a)?;
        self.locate(b)?;
        let min = a.to_ivec3().min(b.to_ivec3());
        let max = a.to_ivec3().max(b.to_ivec3());

        let mut written = 0;
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set(WorldPos::new(x, y, z), block)?;
                    written += 1;
                }
            }
        }
        debug!(from = %a, to = %b, %block, written, "filled box");
        Ok(written)
    }

    /// Every cell of the volume with its block id, x-major then y then z.
    pub fn iter(&self) -> impl Iterator<Item = (WorldPos, BlockId)> + '_ {
        let bounds = self.bounds();
        (bounds.min.x..=bounds.max.x)
            .flat_map(move |x| {
                (bounds.min.y..=bounds.max.y).flat_map(move |y| {
                    (bounds.min.z..=bounds.max.z).map(move |z| WorldPos::new(x, y, z))
                })
            })
            .map(move |pos| {
                let (chunk, local) = self.layout.split(pos);
                let id = self.chunks[self.layout.chunk_index(chunk)].block_id(local);
                (pos, id)
            })
    }

    /// Occupied cells only, in chunk order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (WorldPos, BlockId)> + '_ {
        self.chunks.iter().enumerate().flat_map(move |(index, chunk)| {
            let chunk_pos = self.layout.chunk_pos(index);
            chunk
                .voxels()
                .iter()
                .enumerate()
                .filter(|(_, voxel)| voxel.is_occupied())
                .map(move |(local, voxel)| {
                    let pos = self.layout.join(chunk_pos, LocalPos::from_index(local));
                    (pos, voxel.block_id)
                })
        })
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.chunks.iter().map(Chunk::occupied_count).sum()
    }
}
