//! Coordinate systems for the voxel volume.
//!
//! World positions are signed and may lie on either side of a volume's
//! origin. [`ChunkLayout`] maps them onto the chunk grid with floored
//! division and euclidean remainder, so a coordinate one cell below the
//! origin lands in the last slot of the chunk below, never in slot 0 of a
//! valid chunk.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{CHUNK_SIZE, CHUNK_SIZE_I32};
use crate::error::{Axis, Error, Result};
use crate::face::Face;

/// Position within a chunk (0 to CHUNK_SIZE-1 per axis).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct LocalPos {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl LocalPos {
    /// Create a new local position
    #[inline]
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        debug_assert!((x as usize) < CHUNK_SIZE);
        debug_assert!((y as usize) < CHUNK_SIZE);
        debug_assert!((z as usize) < CHUNK_SIZE);
        Self { x, y, z }
    }

    /// Convert to linear index for flat array storage (x-major).
    #[inline]
    pub const fn to_index(self) -> usize {
        ((self.x as usize) * CHUNK_SIZE + self.y as usize) * CHUNK_SIZE + self.z as usize
    }

    /// Create from linear index
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        let z = (index % CHUNK_SIZE) as u8;
        let y = ((index / CHUNK_SIZE) % CHUNK_SIZE) as u8;
        let x = (index / (CHUNK_SIZE * CHUNK_SIZE)) as u8;
        Self { x, y, z }
    }
}

/// Chunk position in the volume's chunk grid.
///
/// Components are relative to the volume origin, so positions below the
/// origin produce negative components.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkPos {
    /// Create a new chunk position
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// World position in voxel coordinates.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct WorldPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WorldPos {
    /// Create a new world position
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell containing a floating point position.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn containing(v: Vec3) -> Self {
        let cell = v.floor();
        Self::new(cell.x as i32, cell.y as i32, cell.z as i32)
    }

    /// Convert to glam IVec3
    #[inline]
    pub const fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }

    /// Offset by `delta`, or `None` if any component leaves the `i32` range.
    #[inline]
    pub const fn checked_offset(self, delta: IVec3) -> Option<Self> {
        match (
            self.x.checked_add(delta.x),
            self.y.checked_add(delta.y),
            self.z.checked_add(delta.z),
        ) {
            (Some(x), Some(y), Some(z)) => Some(Self::new(x, y, z)),
            _ => None,
        }
    }

    /// The adjacent cell across `face`, if it is representable.
    #[inline]
    pub const fn neighbor(self, face: Face) -> Option<Self> {
        self.checked_offset(face.normal())
    }
}

impl From<IVec3> for WorldPos {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<WorldPos> for IVec3 {
    fn from(pos: WorldPos) -> Self {
        pos.to_ivec3()
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Inclusive per-axis bounds of a volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolumeBounds {
    /// Smallest addressable cell
    pub min: WorldPos,
    /// Largest addressable cell
    pub max: WorldPos,
}

impl VolumeBounds {
    /// Create bounds from inclusive corners
    #[inline]
    pub const fn new(min: WorldPos, max: WorldPos) -> Self {
        Self { min, max }
    }

    /// Check whether a cell lies inside the bounds.
    #[inline]
    pub const fn contains(&self, pos: WorldPos) -> bool {
        self.min.x <= pos.x
            && pos.x <= self.max.x
            && self.min.y <= pos.y
            && pos.y <= self.max.y
            && self.min.z <= pos.z
            && pos.z <= self.max.z
    }
}

impl fmt::Display for VolumeBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Maps world coordinates onto a fixed grid of chunks.
///
/// The layout is anchored at an arbitrary signed origin, which need not be
/// chunk aligned. It performs no bounds checking of its own: [`Self::split`]
/// and [`Self::chunk_index`] are total arithmetic, and callers check
/// [`Self::contains`] before using an index to address storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkLayout {
    origin: WorldPos,
    chunks: [u32; 3],
}

impl ChunkLayout {
    /// Build a layout covering `extent` voxels per axis from `origin`.
    ///
    /// Each extent is rounded up to a whole number of chunks. Zero extents,
    /// and extents whose rounded size would push the last cell past
    /// `i32::MAX`, are rejected.
    pub fn new(origin: WorldPos, extent: [u32; 3]) -> Result<Self> {
        let axes = [
            (Axis::X, origin.x, extent[0]),
            (Axis::Y, origin.y, extent[1]),
            (Axis::Z, origin.z, extent[2]),
        ];

        let mut chunks = [0u32; 3];
        for (slot, (axis, start, length)) in chunks.iter_mut().zip(axes) {
            *slot = Self::chunks_along(axis, start, length)?;
        }

        let total = chunks
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n as usize));
        if total.is_none() {
            return Err(Error::InvalidExtent {
                axis: Axis::X,
                reason: format!("chunk grid {chunks:?} is too large to allocate"),
            });
        }

        Ok(Self { origin, chunks })
    }

    fn chunks_along(axis: Axis, start: i32, length: u32) -> Result<u32> {
        if length == 0 {
            return Err(Error::InvalidExtent {
                axis,
                reason: "extent must be positive".into(),
            });
        }
        let count = length.div_ceil(CHUNK_SIZE as u32);
        let last = i64::from(start) + i64::from(count) * CHUNK_SIZE as i64 - 1;
        if last > i64::from(i32::MAX) {
            return Err(Error::InvalidExtent {
                axis,
                reason: format!("{length} voxels from {start} overflow world coordinates"),
            });
        }
        Ok(count)
    }

    /// World position of the first cell of chunk (0, 0, 0).
    #[inline]
    pub const fn origin(&self) -> WorldPos {
        self.origin
    }

    /// Number of chunks along each axis.
    #[inline]
    pub const fn chunk_counts(&self) -> [u32; 3] {
        self.chunks
    }

    /// Total number of chunks in the grid.
    #[inline]
    pub const fn chunk_count(&self) -> usize {
        self.chunks[0] as usize * self.chunks[1] as usize * self.chunks[2] as usize
    }

    /// Split a world position into chunk position and in-chunk offset.
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn split(&self, pos: WorldPos) -> (ChunkPos, LocalPos) {
        let size = i64::from(CHUNK_SIZE_I32);
        let rel = [
            i64::from(pos.x) - i64::from(self.origin.x),
            i64::from(pos.y) - i64::from(self.origin.y),
            i64::from(pos.z) - i64::from(self.origin.z),
        ];
        let chunk = ChunkPos::new(
            rel[0].div_euclid(size) as i32,
            rel[1].div_euclid(size) as i32,
            rel[2].div_euclid(size) as i32,
        );
        let local = LocalPos::new(
            rel[0].rem_euclid(size) as u8,
            rel[1].rem_euclid(size) as u8,
            rel[2].rem_euclid(size) as u8,
        );
        (chunk, local)
    }

    /// Recompose a world position from chunk position and in-chunk offset.
    ///
    /// Computed in `i64`; only meaningful for cells inside the grid, which
    /// [`Self::new`] guarantees fit in `i32`.
    #[inline]
    pub const fn join(&self, chunk: ChunkPos, local: LocalPos) -> WorldPos {
        WorldPos::new(
            Self::cell_along(self.origin.x, chunk.x, local.x),
            Self::cell_along(self.origin.y, chunk.y, local.y),
            Self::cell_along(self.origin.z, chunk.z, local.z),
        )
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn cell_along(start: i32, chunk: i32, local: u8) -> i32 {
        (start as i64 + chunk as i64 * CHUNK_SIZE_I32 as i64 + local as i64) as i32
    }

    /// Last cell along an axis starting at `start` with `chunks` chunks.
    #[allow(clippy::cast_possible_truncation)]
    const fn last_along(start: i32, chunks: u32) -> i32 {
        (start as i64 + chunks as i64 * CHUNK_SIZE_I32 as i64 - 1) as i32
    }

    /// Row-major linear index of a chunk: `(x * y_chunks + y) * z_chunks + z`.
    ///
    /// Only meaningful for chunk positions inside the grid.
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    pub const fn chunk_index(&self, chunk: ChunkPos) -> usize {
        debug_assert!(chunk.x >= 0 && chunk.y >= 0 && chunk.z >= 0);
        (chunk.x as usize * self.chunks[1] as usize + chunk.y as usize) * self.chunks[2] as usize
            + chunk.z as usize
    }

    /// Inverse of [`Self::chunk_index`].
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn chunk_pos(&self, index: usize) -> ChunkPos {
        let y_chunks = self.chunks[1] as usize;
        let z_chunks = self.chunks[2] as usize;
        ChunkPos::new(
            (index / (y_chunks * z_chunks)) as i32,
            ((index / z_chunks) % y_chunks) as i32,
            (index % z_chunks) as i32,
        )
    }

    #[inline]
    pub const fn min_x(&self) -> i32 {
        self.origin.x
    }

    #[inline]
    pub const fn max_x(&self) -> i32 {
        Self::last_along(self.origin.x, self.chunks[0])
    }

    #[inline]
    pub const fn min_y(&self) -> i32 {
        self.origin.y
    }

    #[inline]
    pub const fn max_y(&self) -> i32 {
        Self::last_along(self.origin.y, self.chunks[1])
    }

    #[inline]
    pub const fn min_z(&self) -> i32 {
        self.origin.z
    }

    #[inline]
    pub const fn max_z(&self) -> i32 {
        Self::last_along(self.origin.z, self.chunks[2])
    }

    /// Inclusive bounds of every addressable cell.
    #[inline]
    pub const fn bounds(&self) -> VolumeBounds {
        VolumeBounds::new(
            WorldPos::new(self.min_x(), self.min_y(), self.min_z()),
            WorldPos::new(self.max_x(), self.max_y(), self.max_z()),
        )
    }

    /// Check whether a world position is addressable.
    #[inline]
    pub const fn contains(&self, pos: WorldPos) -> bool {
        self.bounds().contains(pos)
    }
}
