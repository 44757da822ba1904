//! Core types, coordinate mapping, and errors for voxgrid.
//!
//! This crate provides the foundational pieces shared by the volume,
//! raycasting and interaction crates:
//! - Voxel and block identifier types
//! - World, chunk and local coordinates plus the [`ChunkLayout`] mapper
//! - Cell faces and face sets
//! - The engine-wide error type

pub mod coords;
pub mod error;
pub mod face;
pub mod math;
pub mod types;

pub use coords::{ChunkLayout, ChunkPos, LocalPos, VolumeBounds, WorldPos};
pub use error::{Axis, Error, Result};
pub use face::{Face, FaceSet};
pub use math::Ray;
pub use types::{BlockId, Voxel};

/// Engine-wide constants
pub mod constants {
    /// Size of a chunk in voxels per axis
    pub const CHUNK_SIZE: usize = 16;
    /// Total voxels in a chunk (16^3)
    pub const CHUNK_SIZE_CUBED: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;
    /// Chunk size as a signed world-space length
    pub const CHUNK_SIZE_I32: i32 = CHUNK_SIZE as i32;
}
