//! Chunked voxel volume storage for voxgrid.
//!
//! A [`VoxelVolume`] covers a fixed, bounded box of world cells anchored at
//! an arbitrary signed origin. Storage is a flat array of 16^3 chunks
//! addressed through [`voxgrid_core::ChunkLayout`].

pub mod chunk;
pub mod faces;
pub mod shared;
pub mod volume;

pub use chunk::Chunk;
pub use shared::SharedVolume;
pub use volume::{VolumeConfig, VoxelVolume};
