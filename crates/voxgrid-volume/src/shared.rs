//! Lock-guarded volume handle for readers on other threads.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use voxgrid_core::{FaceSet, Result, Voxel, WorldPos};

use crate::volume::VoxelVolume;

/// A cloneable handle to a volume shared between an editing thread and
/// any number of readers.
///
/// Readers hold a read guard for the duration of a query, writers hold the
/// write guard for the duration of an edit, so a reader never sees a cell
/// halfway through a write.
#[derive(Clone, Debug)]
pub struct SharedVolume {
    inner: Arc<RwLock<VoxelVolume>>,
}

impl SharedVolume {
    /// Wrap a volume for sharing.
    pub fn new(volume: VoxelVolume) -> Self {
        Self {
            inner: Arc::new(RwLock::new(volume)),
        }
    }

    /// Take a read guard, e.g. to snapshot a region or run several queries.
    pub fn read(&self) -> RwLockReadGuard<'_, VoxelVolume> {
        self.inner.read()
    }

    /// Take the write guard.
    pub fn write(&self) -> RwLockWriteGuard<'_, VoxelVolume> {
        self.inner.write()
    }

    /// Execute a function with read access to the volume.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&VoxelVolume) -> R,
    {
        f(&*self.inner.read())
    }

    /// Execute a function with write access to the volume.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut VoxelVolume) -> R,
    {
        f(&mut *self.inner.write())
    }

    /// Read one voxel under a read guard.
    pub fn get(&self, pos: WorldPos) -> Result<Voxel> {
        self.inner.read().get(pos)
    }

    /// Write one voxel under the write guard.
    pub fn set(&self, pos: WorldPos, voxel: impl Into<Voxel>) -> Result<Voxel> {
        self.inner.write().set(pos, voxel)
    }

    /// Occupancy test under a read guard.
    pub fn contains_occupied(&self, pos: WorldPos) -> bool {
        self.inner.read().contains_occupied(pos)
    }

    /// Visible faces under a read guard.
    pub fn visible_faces(&self, pos: WorldPos) -> FaceSet {
        self.inner.read().visible_faces(pos)
    }

    /// Clone the current contents out from under a read guard.
    pub fn snapshot(&self) -> VoxelVolume {
        self.inner.read().clone()
    }
}

impl From<VoxelVolume> for SharedVolume {
    fn from(volume: VoxelVolume) -> Self {
        Self::new(volume)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use voxgrid_core::BlockId;

    use super::*;

    #[test]
    fn handles_share_storage() {
        let shared = SharedVolume::new(VoxelVolume::new(16, 16, 16).unwrap());
        let other = shared.clone();
        shared.set(WorldPos::new(1, 2, 3), BlockId(5)).unwrap();
        assert!(other.contains_occupied(WorldPos::new(1, 2, 3)));
        assert_eq!(other.get(WorldPos::new(1, 2, 3)).unwrap().block_id, BlockId(5));
    }

    #[test]
    fn snapshot_is_detached() {
        let shared = SharedVolume::new(VoxelVolume::new(16, 16, 16).unwrap());
        let snapshot = shared.snapshot();
        shared.set(WorldPos::new(0, 0, 0), BlockId(1)).unwrap();
        assert_eq!(snapshot.occupied_count(), 0);
        assert_eq!(shared.read().occupied_count(), 1);
    }

    #[test]
    fn readers_see_whole_writes() {
        let shared = SharedVolume::new(VoxelVolume::new(16, 16, 16).unwrap());
        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                for id in 1..=200u16 {
                    shared.with_write(|volume| {
                        volume.set(WorldPos::new(0, 0, 0), BlockId(id)).unwrap();
                        volume.set(WorldPos::new(15, 15, 15), BlockId(id)).unwrap();
                    });
                }
            })
        };
        for _ in 0..200 {
            let (a, b) = shared.with_read(|volume| {
                (
                    volume.get(WorldPos::new(0, 0, 0)).unwrap(),
                    volume.get(WorldPos::new(15, 15, 15)).unwrap(),
                )
            });
            assert_eq!(a, b);
        }
        writer.join().unwrap();
        assert_eq!(
            shared.get(WorldPos::new(15, 15, 15)).unwrap().block_id,
            BlockId(200)
        );
    }
}
