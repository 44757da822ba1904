//! Core voxel types.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Opaque identifier of an externally registered block type.
///
/// Block ID 0 is reserved for empty space; every other value is resolved
/// by whoever owns the block registry.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct BlockId(pub u16);

impl BlockId {
    /// Empty space
    pub const EMPTY: Self = Self(0);

    /// Returns true if this id denotes empty space
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this id references a block
    #[inline]
    pub const fn is_occupied(self) -> bool {
        self.0 != 0
    }
}

impl From<u16> for BlockId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single cell of a volume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Voxel {
    /// The block occupying this cell
    pub block_id: BlockId,
}

impl Voxel {
    /// Empty voxel
    pub const EMPTY: Self = Self {
        block_id: BlockId::EMPTY,
    };

    /// Create a new voxel with the given block ID
    #[inline]
    pub const fn new(block_id: BlockId) -> Self {
        Self { block_id }
    }

    /// Returns true if the cell holds no block
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.block_id.is_empty()
    }

    /// Returns true if the cell holds a block
    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.block_id.is_occupied()
    }
}

impl From<BlockId> for Voxel {
    fn from(block_id: BlockId) -> Self {
        Self::new(block_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_empty() {
        assert!(BlockId::EMPTY.is_empty());
        assert!(!BlockId(0).is_occupied());
        assert!(BlockId(7).is_occupied());
    }

    #[test]
    fn voxel_default_is_empty() {
        assert!(Voxel::default().is_empty());
        assert_eq!(Voxel::default(), Voxel::EMPTY);
    }

    #[test]
    fn zeroed_voxel_is_empty() {
        let voxel: Voxel = Zeroable::zeroed();
        assert!(voxel.is_empty());
    }
}
