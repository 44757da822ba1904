//! The six axis-aligned faces of a voxel cell.

use bitflags::bitflags;
use glam::IVec3;

/// One side of a cell.
///
/// The discriminant order matches [`FaceSet`]'s bit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// -z
    Back,
    /// +z
    Front,
    /// -x
    Left,
    /// +x
    Right,
    /// -y
    Bottom,
    /// +y
    Top,
}

impl Face {
    /// All faces in discriminant order.
    pub const ALL: [Self; 6] = [
        Self::Back,
        Self::Front,
        Self::Left,
        Self::Right,
        Self::Bottom,
        Self::Top,
    ];

    /// Unit offset from a cell to its neighbor across this face.
    #[must_use]
    pub const fn normal(self) -> IVec3 {
        match self {
            Self::Back => IVec3::new(0, 0, -1),
            Self::Front => IVec3::new(0, 0, 1),
            Self::Left => IVec3::new(-1, 0, 0),
            Self::Right => IVec3::new(1, 0, 0),
            Self::Bottom => IVec3::new(0, -1, 0),
            Self::Top => IVec3::new(0, 1, 0),
        }
    }

    /// The face on the other side of the cell.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Back => Self::Front,
            Self::Front => Self::Back,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Top => Self::Bottom,
        }
    }

    /// The single-bit set for this face.
    #[must_use]
    pub const fn flag(self) -> FaceSet {
        match self {
            Self::Back => FaceSet::BACK,
            Self::Front => FaceSet::FRONT,
            Self::Left => FaceSet::LEFT,
            Self::Right => FaceSet::RIGHT,
            Self::Bottom => FaceSet::BOTTOM,
            Self::Top => FaceSet::TOP,
        }
    }
}

bitflags! {
    /// A set of cell faces.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FaceSet: u8 {
        const BACK   = 0b0000_0001;
        const FRONT  = 0b0000_0010;
        const LEFT   = 0b0000_0100;
        const RIGHT  = 0b0000_1000;
        const BOTTOM = 0b0001_0000;
        const TOP    = 0b0010_0000;
    }
}

impl FaceSet {
    /// Returns `true` if `face` is in the set.
    #[inline]
    #[must_use]
    pub const fn has(self, face: Face) -> bool {
        self.contains(face.flag())
    }

    /// Iterate the faces in the set in [`Face::ALL`] order.
    pub fn faces(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |face| self.has(*face))
    }
}

impl From<Face> for FaceSet {
    fn from(face: Face) -> Self {
        face.flag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_faces_have_opposite_normals() {
        for face in Face::ALL {
            assert_eq!(face.normal(), -face.opposite().normal());
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn normals_follow_axis_table() {
        assert_eq!(Face::Back.normal(), IVec3::NEG_Z);
        assert_eq!(Face::Front.normal(), IVec3::Z);
        assert_eq!(Face::Left.normal(), IVec3::NEG_X);
        assert_eq!(Face::Right.normal(), IVec3::X);
        assert_eq!(Face::Bottom.normal(), IVec3::NEG_Y);
        assert_eq!(Face::Top.normal(), IVec3::Y);
    }

    #[test]
    fn flag_bits_follow_discriminant_order() {
        for (i, face) in Face::ALL.into_iter().enumerate() {
            assert_eq!(face.flag().bits(), 1 << i);
        }
    }

    #[test]
    fn face_set_iteration() {
        let set = FaceSet::TOP | FaceSet::LEFT;
        assert!(set.has(Face::Top));
        assert!(!set.has(Face::Bottom));
        assert_eq!(set.faces().collect::<Vec<_>>(), vec![Face::Left, Face::Top]);
        assert_eq!(FaceSet::all().faces().count(), 6);
    }
}
