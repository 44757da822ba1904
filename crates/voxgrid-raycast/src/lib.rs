//! Raycasting and pick/edit resolution over a [`voxgrid_volume::VoxelVolume`].
//!
//! Both halves are stateless: they borrow the volume for one call and keep
//! nothing afterwards.

pub mod edit;
pub mod raycast;

pub use edit::{
    apply_edit, apply_edit_shared, apply_edit_with, apply_resolved, resolve_target, EditIntent,
    EditOutcome,
};
pub use raycast::{raycast, raycast_with, RaycastConfig, RaycastResult};
