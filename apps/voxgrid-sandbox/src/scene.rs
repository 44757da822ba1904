//! Demo scene and the scripted session replayed against it.

use glam::Vec3;
use voxgrid_core::{BlockId, Result, WorldPos};
use voxgrid_input::MouseButton;
use voxgrid_volume::{VolumeConfig, VoxelVolume};
use winit::keyboard::KeyCode;

/// 48x24x48 cells anchored at (-24, -8, -24).
pub fn demo_config() -> VolumeConfig {
    VolumeConfig::new(48, 24, 48).with_origin(-24, -8, -24)
}

/// The demo volume: a strip of blocks along z at x = 0, y = -6, cycling
/// through block ids 1..=4.
pub fn demo_volume() -> Result<VoxelVolume> {
    let mut volume = VoxelVolume::from_config(&demo_config())?;
    for z in -4i32..15 {
        #[allow(clippy::cast_possible_truncation)]
        let id = 1 + (z.unsigned_abs() % 4) as u16;
        volume.set(WorldPos::new(0, -6, z), BlockId(id))?;
    }
    Ok(volume)
}

/// Where the camera starts: above the strip, looking down -z.
pub const EYE: Vec3 = Vec3::new(0.5, -2.5, 20.5);

/// One step of the scripted session.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Click(MouseButton),
    Key(KeyCode),
    /// Apply a mouse delta in pixels a number of times.
    Look(f64, f64, u32),
    /// Hold a key for a number of frames at unit speed.
    Walk(KeyCode, u32),
}

/// Capture the cursor, look down at the strip, stack a few blocks, dig one
/// out, then release the cursor and click once more to show that a free
/// cursor never edits.
pub const SCRIPT: &[Step] = &[
    Step::Click(MouseButton::Right),
    Step::Walk(KeyCode::KeyW, 10),
    Step::Look(0.0, 9.0, 53),
    Step::Click(MouseButton::Right),
    Step::Click(MouseButton::Right),
    Step::Click(MouseButton::Left),
    Step::Click(MouseButton::Left),
    Step::Click(MouseButton::Left),
    Step::Key(KeyCode::F1),
    Step::Key(KeyCode::Escape),
    Step::Click(MouseButton::Right),
];
