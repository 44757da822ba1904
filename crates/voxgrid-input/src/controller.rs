//! Turns window events into camera motion, toggles and voxel edits.

use glam::Vec3;
use tracing::{debug, trace};
use voxgrid_core::{BlockId, Result};
use voxgrid_raycast::{apply_edit_with, EditIntent, EditOutcome, RaycastConfig};
use voxgrid_volume::{SharedVolume, VoxelVolume};
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::CameraState;
use crate::control::{ControlState, EditAction, EditBindings};
use crate::mouse::MouseButton;

/// Radians of turn per pixel of mouse motion.
pub const LOOK_SENSITIVITY: f32 = 1.0 / 300.0;

/// Mouse deltas whose `|dx| + |dy|` reaches this many pixels are discarded
/// as cursor warps rather than motion.
pub const MAX_LOOK_DELTA: f64 = 10.0;

/// An edit produced by a click, to be applied to a volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditRequest {
    pub origin: Vec3,
    pub direction: Vec3,
    pub intent: EditIntent,
}

impl EditRequest {
    /// Raycast into `volume` and perform the edit.
    pub fn apply(
        &self,
        volume: &mut VoxelVolume,
        config: &RaycastConfig,
    ) -> Result<Option<EditOutcome>> {
        apply_edit_with(volume, self.origin, self.direction, self.intent, config)
    }

    /// [`Self::apply`] under the shared volume's write lock.
    pub fn apply_shared(
        &self,
        volume: &SharedVolume,
        config: &RaycastConfig,
    ) -> Result<Option<EditOutcome>> {
        volume.with_write(|volume| self.apply(volume, config))
    }
}

/// Owns the camera and control toggles of one interaction session.
#[derive(Debug, Clone)]
pub struct InteractionController {
    camera: CameraState,
    control: ControlState,
    bindings: EditBindings,
    block: BlockId,
}

impl InteractionController {
    /// Create a controller with default bindings, placing block `1`.
    #[must_use]
    pub fn new(camera: CameraState) -> Self {
        Self {
            camera,
            control: ControlState::default(),
            bindings: EditBindings::default(),
            block: BlockId(1),
        }
    }

    #[must_use]
    pub const fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    #[must_use]
    pub const fn control(&self) -> &ControlState {
        &self.control
    }

    pub fn bindings_mut(&mut self) -> &mut EditBindings {
        &mut self.bindings
    }

    /// Block used by place edits.
    #[must_use]
    pub const fn block(&self) -> BlockId {
        self.block
    }

    pub fn select_block(&mut self, block: BlockId) {
        self.block = block;
    }

    /// Handle a mouse button press.
    ///
    /// With the cursor free, a left or right click captures it and nothing
    /// else happens. With the cursor captured, a bound button yields an edit
    /// aimed along the camera's look vector.
    pub fn press_button(&mut self, button: MouseButton) -> Option<EditRequest> {
        if !self.control.cursor_locked {
            if matches!(button, MouseButton::Left | MouseButton::Right) {
                self.control.cursor_locked = true;
                debug!("cursor locked");
            }
            return None;
        }

        let intent = match self.bindings.get(button)? {
            EditAction::Place => EditIntent::Place(self.block),
            EditAction::Remove => EditIntent::Remove,
        };
        let request = EditRequest {
            origin: self.camera.position,
            direction: self.camera.look_vector(),
            intent,
        };
        trace!(?request, "edit requested");
        Some(request)
    }

    /// Handle a key press.
    pub fn press_key(&mut self, key: KeyCode) {
        let velocity = &mut self.camera.velocity;
        match key {
            KeyCode::Escape => {
                self.control.cursor_locked = false;
                debug!("cursor unlocked");
            }
            KeyCode::F1 => {
                self.control.toggle_wireframe();
                debug!(wireframe = self.control.wireframe, "render mode toggled");
            }
            KeyCode::KeyW => velocity.z = -1.0,
            KeyCode::KeyS => velocity.z = 1.0,
            KeyCode::KeyA => velocity.x = -1.0,
            KeyCode::KeyD => velocity.x = 1.0,
            KeyCode::Space | KeyCode::KeyQ => velocity.y = 1.0,
            KeyCode::ShiftLeft | KeyCode::ShiftRight | KeyCode::KeyE => velocity.y = -1.0,
            _ => {}
        }
    }

    /// Handle a key release.
    pub fn release_key(&mut self, key: KeyCode) {
        let velocity = &mut self.camera.velocity;
        match key {
            KeyCode::KeyW | KeyCode::KeyS => velocity.z = 0.0,
            KeyCode::KeyA | KeyCode::KeyD => velocity.x = 0.0,
            KeyCode::Space
            | KeyCode::KeyQ
            | KeyCode::ShiftLeft
            | KeyCode::ShiftRight
            | KeyCode::KeyE => velocity.y = 0.0,
            _ => {}
        }
    }

    /// Turn the camera by a mouse delta in pixels. Ignored unless the cursor
    /// is captured, and ignored for jumps of [`MAX_LOOK_DELTA`] or more.
    pub fn look(&mut self, dx: f64, dy: f64) {
        if !self.control.cursor_locked {
            return;
        }
        if dx.abs() + dy.abs() >= MAX_LOOK_DELTA {
            trace!(dx, dy, "mouse jump ignored");
            return;
        }
        #[allow(clippy::cast_possible_truncation)]
        let (dx, dy) = (dx as f32, dy as f32);
        self.camera.rotate(-dx * LOOK_SENSITIVITY, -dy * LOOK_SENSITIVITY);
    }

    /// Advance the camera along its current velocity.
    pub fn update(&mut self, speed: f32) {
        self.camera.advance(speed);
    }

    /// Process a window event. Returns an edit when a click produced one.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<EditRequest> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.process_key_event(event);
                None
            }
            WindowEvent::MouseInput {
                button,
                state: ElementState::Pressed,
                ..
            } => MouseButton::try_from(*button)
                .ok()
                .and_then(|button| self.press_button(button)),
            _ => None,
        }
    }

    /// Process raw mouse motion for mouse-look.
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.look(delta.0, delta.1);
        }
    }

    fn process_key_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        match event.state {
            ElementState::Pressed if !event.repeat => self.press_key(key),
            ElementState::Pressed => {}
            ElementState::Released => self.release_key(key),
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(CameraState::default())
    }
}

#[cfg(test)]
mod tests {
    use voxgrid_core::WorldPos;

    use super::*;

    fn scene() -> VoxelVolume {
        let mut volume = VoxelVolume::with_origin(16, 16, 16, -8, -8, -8).unwrap();
        volume.set(WorldPos::new(0, -4, -4), BlockId(2)).unwrap();
        volume
    }

    fn controller_facing_block() -> InteractionController {
        // looking down -z from just in front of the block
        InteractionController::new(CameraState::new(Vec3::new(0.5, -3.5, 2.5)))
    }

    #[test]
    fn first_click_only_locks_cursor() {
        let mut controller = controller_facing_block();
        assert!(!controller.control().cursor_locked);
        assert_eq!(controller.press_button(MouseButton::Right), None);
        assert!(controller.control().cursor_locked);
    }

    #[test]
    fn middle_click_does_not_lock() {
        let mut controller = controller_facing_block();
        assert_eq!(controller.press_button(MouseButton::Middle), None);
        assert!(!controller.control().cursor_locked);
    }

    #[test]
    fn locked_right_click_places_against_face() {
        let mut volume = scene();
        let mut controller = controller_facing_block();
        controller.press_button(MouseButton::Left);
        controller.select_block(BlockId(7));

        let request = controller.press_button(MouseButton::Right).unwrap();
        assert_eq!(request.intent, EditIntent::Place(BlockId(7)));
        let outcome = request
            .apply(&mut volume, &RaycastConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(outcome.target, WorldPos::new(0, -4, -3));
        assert_eq!(outcome.current.block_id, BlockId(7));
    }

    #[test]
    fn locked_left_click_removes() {
        let mut volume = scene();
        let mut controller = controller_facing_block();
        controller.press_button(MouseButton::Right);

        let request = controller.press_button(MouseButton::Left).unwrap();
        let outcome = request
            .apply(&mut volume, &RaycastConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(outcome.target, WorldPos::new(0, -4, -4));
        assert!(volume.get(outcome.target).unwrap().is_empty());
    }

    #[test]
    fn escape_unlocks_and_stops_edits() {
        let mut controller = controller_facing_block();
        controller.press_button(MouseButton::Right);
        controller.press_key(KeyCode::Escape);
        assert!(!controller.control().cursor_locked);
        assert_eq!(controller.press_button(MouseButton::Left), None);
        assert!(controller.control().cursor_locked);
    }

    #[test]
    fn f1_toggles_wireframe() {
        let mut controller = InteractionController::default();
        controller.press_key(KeyCode::F1);
        assert!(controller.control().wireframe);
        assert!(!controller.control().cull_face);
    }

    #[test]
    fn movement_keys_set_and_clear_velocity() {
        let mut controller = InteractionController::default();
        controller.press_key(KeyCode::KeyW);
        controller.press_key(KeyCode::KeyD);
        controller.press_key(KeyCode::KeyE);
        assert_eq!(controller.camera().velocity, Vec3::new(1.0, -1.0, -1.0));

        controller.release_key(KeyCode::KeyW);
        controller.release_key(KeyCode::KeyE);
        assert_eq!(controller.camera().velocity, Vec3::new(1.0, 0.0, 0.0));

        controller.update(2.0);
        assert_eq!(controller.camera().position, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn look_requires_locked_cursor() {
        let mut controller = InteractionController::default();
        controller.look(300.0, 0.0);
        assert_eq!(controller.camera().yaw, 0.0);

        controller.press_button(MouseButton::Left);
        controller.look(3.0, 0.0);
        assert!((controller.camera().yaw + 0.01).abs() < 1e-6);
    }

    #[test]
    fn large_mouse_jumps_are_ignored() {
        let mut controller = InteractionController::default();
        controller.press_button(MouseButton::Left);
        controller.look(6.0, -4.0);
        controller.look(300.0, 0.0);
        assert_eq!(controller.camera().yaw, 0.0);
        assert_eq!(controller.camera().pitch, 0.0);

        controller.look(0.0, -6.0);
        assert!((controller.camera().pitch - 0.02).abs() < 1e-6);
    }

    #[test]
    fn unbound_button_yields_nothing() {
        let mut controller = InteractionController::default();
        controller.press_button(MouseButton::Left);
        controller.bindings_mut().unbind(MouseButton::Left);
        assert_eq!(controller.press_button(MouseButton::Left), None);
    }

    #[test]
    fn shared_apply_edits_under_lock() {
        let shared = SharedVolume::new(scene());
        let mut controller = controller_facing_block();
        controller.press_button(MouseButton::Right);
        let request = controller.press_button(MouseButton::Right).unwrap();
        request
            .apply_shared(&shared, &RaycastConfig::default())
            .unwrap();
        assert!(shared.contains_occupied(WorldPos::new(0, -4, -3)));
    }
}
