//! First-person camera state.

use glam::{Mat4, Vec3};

/// Pitch is kept just short of straight up/down so the look vector never
/// flips.
const PITCH_LIMIT: f32 = 89.0_f32.to_radians();

/// Position, orientation and movement intent of the viewer.
///
/// `yaw` turns about +y, `pitch` tilts about the camera's x axis. At zero
/// yaw and pitch the camera looks down -z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    /// Eye position in world space.
    pub position: Vec3,
    /// Horizontal angle in radians.
    pub yaw: f32,
    /// Vertical angle in radians.
    pub pitch: f32,
    /// Requested movement in camera space (x right, y up, z back).
    pub velocity: Vec3,
}

impl CameraState {
    /// Create a camera at `position` looking down -z.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Unit vector the camera looks along.
    #[must_use]
    pub fn look_vector(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * (-self.yaw).sin(),
            self.pitch.sin(),
            -self.pitch.cos() * (-self.yaw).cos(),
        )
    }

    /// Turn the camera, clamping pitch.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move `speed` units along the requested velocity, rotated by yaw.
    pub fn advance(&mut self, speed: f32) {
        let Some(velocity) = self.velocity.try_normalize() else {
            return;
        };
        let (sin, cos) = self.yaw.sin_cos();
        let world = Vec3::new(
            cos * velocity.x + sin * velocity.z,
            velocity.y,
            -sin * velocity.x + cos * velocity.z,
        );
        self.position += speed * world;
    }

    /// World-to-view transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(-self.pitch)
            * Mat4::from_rotation_y(-self.yaw)
            * Mat4::from_translation(-self.position)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_looks_down_negative_z() {
        let camera = CameraState::default();
        assert_relative_eq!(camera.look_vector().z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(camera.look_vector().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn yaw_quarter_turn_looks_down_negative_x() {
        let mut camera = CameraState::default();
        camera.rotate(FRAC_PI_2, 0.0);
        let look = camera.look_vector();
        assert_relative_eq!(look.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(look.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = CameraState::default();
        camera.rotate(0.0, 10.0);
        assert_relative_eq!(camera.pitch, PITCH_LIMIT);
        assert!(camera.look_vector().y > 0.99);
    }

    #[test]
    fn advance_follows_yaw() {
        let mut camera = CameraState::new(Vec3::ZERO);
        camera.velocity = Vec3::new(0.0, 0.0, -1.0);
        camera.advance(2.0);
        assert_relative_eq!(camera.position.z, -2.0, epsilon = 1e-6);

        camera.rotate(FRAC_PI_2, 0.0);
        camera.advance(1.0);
        assert_relative_eq!(camera.position.x, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn advance_without_velocity_stays_put() {
        let mut camera = CameraState::new(Vec3::ONE);
        camera.advance(5.0);
        assert_eq!(camera.position, Vec3::ONE);
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let mut camera = CameraState::new(Vec3::new(1.0, 2.0, 3.0));
        camera.rotate(0.7, 0.3);
        let view = camera.view_matrix();

        let eye = view.transform_point3(camera.position);
        assert_relative_eq!(eye.length(), 0.0, epsilon = 1e-5);

        let ahead = view.transform_point3(camera.position + camera.look_vector());
        assert_relative_eq!(ahead.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ahead.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ahead.z, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn moving_forward_matches_look_vector() {
        let mut camera = CameraState::default();
        camera.rotate(0.7, 0.0);
        let look = camera.look_vector();
        camera.velocity = Vec3::NEG_Z;
        camera.advance(1.0);
        assert_relative_eq!(camera.position.x, look.x, epsilon = 1e-5);
        assert_relative_eq!(camera.position.z, look.z, epsilon = 1e-5);
    }
}
