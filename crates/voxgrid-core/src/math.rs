//! Math utilities and helpers.

use glam::Vec3;

/// Ray for raycasting operations.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    /// Ray origin
    pub origin: Vec3,
    /// Ray direction (always unit length)
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// Returns `None` for a zero-length or non-finite direction, which has
    /// no meaningful normal form.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        direction
            .try_normalize()
            .map(|direction| Self { origin, direction })
    }

    /// Get a point along the ray at distance t
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();
        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(5.0), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0)).unwrap();
        assert_relative_eq!(ray.direction.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(ray.direction.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(ray.direction.z, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_direction_rejected() {
        assert!(Ray::new(Vec3::ONE, Vec3::ZERO).is_none());
        assert!(Ray::new(Vec3::ONE, Vec3::new(f32::NAN, 0.0, 1.0)).is_none());
    }
}
